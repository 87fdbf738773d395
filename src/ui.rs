pub fn render_index(date: &str, habit_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &habit_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #0f172a;
      --card: rgba(30, 41, 59, 0.92);
      --line: rgba(71, 85, 105, 0.35);
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --indigo: #6366f1;
      --green: #10b981;
      --amber: #fbbf24;
      --flame: #f97316;
      --red: #ef4444;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, #0f172a 0%, #1e1b4b 100%);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: flex;
      justify-content: center;
      padding: 40px 16px 64px;
    }

    .app {
      width: min(720px, 100%);
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      text-align: center;
      font-size: 2rem;
    }

    header p {
      margin: 6px 0 0;
      text-align: center;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 20px;
    }

    form.add {
      display: grid;
      grid-template-columns: 1fr auto auto;
      gap: 10px;
    }

    input, select, button {
      font: inherit;
      border-radius: 8px;
      border: 1px solid var(--line);
      background: rgba(15, 23, 42, 0.8);
      color: var(--ink);
      padding: 10px 12px;
    }

    button {
      cursor: pointer;
      border: none;
      font-weight: 600;
    }

    button.primary {
      background: var(--indigo);
      color: white;
    }

    button.complete {
      background: rgba(99, 102, 241, 0.15);
      color: var(--indigo);
      border: 1px solid rgba(99, 102, 241, 0.5);
    }

    button.complete.done {
      background: var(--green);
      color: white;
      border-color: transparent;
    }

    button.remove {
      background: rgba(239, 68, 68, 0.12);
      color: var(--red);
      border: 1px solid rgba(239, 68, 68, 0.4);
    }

    .habit {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 14px 0;
      border-bottom: 1px solid var(--line);
    }

    .habit:last-child {
      border-bottom: none;
    }

    .habit .name {
      font-weight: 600;
    }

    .habit .name.done {
      text-decoration: line-through;
      color: var(--muted);
    }

    .tag {
      display: inline-block;
      font-size: 0.75rem;
      border-radius: 999px;
      padding: 2px 10px;
      margin-right: 6px;
      background: rgba(99, 102, 241, 0.2);
      color: #a5b4fc;
      text-transform: capitalize;
    }

    .tag.streak {
      background: rgba(249, 115, 22, 0.15);
      color: var(--flame);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      text-align: center;
      padding: 14px;
      border: 1px solid var(--line);
      border-radius: 10px;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 700;
    }

    .stat .label {
      color: var(--muted);
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .status {
      min-height: 1.2em;
      text-align: center;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .status[data-type="error"] {
      color: var(--red);
    }

    @media (max-width: 540px) {
      form.add {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p>{{DATE}} &middot; {{COUNT}} habits on record</p>
    </header>

    <section class="card">
      <form class="add" id="add-form">
        <input id="name" placeholder="e.g. Morning meditation" autocomplete="off" required />
        <select id="frequency">
          <option value="daily">Daily</option>
          <option value="weekly">Weekly</option>
        </select>
        <button class="primary" type="submit">Add habit</button>
      </form>
    </section>

    <section class="card" id="list"></section>

    <section class="card">
      <div class="stats">
        <div class="stat">
          <div class="value" id="stat-total">0</div>
          <div class="label">Total habits</div>
        </div>
        <div class="stat">
          <div class="value" id="stat-ever">0</div>
          <div class="label">Ever completed</div>
        </div>
        <div class="stat">
          <div class="value" id="stat-today">0</div>
          <div class="label">Done today</div>
        </div>
        <div class="stat">
          <div class="value" id="stat-rate">0%</div>
          <div class="label">Completion rate</div>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const listEl = document.getElementById('list');
    const statusEl = document.getElementById('status');
    const nameEl = document.getElementById('name');
    const frequencyEl = document.getElementById('frequency');

    const todayString = () => {
      const now = new Date();
      const month = String(now.getMonth() + 1).padStart(2, '0');
      const day = String(now.getDate()).padStart(2, '0');
      return `${now.getFullYear()}-${month}-${day}`;
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>"']/g, (ch) => `&#${ch.charCodeAt(0)};`);

    const renderHabits = (snapshot) => {
      if (snapshot.error) {
        setStatus(snapshot.error, 'error');
      }
      if (snapshot.is_loading) {
        listEl.innerHTML = '<div class="empty">Loading habits&hellip;</div>';
        return;
      }
      if (!snapshot.habits.length) {
        listEl.innerHTML = '<div class="empty">No habits yet. Create one above to get started.</div>';
        return;
      }

      listEl.innerHTML = snapshot.habits.map((habit) => `
        <div class="habit">
          <div>
            <div class="name ${habit.completed_today ? 'done' : ''}">${escapeHtml(habit.name)}</div>
            <span class="tag">${habit.frequency}</span>
            ${habit.streak > 0 ? `<span class="tag streak">${habit.streak} day streak</span>` : ''}
          </div>
          <div>
            <button class="complete ${habit.completed_today ? 'done' : ''}" data-toggle="${habit.id}">
              ${habit.completed_today ? 'Completed' : 'Complete'}
            </button>
            <button class="remove" data-remove="${habit.id}">Remove</button>
          </div>
        </div>
      `).join('');
    };

    const renderStats = (stats) => {
      document.getElementById('stat-total').textContent = stats.total_habits;
      document.getElementById('stat-ever').textContent = stats.ever_completed;
      document.getElementById('stat-today').textContent = stats.completed_today;
      document.getElementById('stat-rate').textContent = `${stats.completion_rate}%`;
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const refreshStats = () =>
      request('/api/stats').then(renderStats);

    const refresh = async () => {
      renderHabits(await request('/api/habits'));
      await refreshStats();
    };

    document.getElementById('add-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const name = nameEl.value.trim();
      if (!name) {
        return;
      }
      try {
        renderHabits(await request('/api/habits', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ name, frequency: frequencyEl.value })
        }));
        nameEl.value = '';
        setStatus('', '');
        await refreshStats();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    listEl.addEventListener('click', async (event) => {
      const toggleId = event.target.dataset.toggle;
      const removeId = event.target.dataset.remove;
      try {
        if (toggleId) {
          renderHabits(await request(`/api/habits/${toggleId}/toggle`, {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({ date: todayString() })
          }));
          await refreshStats();
        } else if (removeId) {
          renderHabits(await request(`/api/habits/${removeId}`, { method: 'DELETE' }));
          await refreshStats();
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
