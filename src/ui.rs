pub fn render_index(quote: &str) -> String {
    INDEX_HTML.replace("{{QUOTE}}", &escape_html(quote))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Logger</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2ff;
      --bg-2: #c7d2fe;
      --ink: #1f2433;
      --accent: #6366f1;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e0e7ff 60%, #f5f7ff 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    .auth {
      width: min(420px, 100%);
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .hidden {
      display: none !important;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat, .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(99, 102, 241, 0.3);
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    button.secondary {
      background: var(--accent-2);
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    form {
      display: grid;
      gap: 14px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: #5f5c57;
    }

    input, select, textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    .form-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .recent {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .recent li {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 10px 14px;
      border-radius: 14px;
      background: rgba(99, 102, 241, 0.06);
    }

    .badge {
      font-size: 0.85rem;
      padding: 4px 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
    }

    svg.chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    svg.chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-line.energy {
      stroke: #22c55e;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    blockquote {
      margin: 0;
      padding: 24px;
      font-size: 1.2rem;
      font-style: italic;
      border-left: 4px solid var(--accent);
      border-radius: 12px;
      background: rgba(99, 102, 241, 0.06);
    }

    .messages {
      display: grid;
      gap: 10px;
      max-height: 360px;
      overflow-y: auto;
      padding: 4px;
    }

    .message {
      max-width: 80%;
      padding: 10px 14px;
      border-radius: 16px;
      background: rgba(47, 72, 88, 0.08);
    }

    .message.user {
      justify-self: end;
      background: var(--accent);
      color: white;
    }

    .chat-form {
      grid-template-columns: 1fr auto;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app auth hidden" id="auth-view">
    <header>
      <div>
        <h1>Mood Logger</h1>
        <p class="subtitle">Track your mental wellbeing journey</p>
      </div>
    </header>
    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-auth="login">Login</button>
      <button class="tab" type="button" data-auth="register">Sign Up</button>
    </div>
    <form id="auth-form">
      <label id="name-field" class="hidden">Name
        <input id="auth-name" type="text" placeholder="Enter your name" />
      </label>
      <label>Email
        <input id="auth-email" type="email" placeholder="Enter your email" required />
      </label>
      <label>Password
        <input id="auth-password" type="password" placeholder="Enter your password" required />
      </label>
      <button type="submit" id="auth-submit">Sign In</button>
    </form>
    <div class="status" id="auth-status"></div>
  </main>

  <main class="app hidden" id="main-view">
    <header>
      <div>
        <h1>Mood Logger</h1>
        <p class="subtitle">Welcome back, <span id="user-name"></span></p>
      </div>
      <button class="secondary" type="button" id="logout-btn">Logout</button>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab" type="button" data-tab="dashboard">Dashboard</button>
      <button class="tab" type="button" data-tab="log-mood">Log Mood</button>
      <button class="tab" type="button" data-tab="analytics">Analytics</button>
      <button class="tab" type="button" data-tab="quotes">Daily Quote</button>
      <button class="tab" type="button" data-tab="chat">AI Chat</button>
    </div>

    <section data-panel="dashboard">
      <div class="panel">
        <div class="stat"><span class="label">Average Mood</span><span class="value" id="avg-mood">--</span></div>
        <div class="stat"><span class="label">Energy Level</span><span class="value" id="avg-energy">--</span></div>
        <div class="stat"><span class="label">Sleep Quality</span><span class="value" id="avg-sleep">--</span></div>
        <div class="stat"><span class="label">Entries</span><span class="value" id="entry-count">0</span></div>
      </div>
      <div class="form-grid" style="margin-top: 16px">
        <div class="card">
          <h2>Recent Mood Entries</h2>
          <ul class="recent" id="recent"></ul>
        </div>
        <div class="card">
          <h2>Weekly Trend</h2>
          <svg class="chart" id="dashboard-chart" viewBox="0 0 600 240" role="img"></svg>
        </div>
      </div>
    </section>

    <section data-panel="log-mood">
      <div class="card">
        <h2>Log Your Mood</h2>
        <p class="subtitle">Track your daily mood, energy, activity, and sleep</p>
        <form id="mood-form">
          <div class="form-grid">
            <label>Mood (1-10)<select id="mood-mood" class="scale" required></select></label>
            <label>Energy (1-10)<select id="mood-energy" class="scale" required></select></label>
            <label>Activity
              <select id="mood-activity" required>
                <option value="">Select activity</option>
                <option>Work</option><option>Exercise</option><option>Social</option>
                <option>Rest</option><option>Creative</option><option>Reading</option><option>Other</option>
              </select>
            </label>
            <label>Sleep Quality (1-10)<select id="mood-sleep" class="scale" required></select></label>
          </div>
          <label>Notes (optional)
            <textarea id="mood-notes" rows="3" placeholder="How are you feeling today?"></textarea>
          </label>
          <button type="submit" id="mood-submit">Log Mood</button>
        </form>
      </div>
    </section>

    <section data-panel="analytics">
      <div class="form-grid">
        <div class="card">
          <h2>Weekly Mood &amp; Energy</h2>
          <svg class="chart" id="weekly-chart" viewBox="0 0 600 240" role="img"></svg>
        </div>
        <div class="card">
          <h2>Monthly Trend</h2>
          <svg class="chart" id="monthly-chart" viewBox="0 0 600 240" role="img"></svg>
        </div>
      </div>
      <div class="card" style="margin-top: 16px">
        <h2>Activity Breakdown</h2>
        <svg class="chart" id="activity-chart" viewBox="0 0 600 240" role="img"></svg>
      </div>
    </section>

    <section data-panel="quotes">
      <div class="card">
        <h2>Daily Inspiration</h2>
        <p class="subtitle">Your motivational quote for today</p>
        <blockquote id="quote">"{{QUOTE}}"</blockquote>
        <div><button type="button" id="quote-btn">Get New Quote</button></div>
      </div>
    </section>

    <section data-panel="chat">
      <div class="card">
        <h2>AI Mood Assistant</h2>
        <p class="subtitle">Chat about your feelings and get supportive guidance</p>
        <div class="messages" id="messages"></div>
        <form id="chat-form" class="chat-form">
          <input id="chat-input" type="text" placeholder="Share your thoughts..." />
          <button type="submit" id="chat-submit">Send</button>
        </form>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const authView = $('auth-view');
    const mainView = $('main-view');
    const tabs = Array.from(document.querySelectorAll('[data-tab]'));
    const panels = Array.from(document.querySelectorAll('[data-panel]'));
    const authTabs = Array.from(document.querySelectorAll('[data-auth]'));

    let authMode = 'login';

    const setStatus = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const formatMetric = (value) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      return (Math.round(value * 10) / 10).toFixed(1);
    };

    const renderLineChart = (svg, labels, series) => {
      const width = 600;
      const height = 240;
      const paddingX = 40;
      const paddingY = 30;
      const top = 16;
      const xStep = labels.length > 1 ? (width - paddingX * 2) / (labels.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / 10) * (height - top - paddingY);

      let grid = '';
      for (let value = 0; value <= 10; value += 2.5) {
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(value)}" x2="${width - paddingX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${y(value) + 4}" text-anchor="end">${value}</text>`;
      }

      const lines = series
        .map(({ values, className }) => {
          const path = values
            .map((value, index) => (value === null ? null : `${x(index).toFixed(2)} ${y(value).toFixed(2)}`))
            .filter((point) => point !== null)
            .map((point, index) => `${index === 0 ? 'M' : 'L'} ${point}`)
            .join(' ');
          const circles = values
            .map((value, index) => (value === null ? '' : `<circle class="chart-point" cx="${x(index)}" cy="${y(value)}" r="4" />`))
            .join('');
          return path ? `<path class="chart-line ${className || ''}" d="${path}" />${circles}` : '';
        })
        .join('');

      const xLabels = labels
        .map((label, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${label}</text>`)
        .join('');

      svg.innerHTML = `${grid}${lines}${xLabels}`;
    };

    const renderBarChart = (svg, items) => {
      const width = 600;
      const height = 240;
      const paddingX = 40;
      const paddingY = 30;
      const max = Math.max(1, ...items.map((item) => item.count));
      const slot = (width - paddingX * 2) / Math.max(items.length, 1);
      const barWidth = slot * 0.6;
      const bars = items
        .map((item, index) => {
          const barHeight = (item.count / max) * (height - paddingY * 2);
          const x = paddingX + index * slot + (slot - barWidth) / 2;
          const y = height - paddingY - barHeight;
          return `<rect class="chart-bar" x="${x}" y="${y}" width="${barWidth}" height="${barHeight}" rx="6" />`
            + `<text class="chart-label" x="${x + barWidth / 2}" y="${y - 6}" text-anchor="middle">${item.count}</text>`
            + `<text class="chart-label" x="${x + barWidth / 2}" y="${height - paddingY + 18}" text-anchor="middle">${item.activity}</text>`;
        })
        .join('');
      svg.innerHTML = bars;
    };

    const showSession = (session) => {
      const signedIn = session.status === 'logged_in';
      authView.classList.toggle('hidden', signedIn);
      mainView.classList.toggle('hidden', !signedIn);
      if (!signedIn) {
        return;
      }
      $('user-name').textContent = session.user.name;
      tabs.forEach((button) => button.classList.toggle('active', button.dataset.tab === session.active_tab));
      panels.forEach((panel) => panel.classList.toggle('hidden', panel.dataset.panel !== session.active_tab));
      loadPanel(session.active_tab).catch((err) => setStatus($('status'), err.message, 'error'));
    };

    const loadDashboard = async () => {
      const data = await api('/api/dashboard');
      $('avg-mood').textContent = formatMetric(data.average_mood);
      $('avg-energy').textContent = formatMetric(data.average_energy);
      $('avg-sleep').textContent = formatMetric(data.average_sleep);
      $('entry-count').textContent = data.entry_count;
      $('recent').innerHTML = data.recent
        .map((entry) => `<li><span>${entry.emoji} <strong>${entry.activity}</strong> ${entry.date}</span><span class="badge">Mood: ${entry.mood}/10</span></li>`)
        .join('');
      const analytics = await api('/api/analytics');
      renderLineChart($('dashboard-chart'), analytics.weekly.map((p) => p.label), [
        { values: analytics.weekly.map((p) => p.mood) }
      ]);
    };

    const loadAnalytics = async () => {
      const data = await api('/api/analytics');
      renderLineChart($('weekly-chart'), data.weekly.map((p) => p.label), [
        { values: data.weekly.map((p) => p.mood) },
        { values: data.weekly.map((p) => p.energy), className: 'energy' }
      ]);
      renderLineChart($('monthly-chart'), data.monthly.map((p) => p.label), [
        { values: data.monthly.map((p) => p.mood) },
        { values: data.monthly.map((p) => p.energy), className: 'energy' }
      ]);
      renderBarChart($('activity-chart'), data.activity_breakdown);
    };

    const loadQuote = async () => {
      const data = await api('/api/quote');
      $('quote').textContent = `"${data.quote}"`;
    };

    const renderMessages = (chat) => {
      const box = $('messages');
      box.innerHTML = '';
      chat.messages.forEach((message) => {
        const div = document.createElement('div');
        div.className = `message ${message.role}`;
        div.textContent = message.content;
        box.appendChild(div);
      });
      box.scrollTop = box.scrollHeight;
    };

    const loadChat = async () => {
      renderMessages(await api('/api/chat'));
    };

    const loadPanel = (tab) => {
      if (tab === 'dashboard') return loadDashboard();
      if (tab === 'analytics') return loadAnalytics();
      if (tab === 'quotes') return loadQuote();
      if (tab === 'chat') return loadChat();
      return Promise.resolve();
    };

    document.querySelectorAll('select.scale').forEach((select) => {
      select.innerHTML = '<option value="">Select</option>'
        + Array.from({ length: 10 }, (_, i) => `<option value="${i + 1}">${i + 1}</option>`).join('');
    });

    authTabs.forEach((button) => {
      button.addEventListener('click', () => {
        authMode = button.dataset.auth;
        authTabs.forEach((b) => b.classList.toggle('active', b === button));
        $('name-field').classList.toggle('hidden', authMode !== 'register');
        $('auth-submit').textContent = authMode === 'register' ? 'Create Account' : 'Sign In';
      });
    });

    $('auth-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const submit = $('auth-submit');
      submit.disabled = true;
      setStatus($('auth-status'), 'Signing in...', 'info');
      api(`/api/${authMode}`, {
        method: 'POST',
        body: JSON.stringify({
          email: $('auth-email').value,
          password: $('auth-password').value,
          name: $('auth-name').value
        })
      })
        .then((session) => {
          setStatus($('auth-status'), '', '');
          $('auth-form').reset();
          showSession(session);
        })
        .catch((err) => setStatus($('auth-status'), err.message, 'error'))
        .finally(() => { submit.disabled = false; });
    });

    $('logout-btn').addEventListener('click', () => {
      api('/api/logout', { method: 'POST' })
        .then(showSession)
        .catch((err) => setStatus($('status'), err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        api('/api/tab', { method: 'PUT', body: JSON.stringify({ tab: button.dataset.tab }) })
          .then(showSession)
          .catch((err) => setStatus($('status'), err.message, 'error'));
      });
    });

    $('mood-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const submit = $('mood-submit');
      submit.disabled = true;
      setStatus($('status'), 'Saving...', 'info');
      api('/api/moods', {
        method: 'POST',
        body: JSON.stringify({
          mood: $('mood-mood').value,
          energy: $('mood-energy').value,
          activity: $('mood-activity').value,
          sleep: $('mood-sleep').value,
          notes: $('mood-notes').value
        })
      })
        .then(() => {
          $('mood-form').reset();
          setStatus($('status'), 'Mood logged', 'ok');
          setTimeout(() => setStatus($('status'), '', ''), 1200);
        })
        .catch((err) => setStatus($('status'), err.message, 'error'))
        .finally(() => { submit.disabled = false; });
    });

    $('quote-btn').addEventListener('click', () => {
      api('/api/quote/refresh', { method: 'POST' })
        .then((data) => { $('quote').textContent = `"${data.quote}"`; })
        .catch((err) => setStatus($('status'), err.message, 'error'));
    });

    $('chat-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = $('chat-input');
      const message = input.value;
      if (!message.trim()) {
        return;
      }
      input.value = '';
      const submit = $('chat-submit');
      submit.disabled = true;
      api('/api/chat', { method: 'POST', body: JSON.stringify({ message }) })
        .then(renderMessages)
        .catch((err) => setStatus($('status'), err.message, 'error'))
        .finally(() => { submit.disabled = false; });
      const box = $('messages');
      const pending = document.createElement('div');
      pending.className = 'message user';
      pending.textContent = message;
      box.appendChild(pending);
    });

    api('/api/session')
      .then(showSession)
      .catch((err) => setStatus($('auth-status'), err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_escaped_quote() {
        let html = render_index("Be <bold> & brave");
        assert!(html.contains("Be &lt;bold&gt; &amp; brave"));
        assert!(!html.contains("{{QUOTE}}"));
    }
}
