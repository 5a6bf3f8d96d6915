use crate::models::FilterResponse;

pub fn render_index(filter: &FilterResponse) -> Result<String, serde_json::Error> {
    let bootstrap = serde_json::to_string(filter)?;
    Ok(INDEX_HTML
        .replace("{{START}}", &filter.start.to_string())
        .replace("{{END}}", &filter.end.to_string())
        .replace("{{MIN}}", &filter.min_date.to_string())
        .replace("{{MAX}}", &filter.max_date.to_string())
        .replace("{{BOOTSTRAP}}", &bootstrap))
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Bike Rental Dashboard</title>
  <style>
    :root {
      --bg: #f8f9fa;
      --ink: #23272f;
      --muted: #6b7280;
      --primary: #2e86de;
      --secondary: #ee5253;
      --highlight: #10ac84;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(35, 39, 47, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      grid-template-columns: 280px 1fr;
    }

    aside {
      background: var(--card);
      border-right: 1px solid rgba(35, 39, 47, 0.08);
      padding: 28px 22px;
      display: grid;
      align-content: start;
      gap: 22px;
    }

    main {
      padding: 32px;
      display: grid;
      gap: 24px;
      align-content: start;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.3rem);
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    form {
      display: grid;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input[type="date"] {
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid rgba(35, 39, 47, 0.18);
      font: inherit;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-weight: 600;
      cursor: pointer;
      background: var(--primary);
      color: white;
    }

    .metric {
      background: var(--bg);
      border-radius: 14px;
      padding: 14px 16px;
      display: grid;
      gap: 4px;
    }

    .metric .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .metric .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 20px;
      box-shadow: var(--shadow);
    }

    svg {
      width: 100%;
      height: 300px;
      display: block;
    }

    .chart-grid {
      stroke: rgba(35, 39, 47, 0.1);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 6px;
      background: var(--swatch);
    }

    .status {
      font-size: 0.9rem;
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--highlight);
    }

    @media (max-width: 800px) {
      body {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <aside>
    <h2>Date filter</h2>
    <form id="filter-form" method="post" action="/filter">
      <label>Start
        <input type="date" name="start" id="start" value="{{START}}" min="{{MIN}}" max="{{MAX}}" required />
      </label>
      <label>End
        <input type="date" name="end" id="end" value="{{END}}" min="{{MIN}}" max="{{MAX}}" required />
      </label>
      <button type="submit">Apply filter</button>
    </form>
    <div class="status" id="status"></div>

    <h2>Summary</h2>
    <div class="metric">
      <span class="label">Total rentals</span>
      <span class="value" id="total">--</span>
    </div>
    <div class="metric">
      <span class="label">Average per day</span>
      <span class="value" id="average">--</span>
    </div>
  </aside>

  <main>
    <h1>Bike Rental Patterns</h1>

    <section class="card">
      <h2>Average rentals by season and weather</h2>
      <svg id="seasonal-chart" viewBox="0 0 720 300" role="img" aria-label="Seasonal chart"></svg>
      <div class="legend" id="seasonal-legend"></div>
    </section>

    <section class="card">
      <h2 id="hourly-title">Average rentals by hour</h2>
      <svg id="hourly-chart" viewBox="0 0 720 300" role="img" aria-label="Hourly chart"></svg>
    </section>

    <section class="card">
      <h2>2011 vs 2012 by month</h2>
      <svg id="yearly-chart" viewBox="0 0 720 300" role="img" aria-label="Yearly chart"></svg>
      <div class="legend" id="yearly-legend"></div>
    </section>
  </main>

  <script>
    const SEASONS = ['Spring', 'Summer', 'Fall', 'Winter'];
    const WEATHER = ['Clear/Cloudy', 'Misty', 'Light Rain/Snow', 'Heavy Rain/Snow'];
    const WEATHER_COLORS = ['#440154', '#31688e', '#35b779', '#fde725'];
    const YEARS = [{ label: '2011', color: '#2e86de' }, { label: '2012', color: '#ee5253' }];
    const MONTHS = ['Jan', 'Feb', 'Mar', 'Apr', 'May', 'Jun', 'Jul', 'Aug', 'Sep', 'Oct', 'Nov', 'Dec'];
    const WIDTH = 720;
    const HEIGHT = 300;
    const PAD_X = 52;
    const PAD_Y = 34;
    const TOP = 18;

    const bootstrap = {{BOOTSTRAP}};
    const statusEl = document.getElementById('status');
    const form = document.getElementById('filter-form');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatNumber = (value) =>
      typeof value === 'number' && !Number.isNaN(value)
        ? Math.round(value).toLocaleString('en-US')
        : '--';

    const emptyChart = (svg) => {
      svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data in range</text>';
    };

    const axis = (max) => {
      const top = max > 0 ? max : 1;
      const y = (value) => HEIGHT - PAD_Y - (value / top) * (HEIGHT - TOP - PAD_Y);
      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (top * i) / 4;
        grid += `<line class="chart-grid" x1="${PAD_X}" y1="${y(value)}" x2="${WIDTH - PAD_X}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${PAD_X - 8}" y="${y(value) + 4}" text-anchor="end">${formatNumber(value)}</text>`;
      }
      return { y, grid };
    };

    const legend = (el, items) => {
      el.innerHTML = items
        .map((item) => `<span style="--swatch: ${item.color}">${item.label}</span>`)
        .join('');
    };

    const renderSeasonal = (rows) => {
      const svg = document.getElementById('seasonal-chart');
      legend(document.getElementById('seasonal-legend'),
        WEATHER.map((label, i) => ({ label, color: WEATHER_COLORS[i] })));
      if (!rows.length) {
        emptyChart(svg);
        return;
      }
      const { y, grid } = axis(Math.max(...rows.map((row) => row.average_count)));
      const groupWidth = (WIDTH - PAD_X * 2) / SEASONS.length;
      const barWidth = (groupWidth * 0.8) / WEATHER.length;
      let bars = '';
      SEASONS.forEach((season, s) => {
        const x0 = PAD_X + s * groupWidth + groupWidth * 0.1;
        WEATHER.forEach((weather, w) => {
          const row = rows.find((r) => r.season === season && r.weather === weather);
          if (!row) {
            return;
          }
          const top = y(row.average_count);
          bars += `<rect x="${x0 + w * barWidth}" y="${top}" width="${barWidth - 2}" height="${HEIGHT - PAD_Y - top}" fill="${WEATHER_COLORS[w]}"><title>${season} / ${weather}: ${formatNumber(row.average_count)}</title></rect>`;
        });
        bars += `<text class="chart-label" x="${x0 + groupWidth * 0.4}" y="${HEIGHT - PAD_Y + 18}" text-anchor="middle">${season}</text>`;
      });
      svg.innerHTML = grid + bars;
    };

    const renderLines = (svg, series, slots, slotLabel, highlight) => {
      const values = series.flatMap((s) => s.points.map((p) => p.value));
      if (!values.length) {
        emptyChart(svg);
        return;
      }
      const { y, grid } = axis(Math.max(...values));
      const step = (WIDTH - PAD_X * 2) / (slots.length - 1);
      const x = (slot) => PAD_X + slots.indexOf(slot) * step;
      let body = grid;
      slots.forEach((slot) => {
        body += `<text class="chart-label" x="${x(slot)}" y="${HEIGHT - PAD_Y + 18}" text-anchor="middle">${slotLabel(slot)}</text>`;
      });
      series.forEach((s) => {
        if (!s.points.length) {
          return;
        }
        const path = s.points
          .map((p, i) => `${i === 0 ? 'M' : 'L'} ${x(p.slot).toFixed(2)} ${y(p.value).toFixed(2)}`)
          .join(' ');
        body += `<path d="${path}" fill="none" stroke="${s.color}" stroke-width="2.5" />`;
        body += s.points
          .map((p) => `<circle cx="${x(p.slot)}" cy="${y(p.value)}" r="3.5" fill="white" stroke="${s.color}" stroke-width="2" />`)
          .join('');
      });
      if (highlight) {
        body += `<circle cx="${x(highlight.slot)}" cy="${y(highlight.value)}" r="9" fill="#10ac84" opacity="0.8" />`;
      }
      svg.innerHTML = body;
    };

    const renderHourly = (hourly) => {
      const title = document.getElementById('hourly-title');
      title.textContent = hourly.peak
        ? `Average rentals by hour (peak ${hourly.peak.hour}:00)`
        : 'Average rentals by hour';
      const hours = Array.from({ length: 24 }, (_, i) => i);
      const points = hourly.hours.map((h) => ({ slot: h.hour, value: h.average_count }));
      const peak = hourly.peak ? { slot: hourly.peak.hour, value: hourly.peak.average_count } : null;
      renderLines(document.getElementById('hourly-chart'),
        [{ color: '#2e86de', points }], hours, (h) => h, peak);
    };

    const renderYearly = (rows) => {
      legend(document.getElementById('yearly-legend'), YEARS);
      const months = Array.from({ length: 12 }, (_, i) => i + 1);
      const series = YEARS.map((year) => ({
        color: year.color,
        points: rows
          .filter((row) => row.year === year.label)
          .map((row) => ({ slot: row.month, value: row.average_count }))
      }));
      renderLines(document.getElementById('yearly-chart'), series, months, (m) => MONTHS[m - 1], null);
    };

    const renderDashboard = (data) => {
      document.getElementById('total').textContent = formatNumber(data.summary ? data.summary.total : NaN);
      document.getElementById('average').textContent = formatNumber(data.summary ? data.summary.average_daily : NaN);
      if (!data.summary) {
        setStatus('No data in range', 'error');
      }
      renderSeasonal(data.seasonal_weather);
      renderHourly(data.hourly);
      renderYearly(data.yearly_monthly);
    };

    const loadDashboard = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to load dashboard');
      }
      renderDashboard(await res.json());
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const start = document.getElementById('start').value;
      const end = document.getElementById('end').value;
      if (!start || !end) {
        setStatus('Please choose a valid date range', 'error');
        return;
      }
      try {
        const res = await fetch('/api/filter', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ start, end })
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Filter rejected');
        }
        setStatus('Filter applied', 'ok');
        await loadDashboard();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('start').value = bootstrap.start;
    document.getElementById('end').value = bootstrap.end;
    loadDashboard().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
