// Dashboard page - Served as-is from `GET /`
// Plotly.js draws the charts; the page holds a session id, forwards control
// changes to `PUT /api/sessions/:id/filter` and redraws from the returned view.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>SpaceX Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 0; padding: 24px; color: #222; }
h1 { text-align: center; color: #503D36; font-size: 40px; margin: 0 0 24px; }
.control { max-width: 960px; margin: 0 auto 16px; }
.control label { display: block; font-weight: 600; margin-bottom: 6px; }
#site-search, #site-dropdown { width: 100%; padding: 6px 8px; font-size: 14px; box-sizing: border-box; }
#site-search { margin-bottom: 4px; }
.range { display: flex; gap: 12px; align-items: center; }
.range input[type=range] { flex: 1; }
.range output { min-width: 80px; text-align: right; font-variant-numeric: tabular-nums; }
.chart { max-width: 960px; height: 420px; margin: 0 auto 24px; }
.empty { text-align: center; color: #8b949e; }
</style>
</head>
<body>
<h1>SpaceX Launch Records Dashboard</h1>

<div class="control">
  <label for="site-dropdown">Launch Site</label>
  <input id="site-search" type="search" placeholder="Select a Launch Site here" autocomplete="off">
  <select id="site-dropdown"></select>
</div>

<div id="success-pie-chart" class="chart"></div>

<div class="control">
  <label>Payload range (Kg)</label>
  <div class="range">
    <output id="payload-low-value"></output>
    <input id="payload-low" type="range" list="payload-marks">
    <input id="payload-high" type="range" list="payload-marks">
    <output id="payload-high-value"></output>
  </div>
  <datalist id="payload-marks"></datalist>
</div>

<div id="success-payload-scatter-chart" class="chart"></div>

<script>
(function () {
  const dropdown = document.getElementById('site-dropdown');
  const search = document.getElementById('site-search');
  const low = document.getElementById('payload-low');
  const high = document.getElementById('payload-high');
  const lowValue = document.getElementById('payload-low-value');
  const highValue = document.getElementById('payload-high-value');
  let sessionId = null;
  let siteOptions = [];

  async function request(method, url, body) {
    const init = { method, headers: {} };
    if (body !== undefined) {
      init.headers['Content-Type'] = 'application/json';
      init.body = JSON.stringify(body);
    }
    const response = await fetch(url, init);
    if (!response.ok) {
      const text = await response.text();
      throw new Error(response.status + ': ' + text);
    }
    return response.json();
  }

  function fillDropdown(filterText) {
    const needle = (filterText || '').toLowerCase();
    const selected = dropdown.value;
    dropdown.innerHTML = '';
    for (const option of siteOptions) {
      if (needle && !option.label.toLowerCase().includes(needle) && option.value !== selected) {
        continue;
      }
      const el = document.createElement('option');
      el.value = option.value;
      el.textContent = option.label;
      dropdown.appendChild(el);
    }
    dropdown.value = selected;
  }

  function setupControls(controls) {
    siteOptions = controls.sites;
    fillDropdown('');
    dropdown.value = controls.default_site;

    for (const input of [low, high]) {
      input.min = controls.payload.min;
      input.max = controls.payload.max;
      input.step = controls.payload.step;
    }
    low.value = controls.payload.min;
    high.value = controls.payload.max;

    const marks = document.getElementById('payload-marks');
    for (const mark of controls.payload.marks) {
      const el = document.createElement('option');
      el.value = mark;
      el.label = String(mark);
      marks.appendChild(el);
    }
  }

  function drawPie(pie) {
    const data = [{
      type: 'pie',
      labels: pie.slices.map(s => s.label),
      values: pie.slices.map(s => s.value),
    }];
    const layout = { title: pie.title };
    if (pie.slices.length === 0) {
      layout.annotations = [{ text: 'No launches match', showarrow: false, font: { size: 16 } }];
    }
    Plotly.react('success-pie-chart', data, layout);
  }

  function drawScatter(scatter) {
    const data = scatter.categories.map(category => {
      const points = scatter.points.filter(p => p.booster_category === category);
      return {
        type: 'scatter',
        mode: 'markers',
        name: category,
        x: points.map(p => p.payload_mass_kg),
        y: points.map(p => p.outcome),
      };
    });
    const layout = {
      title: scatter.title,
      xaxis: { title: scatter.x_label },
      yaxis: { title: scatter.y_label, tickvals: [0, 1] },
      legend: { title: { text: 'Booster Version Category' } },
    };
    Plotly.react('success-payload-scatter-chart', data, layout);
  }

  function render(view) {
    const range = view.filter.payload_range;
    low.value = range.low;
    high.value = range.high;
    lowValue.textContent = Number(range.low).toFixed(0);
    highValue.textContent = Number(range.high).toFixed(0);
    dropdown.value = view.filter.site;
    drawPie(view.success_pie);
    drawScatter(view.payload_scatter);
  }

  async function update(change) {
    try {
      const snapshot = await request('PUT', '/api/sessions/' + sessionId + '/filter', change);
      render(snapshot.view);
    } catch (err) {
      console.error('filter update failed', err);
    }
  }

  search.addEventListener('input', () => fillDropdown(search.value));
  dropdown.addEventListener('change', () => update({ site: dropdown.value }));
  // The low handle never passes the high one and vice versa
  low.addEventListener('change', () => {
    const value = Math.min(Number(low.value), Number(high.value));
    low.value = value;
    update({ low: value });
  });
  high.addEventListener('change', () => {
    const value = Math.max(Number(high.value), Number(low.value));
    high.value = value;
    update({ high: value });
  });
  low.addEventListener('input', () => {
    if (Number(low.value) > Number(high.value)) low.value = high.value;
    lowValue.textContent = Number(low.value).toFixed(0);
  });
  high.addEventListener('input', () => {
    if (Number(high.value) < Number(low.value)) high.value = low.value;
    highValue.textContent = Number(high.value).toFixed(0);
  });
  window.addEventListener('pagehide', () => {
    if (sessionId) {
      fetch('/api/sessions/' + sessionId, { method: 'DELETE', keepalive: true });
    }
  });

  (async function start() {
    try {
      setupControls(await request('GET', '/api/controls'));
      const snapshot = await request('POST', '/api/sessions');
      sessionId = snapshot.id;
      render(snapshot.view);
    } catch (err) {
      document.body.insertAdjacentHTML('beforeend', '<p class="empty">Dashboard unavailable: ' + err.message + '</p>');
    }
  })();
})();
</script>
</body>
</html>
"##;
