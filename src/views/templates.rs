//! Page templates. Names end in `.html` so Tera autoescapes them.

pub const HOME: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Stocks</title></head>
<body>
  <h1>Stocks</h1>
  <ul class="tickers">
  {% for t in tickers %}
    <li><a href="{{ t.href }}">{{ t.symbol }}</a></li>
  {% endfor %}
  </ul>
  <h2>Records</h2>
  <table class="records">
    <tr><th>ID</th><th>Field 1</th><th>Field 2</th></tr>
  {% for r in records %}
    <tr><td>{{ r.id }}</td><td>{{ r.field1 }}</td><td>{{ r.field2 }}</td></tr>
  {% endfor %}
  </table>
</body>
</html>
"#;

pub const STOCK: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>{{ ticker }}</title></head>
<body>
  <h1 class="ticker">{{ ticker }}</h1>
  {% if quote %}
  <p class="price">Price: {{ quote.price }}</p>
  <p class="change">Change: {{ quote.change }}</p>
  {% else %}
  <p class="error">Ticker not found</p>
  {% endif %}
  <a href="{{ home_href }}">Back</a>
</body>
</html>
"#;

pub const NOT_FOUND: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Not found</title></head>
<body>
  <h1>Page not found</h1>
  <p class="path">No page at {{ path }}</p>
  <a href="{{ home_href }}">Home</a>
</body>
</html>
"#;
