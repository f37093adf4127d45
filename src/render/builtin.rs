//! Built-in page templates and stylesheet.
//!
//! Each can be replaced by a file of the same name in the templates
//! directory.

/// Index page. Fields: `language`, `title`, `description`, `cards`, `footer`.
pub const INDEX: &str = r#"<!DOCTYPE html>
<html lang="{{ language }}">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ title }}</title>
    <link rel="stylesheet" href="assets/styles.css" />
  </head>
  <body>
    <header class="site-header">
      <h1>{{ title }}</h1>
      <p>{{ description }}</p>
    </header>
    <main class="container">
      <section class="grid">
{{ cards }}
      </section>
    </main>
    <footer class="footer">{{ footer }}</footer>
  </body>
</html>
"#;

/// One shop card on the index page.
pub const CARD: &str = r#"        <article class="card">
          <img src="{{ image }}" alt="{{ name }}" loading="lazy" />
          <div class="card-body">
            <span class="tag">{{ category }}</span>
            <h2>{{ name }}</h2>
            <div class="meta">評分 {{ rating }} {{ reviews }} · 價格 {{ price }}</div>
            <div class="meta">{{ address }}</div>
            <div class="actions">
              <a class="button" href="{{ detail_link }}">查看網站</a>
              <a class="button secondary" href="{{ map_link }}" target="_blank" rel="noreferrer">Google 地圖</a>
            </div>
          </div>
        </article>"#;

/// Shop page.
pub const SHOP: &str = r#"<!DOCTYPE html>
<html lang="{{ language }}">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ name }}｜早餐店介紹</title>
    <link rel="stylesheet" href="../../assets/styles.css" />
  </head>
  <body>
    <header class="site-header">
      <h1>{{ name }}</h1>
      <p>{{ category }} · 評分 {{ rating }} {{ reviews }}</p>
    </header>
    <main class="container">
      <section class="shop-hero">
        <img src="{{ image }}" alt="{{ name }}" loading="lazy" />
        <div class="shop-details">
          <h1>{{ name }}</h1>
          <p class="meta">{{ category }} · 價格 {{ price }}</p>
          <ul>
            <li><strong>地址：</strong>{{ address }}</li>
            <li><strong>營業狀態：</strong>{{ status }}</li>
            <li><strong>營業時間：</strong>{{ hours }}</li>
            <li><strong>提供服務：</strong>{{ services }}</li>
          </ul>
          <div class="actions" style="margin-top: 1.2rem;">
            <a class="button" href="{{ map_link }}" target="_blank" rel="noreferrer">查看 Google 地圖</a>
            {{ order_button }}
          </div>
        </div>
      </section>
      <a class="button secondary" href="../../index.html">回到店家總覽</a>
    </main>
    <footer class="footer">{{ footer }}</footer>
  </body>
</html>
"#;

/// Shared stylesheet, written to `assets/styles.css`.
pub const STYLES: &str = r#":root {
  color-scheme: light;
  font-family: "Noto Sans TC", "PingFang TC", "Microsoft JhengHei", sans-serif;
  --brand: #f97316;
  --ink: #1f2937;
  --muted: #6b7280;
  --card: #ffffff;
  --border: #e5e7eb;
  --bg: #fff7ed;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: var(--bg);
  color: var(--ink);
}

a {
  color: inherit;
  text-decoration: none;
}

.site-header {
  padding: 2.5rem 1.5rem 2rem;
  text-align: center;
}

.site-header h1 {
  margin: 0 0 0.5rem;
  font-size: 2.2rem;
}

.site-header p {
  margin: 0;
  color: var(--muted);
}

.container {
  max-width: 1100px;
  margin: 0 auto 3rem;
  padding: 0 1.5rem;
}

.grid {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
}

.card {
  background: var(--card);
  border-radius: 16px;
  border: 1px solid var(--border);
  box-shadow: 0 12px 24px rgba(15, 23, 42, 0.08);
  overflow: hidden;
  display: flex;
  flex-direction: column;
}

.card img {
  width: 100%;
  height: 180px;
  object-fit: cover;
  background: #f3f4f6;
}

.card-body {
  padding: 1rem 1.25rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  flex: 1;
}

.tag {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  background: rgba(249, 115, 22, 0.12);
  color: var(--brand);
  font-weight: 600;
  padding: 0.25rem 0.6rem;
  border-radius: 999px;
  font-size: 0.85rem;
}

.meta {
  color: var(--muted);
  font-size: 0.9rem;
}

.actions {
  margin-top: auto;
  display: flex;
  gap: 0.75rem;
  flex-wrap: wrap;
}

.button {
  background: var(--brand);
  color: #fff;
  padding: 0.55rem 0.9rem;
  border-radius: 999px;
  font-weight: 600;
  font-size: 0.9rem;
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
}

.button.secondary {
  background: #111827;
}

.shop-hero {
  display: grid;
  gap: 2rem;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  align-items: center;
  margin-bottom: 2.5rem;
}

.shop-hero img {
  width: 100%;
  border-radius: 18px;
  object-fit: cover;
  min-height: 260px;
  background: #f3f4f6;
}

.shop-details {
  background: var(--card);
  border-radius: 18px;
  border: 1px solid var(--border);
  padding: 1.5rem;
  box-shadow: 0 16px 28px rgba(15, 23, 42, 0.12);
}

.shop-details h1 {
  margin-top: 0;
  font-size: 2rem;
}

.shop-details ul {
  list-style: none;
  padding: 0;
  margin: 1rem 0 0;
  display: grid;
  gap: 0.6rem;
}

.footer {
  text-align: center;
  color: var(--muted);
  padding-bottom: 2rem;
}
"#;
