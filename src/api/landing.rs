//! Landing page and fallback

use axum::{http::StatusCode, response::Html};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>In-N-Out Books</title>
    <style>
      body {
        background: rgb(250, 221, 204);
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        color: #333;
        padding: 40px;
        line-height: 1.6;
      }
      h1 { color: rgb(8, 1, 0); margin-bottom: .2em; }
      h2 { color: rgb(87, 59, 57); margin-top: 1.5em; }
      ul { list-style-type: square; margin-left: 20px; }
      footer { margin-top: 2em; font-size: 0.9em; color: rgb(61, 41, 40); }
    </style>
  </head>
  <body>
    <h1>Welcome to In-N-Out Books!</h1>
    <p>Collector, casual reader or book club regular: keep your library in one place. Add titles, track what you've read, and never lose a great book again.</p>
    <h2>This Month's Top Sellers</h2>
    <ul>
      <li><em>Sunrise on the Reaping</em> by Suzanne Collins</li>
      <li><em>Never Flinch</em> by Stephen King</li>
      <li><em>The Knight and the Moth</em> by Rachel Gillig</li>
    </ul>
    <h2>Hours of Operation</h2>
    <p>Monday - Saturday: 10:00 AM - 6:00 PM<br>Sunday: Closed</p>
    <h2>Contact Us</h2>
    <p>Questions, comments, orders? Call us at <strong>813-867-5307</strong></p>
    <footer>&copy; In-N-Out Books. Read Often.</footer>
  </body>
</html>
"#;

pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Error: Page Not Found")
}
