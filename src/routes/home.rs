use axum::{http::HeaderMap, response::Html};

use crate::constants::LAST_CITY_COOKIE;
use crate::session;

/// Landing page
///
/// The only contract here is passing the optional `last_city` cookie value
/// through to the page; the markup itself is a minimal search form.
pub async fn home(headers: HeaderMap) -> Html<String> {
    let last_city = session::cookie_value(&headers, LAST_CITY_COOKIE);
    Html(render_landing(last_city.as_deref()))
}

fn render_landing(last_city: Option<&str>) -> String {
    let last_city = last_city
        .map(|city| html_escape::encode_safe(city).into_owned())
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Weather Lookup</title>
</head>
<body>
    <h1>Weather Lookup</h1>
    <form method="post" action="/search">
        <input type="text" name="city" value="{last_city}" placeholder="City name" autocomplete="off">
        <button type="submit">Search</button>
    </form>
</body>
</html>
"#
    )
}
