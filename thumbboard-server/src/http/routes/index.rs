//! The single HTML page, compiled into the binary

use axum::{response::Html, routing::get, Router};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
