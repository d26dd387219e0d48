//! UI page handler

use axum::response::Html;

/// The calculator page, compiled into the binary so the server has no
/// runtime file dependencies.
const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET /
///
/// Serve the calculator UI page.
pub async fn index() -> Html<&'static str> {
    tracing::info!("Serving calculator UI page");
    Html(INDEX_HTML)
}
