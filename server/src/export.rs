//! Machine-readable copy of the portfolio, served next to the HTML page.

use app::content;

pub const URL_PATH: &str = "/portfolio.json";

const TITLE: &str = "DevPortfolio";
const LANGUAGE: &str = "en";

#[derive(serde::Serialize)]
pub struct Export {
    title: &'static str,
    language: &'static str,
    content: &'static content::Content,
}

pub async fn handler() -> axum::Json<Export> {
    axum::Json(Export {
        title: TITLE,
        language: LANGUAGE,
        content: content::get(),
    })
}
