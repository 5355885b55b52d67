use contracts::domain::a001_catalog_item::{parse_catalog, CatalogDocument};
use contracts::shared::error::LoadError;
use gloo_net::http::Request;

/// Загрузить каталог
///
/// Transport, status, parse and schema failures all surface as [`LoadError`].
/// No retry is attempted.
pub async fn load_catalog(url: &str) -> Result<CatalogDocument, LoadError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    parse_catalog(&text)
}
