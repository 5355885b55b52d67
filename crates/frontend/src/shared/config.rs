use contracts::shared::pricing::DiscountFormat;
use serde::Deserialize;
use web_sys::window;

pub const DEFAULT_CATALOG_URL: &str = "herramientas.json";
pub const DEFAULT_CONTACT_PREAMBLE: &str = "Hola, me interesa rentar:";

/// Page settings, overridable from the query string
/// (`?catalog_url=...&discount_format=one_decimal&close_on_contact=true`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub catalog_url: String,
    /// Digits only are used; empty lets the messaging app pick the chat.
    pub contact_phone: String,
    pub contact_preamble: Option<String>,
    pub discount_format: DiscountFormat,
    pub close_on_contact: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            contact_phone: String::new(),
            contact_preamble: Some(DEFAULT_CONTACT_PREAMBLE.to_string()),
            discount_format: DiscountFormat::default(),
            close_on_contact: false,
        }
    }
}

impl PageConfig {
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        match serde_qs::from_str::<PageConfig>(query) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring page query {:?}: {}", query, e);
                Self::default()
            }
        }
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(PageConfig::from_query(""), PageConfig::default());
        assert_eq!(PageConfig::from_query("?"), PageConfig::default());
        assert_eq!(PageConfig::default().catalog_url, "herramientas.json");
    }

    #[test]
    fn test_query_overrides() {
        let config = PageConfig::from_query(
            "?catalog_url=data/precios.json&discount_format=one_decimal&close_on_contact=true",
        );
        assert_eq!(config.catalog_url, "data/precios.json");
        assert_eq!(config.discount_format, DiscountFormat::OneDecimal);
        assert!(config.close_on_contact);
        assert_eq!(config.contact_preamble.as_deref(), Some(DEFAULT_CONTACT_PREAMBLE));
    }

    #[test]
    fn test_invalid_query_falls_back() {
        let config = PageConfig::from_query("discount_format=percent");
        assert_eq!(config, PageConfig::default());
    }
}
