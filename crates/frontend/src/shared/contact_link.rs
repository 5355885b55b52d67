use crate::shared::config::PageConfig;

/// Turns an item name into an outbound contact URI.
pub trait LinkComposer {
    fn compose(&self, item_name: &str) -> String;
}

/// `https://wa.me/<phone>?text=<preamble item>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppComposer {
    phone: String,
    preamble: Option<String>,
}

impl WhatsAppComposer {
    pub fn new(phone: &str, preamble: Option<&str>) -> Self {
        Self {
            phone: phone.chars().filter(|c| c.is_ascii_digit()).collect(),
            preamble: preamble
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(&config.contact_phone, config.contact_preamble.as_deref())
    }
}

impl LinkComposer for WhatsAppComposer {
    fn compose(&self, item_name: &str) -> String {
        let message = match &self.preamble {
            Some(preamble) => format!("{} {}", preamble, item_name),
            None => item_name.to_string(),
        };
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(&message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_with_preamble() {
        let composer = WhatsAppComposer::new("+52 1 55-1234-5678", Some("Hola, me interesa rentar:"));
        assert_eq!(
            composer.compose("Taladro"),
            "https://wa.me/5215512345678?text=Hola%2C%20me%20interesa%20rentar%3A%20Taladro"
        );
    }

    #[test]
    fn test_compose_encodes_name_only() {
        let composer = WhatsAppComposer::new("", Some("   "));
        assert_eq!(composer.compose("Podadora & Orilladora"), "https://wa.me/?text=Podadora%20%26%20Orilladora");
    }

    #[test]
    fn test_from_config() {
        let config = PageConfig {
            contact_phone: "5551234".into(),
            contact_preamble: None,
            ..PageConfig::default()
        };
        assert_eq!(
            WhatsAppComposer::from_config(&config).compose("Sierra"),
            "https://wa.me/5551234?text=Sierra"
        );
    }
}
