use crate::enums::category::Category;
use serde::{Deserialize, Serialize};

/// Pictogram used when an item has no `icono`.
pub const DEFAULT_ICON: &str = "fas fa-tools";

/// Photo used when an item has no `imagen` or the photo fails to load.
pub const DEFAULT_IMAGE: &str = "img/placeholder-tool.jpg";

// ============================================================================
// Catalog item
// ============================================================================

/// Позиция каталога аренды
///
/// Field names follow the merchant's `herramientas.json`; English aliases are
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,

    #[serde(rename = "precio_diario", alias = "dailyPrice")]
    pub daily_price: f64,

    #[serde(rename = "porcentaje_descuento_semanal", alias = "weeklyDiscountFraction")]
    pub weekly_discount_fraction: f64,

    #[serde(rename = "categoria", alias = "category", default)]
    pub category: Category,

    #[serde(rename = "icono", alias = "icon", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(rename = "imagen", alias = "image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, daily_price: f64, weekly_discount_fraction: f64) -> Self {
        Self {
            name: name.into(),
            daily_price,
            weekly_discount_fraction,
            category: Category::default(),
            icon: None,
            image: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn icon_or_default(&self) -> &str {
        non_blank(self.icon.as_deref()).unwrap_or(DEFAULT_ICON)
    }

    pub fn image_or_default(&self) -> &str {
        non_blank(self.image.as_deref()).unwrap_or(DEFAULT_IMAGE)
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if !self.daily_price.is_finite() || self.daily_price < 0.0 {
            return Err(format!(
                "daily price must be a non-negative number, got {}",
                self.daily_price
            ));
        }
        let fraction = self.weekly_discount_fraction;
        if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
            return Err(format!(
                "weekly discount fraction must be in [0, 1), got {}",
                fraction
            ));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Document
// ============================================================================

/// Parsed catalog resource
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CatalogDocument {
    pub items: Vec<CatalogItem>,
    /// Top-level `config` block, kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}
