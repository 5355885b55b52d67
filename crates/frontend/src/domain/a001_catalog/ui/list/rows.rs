//! Projection of catalog items into price-list rows.

use crate::shared::list_utils::{sorted_by_field, Sortable};
use contracts::domain::a001_catalog_item::CatalogItem;
use contracts::shared::pricing::{self, DerivedPricing};
use std::cmp::Ordering;

/// Reveal animation step between consecutive rows.
pub const REVEAL_STEP_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct ListRowViewModel {
    /// Source record, handed to the overlay on activation.
    pub item: CatalogItem,
    pub name: String,
    pub icon: String,
    pub category_label: &'static str,
    pub category_class: &'static str,
    pub daily_price: f64,
    pub pricing: DerivedPricing,
    pub reveal_delay_ms: u32,
}

impl ListRowViewModel {
    fn new(index: usize, item: CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            icon: item.icon_or_default().to_string(),
            category_label: item.category.display_name(),
            category_class: item.category.css_class(),
            daily_price: item.daily_price,
            pricing: pricing::compute(item.daily_price, item.weekly_discount_fraction),
            reveal_delay_ms: reveal_delay_ms(index),
            item,
        }
    }
}

impl Sortable for CatalogItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "daily_price" => self.daily_price.total_cmp(&other.daily_price),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

pub fn reveal_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STEP_MS)
}

/// Rows ordered by daily price, cheapest first; ties keep catalog order.
pub fn render(items: &[CatalogItem]) -> Vec<ListRowViewModel> {
    sorted_by_field(items, "daily_price", true)
        .into_iter()
        .enumerate()
        .map(|(index, item)| ListRowViewModel::new(index, item))
        .collect()
}

/// Keyboard or pointer activation of a focused row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowActivation {
    Pointer,
    Enter,
    Space,
}

impl RowActivation {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(RowActivation::Enter),
            " " | "Spacebar" => Some(RowActivation::Space),
            _ => None,
        }
    }
}
