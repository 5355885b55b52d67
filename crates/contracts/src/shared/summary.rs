use crate::domain::a001_catalog_item::CatalogItem;
use serde::{Deserialize, Serialize};

/// Сводка по каталогу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_items: usize,
    pub average_daily_price: i64,
    pub average_discount_percent: i64,
}

/// An empty catalog yields all-zero averages.
pub fn summarize(items: &[CatalogItem]) -> CatalogSummary {
    let total_items = items.len();
    if total_items == 0 {
        return CatalogSummary::default();
    }

    let count = total_items as f64;
    let price_sum: f64 = items.iter().map(|i| i.daily_price).sum();
    let discount_sum: f64 = items
        .iter()
        .map(|i| i.weekly_discount_fraction * 100.0)
        .sum();

    CatalogSummary {
        total_items,
        average_daily_price: (price_sum / count).round() as i64,
        average_discount_percent: (discount_sum / count).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.average_daily_price, 0);
        assert_eq!(summary.average_discount_percent, 0);
    }

    #[test]
    fn test_summarize() {
        let items = vec![
            CatalogItem::new("Taladro", 100.0, 0.10),
            CatalogItem::new("Sierra", 50.0, 0.20),
        ];
        assert_eq!(
            summarize(&items),
            CatalogSummary {
                total_items: 2,
                average_daily_price: 75,
                average_discount_percent: 15,
            }
        );
    }

    #[test]
    fn test_summarize_rounds_means() {
        let items = vec![
            CatalogItem::new("A", 10.0, 0.10),
            CatalogItem::new("B", 11.0, 0.15),
            CatalogItem::new("C", 11.0, 0.15),
        ];
        let summary = summarize(&items);
        // 32 / 3 = 10.67, 40 / 3 = 13.33
        assert_eq!(summary.average_daily_price, 11);
        assert_eq!(summary.average_discount_percent, 13);
    }

    proptest! {
        #[test]
        fn test_summary_properties(
            entries in prop::collection::vec((0.0f64..1e6, 0.0f64..1.0), 0..20),
        ) {
            let items: Vec<CatalogItem> = entries
                .iter()
                .enumerate()
                .map(|(i, (price, fraction))| CatalogItem::new(format!("item {i}"), *price, *fraction))
                .collect();
            let summary = summarize(&items);
            prop_assert_eq!(summary.total_items, items.len());
            prop_assert!(summary.average_daily_price >= 0);
            prop_assert!(summary.average_discount_percent >= 0);
            prop_assert!(summary.average_discount_percent <= 100);
        }
    }
}
