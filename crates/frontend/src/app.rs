use crate::domain::a001_catalog::ui::details::DetailOverlay;
use crate::domain::a001_catalog::ui::page::{CatalogPage, PriceListPage};
use crate::shared::config::PageConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One page state for the whole session: catalog, load generation, overlay.
    let page = CatalogPage::new(PageConfig::from_location());
    provide_context(page);

    page.reload();

    view! {
        <PriceListPage />
        <DetailOverlay />
    }
}
