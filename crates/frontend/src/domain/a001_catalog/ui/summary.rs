use crate::domain::a001_catalog::ui::page::CatalogPage;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency_int;
use leptos::prelude::*;

/// Summary region: item counter plus average price and discount.
/// Hidden until a load succeeds.
#[component]
#[allow(non_snake_case)]
pub fn CatalogSummaryPanel() -> impl IntoView {
    let page = use_context::<CatalogPage>().expect("CatalogPage not provided in context");
    let summary = move || page.list.with(|s| s.summary());

    view! {
        {move || summary().map(|s| view! {
            <div id="price-summary" class="price-summary">
                <div class="summary-item">
                    <span>
                        "Herramientas disponibles: "
                        <strong id="total-herramientas">{s.total_items}</strong>
                    </span>
                </div>
                <div class="summary-item">
                    {icon("chart")}
                    <span>
                        "Precio promedio: "
                        <strong>{format!("{}/día", format_currency_int(s.average_daily_price))}</strong>
                    </span>
                </div>
                <div class="summary-item">
                    {icon("tag")}
                    <span>
                        "Descuento promedio: "
                        <strong>{format!("{}%", s.average_discount_percent)}</strong>
                        " por semana"
                    </span>
                </div>
            </div>
        })}
    }
}
