pub mod rows;
pub mod state;

use self::rows::{ListRowViewModel, RowActivation};
use self::state::LoadStatus;
use crate::domain::a001_catalog::ui::details::controller::OverlayCommand;
use crate::domain::a001_catalog::ui::page::CatalogPage;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_currency, format_currency_int};
use contracts::domain::a001_catalog_item::CatalogItem;
use contracts::shared::error::LoadError;
use contracts::shared::pricing::DiscountFormat;
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn CatalogList() -> impl IntoView {
    let page = use_context::<CatalogPage>().expect("CatalogPage not provided in context");
    let discount_format = page.config.with_value(|c| c.discount_format);

    view! {
        <div id="pricing-table-container" class="pricing-table-container">
            {move || page.list.with(|s| match &s.status {
                LoadStatus::Idle | LoadStatus::Loading => loading_view(),
                LoadStatus::Failed(e) => error_view(e, page),
                LoadStatus::Loaded(catalog) => table_view(catalog.rows.clone(), page, discount_format),
            })}
        </div>
    }
}

fn loading_view() -> AnyView {
    view! {
        <div class="table-loading">
            <Spinner />
            <p>{"Cargando precios de renta..."}</p>
        </div>
    }
    .into_any()
}

fn error_view(error: &LoadError, page: CatalogPage) -> AnyView {
    let user_message = error.user_message();
    let detail = error.detail();
    view! {
        <div class="error-message">
            <MessageBar intent=MessageBarIntent::Error>
                <div>
                    {icon("alert")}
                    <h3>{"Error cargando precios"}</h3>
                    <p>{user_message}</p>
                    <p class="error-detail">{detail}</p>
                </div>
            </MessageBar>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| page.reload()>
                {icon("refresh")}
                {" Reintentar"}
            </Button>
        </div>
    }
    .into_any()
}

fn table_view(rows: Vec<ListRowViewModel>, page: CatalogPage, format: DiscountFormat) -> AnyView {
    view! {
        <div class="pricing-table">
            <div class="table-header">
                <div class="header-item">{"Equipo"}</div>
                <div class="header-item">{"Precio por Día"}</div>
                <div class="header-item">{"Precio por Semana"}</div>
                <div class="header-item">{"¡AHORRA!"}</div>
            </div>
            {rows.into_iter().map(|row| row_view(row, page, format)).collect_view()}
        </div>
    }
    .into_any()
}

fn row_view(row: ListRowViewModel, page: CatalogPage, format: DiscountFormat) -> impl IntoView {
    let item_for_click = row.item.clone();
    let item_for_key = row.item.clone();

    let on_click = move |ev: MouseEvent| {
        if click_landed_on_link(&ev) {
            return;
        }
        activate(page, RowActivation::Pointer, item_for_click.clone());
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if let Some(activation) = RowActivation::from_key(&ev.key()) {
            // Space would otherwise scroll the page.
            ev.prevent_default();
            activate(page, activation, item_for_key.clone());
        }
    };

    let pricing = row.pricing;

    view! {
        <div
            class="table-row dynamic-row"
            role="button"
            tabindex="0"
            style=format!("animation-delay: {}ms", row.reveal_delay_ms)
            on:click=on_click
            on:keydown=on_keydown
        >
            <div class="table-cell">
                <div class="equipo-name">
                    <i class=row.icon></i>
                    {row.name}
                </div>
                <div class=format!("category-badge {}", row.category_class)>
                    {row.category_label}
                </div>
            </div>
            <div class="table-cell price-cell">
                <div class="price">
                    {format_currency(row.daily_price)}
                    <span class="price-period">{" /día"}</span>
                </div>
            </div>
            <div class="table-cell price-cell">
                <div class="price">
                    {format_currency_int(pricing.weekly_price)}
                    <span class="price-period">{" /semana"}</span>
                </div>
                <div class="price-note">{"(7 días)"}</div>
            </div>
            <div class="table-cell save-cell">
                <div class="save-amount">
                    {format!("¡Ahorras {}!", format_currency_int(pricing.discount_amount))}
                </div>
                <div class="save-percent">
                    {format!("({}% de descuento)", pricing.discount_percent_text(format))}
                </div>
            </div>
        </div>
    }
}

fn activate(page: CatalogPage, activation: RowActivation, item: CatalogItem) {
    log::debug!("row {:?} activated via {:?}", item.name, activation);
    page.dispatch(OverlayCommand::Activate(item));
}

/// Clicks on a nested hyperlink follow the link instead of opening the overlay.
fn click_landed_on_link(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}
