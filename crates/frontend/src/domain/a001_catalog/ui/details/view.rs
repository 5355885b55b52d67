use super::controller::{CloseReason, OverlayCommand};
use crate::domain::a001_catalog::ui::page::CatalogPage;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_currency_int;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// The single detail overlay of the page. Mounted on first activation and
/// kept in the DOM afterwards.
#[component]
#[allow(non_snake_case)]
pub fn DetailOverlay() -> impl IntoView {
    let page = use_context::<CatalogPage>().expect("CatalogPage not provided in context");
    let discount_format = page.config.with_value(|c| c.discount_format);

    // Escape closes the overlay; installed once for the page session.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && page.overlay.with_untracked(|c| c.is_open()) {
                    page.dispatch(OverlayCommand::Close(CloseReason::Escape));
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let is_mounted = move || page.overlay.with(|c| c.is_mounted());
    let is_open = Signal::derive(move || page.overlay.with(|c| c.is_open()));
    let content = move || page.overlay.with(|c| c.content());

    view! {
        <Show when=is_mounted>
            <ModalFrame
                open=is_open
                on_close=Callback::new(move |_| page.dispatch(OverlayCommand::Close(CloseReason::Background)))
                modal_class="detail-modal".to_string()
            >
                <button
                    class="button button--icon modal__close"
                    aria-label="Cerrar"
                    on:click=move |_| page.dispatch(OverlayCommand::Close(CloseReason::Button))
                >
                    {icon("x")}
                </button>
                {move || content().map(|c| {
                    let savings = format!(
                        "{}/semana · ¡Ahorras {}! ({}% de descuento)",
                        format_currency_int(c.pricing.weekly_price),
                        format_currency_int(c.pricing.discount_amount),
                        c.pricing.discount_percent_text(discount_format),
                    );
                    view! {
                        <div class="modal-body">
                            <img
                                class="detail-image"
                                src=c.image
                                alt=c.title.clone()
                                on:error=move |_| page.dispatch(OverlayCommand::ImageFailed)
                            />
                            <h2 class="modal-title">{c.title}</h2>
                            <p class="detail-price">{c.price_per_day}</p>
                            <p class="detail-weekly">{savings}</p>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| page.dispatch(OverlayCommand::RequestContact)
                            >
                                {icon("message")}
                                {" Rentar por WhatsApp"}
                            </Button>
                        </div>
                    }
                })}
            </ModalFrame>
        </Show>
    }
}
