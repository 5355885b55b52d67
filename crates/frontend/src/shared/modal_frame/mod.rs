use leptos::ev;
use leptos::prelude::*;

/// Overlay frame (backdrop + positioned surface) that stays mounted and is
/// shown or hidden through the `active` class.
#[component]
pub fn ModalFrame(
    /// Whether the overlay is visible.
    #[prop(into)]
    open: Signal<bool>,
    /// Called when the backdrop itself is clicked.
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the backdrop, so a text
    // selection that ends outside the surface does not dismiss the overlay.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            on_close.run(());
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            class:active=move || open.get()
            aria-hidden=move || (!open.get()).to_string()
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                role="dialog"
                aria-modal="true"
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
