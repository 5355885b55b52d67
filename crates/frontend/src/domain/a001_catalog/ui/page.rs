use super::details::controller::{ContactPolicy, OverlayCommand, OverlayController, OverlayEffect};
use super::list::state::{create_state, CatalogListState, LoadStatus};
use super::list::CatalogList;
use super::summary::CatalogSummaryPanel;
use crate::domain::a001_catalog::api;
use crate::shared::browser::{self, ScrollLock};
use crate::shared::config::PageConfig;
use crate::shared::contact_link::{LinkComposer, WhatsAppComposer};
use crate::shared::icons::icon;
use contracts::domain::a001_catalog_item::DEFAULT_IMAGE;
use leptos::prelude::*;
use thaw::*;

/// Page state owned by the app root and shared through context.
#[derive(Clone, Copy)]
pub struct CatalogPage {
    pub config: StoredValue<PageConfig>,
    pub list: RwSignal<CatalogListState>,
    pub overlay: RwSignal<OverlayController>,
    scroll_lock: StoredValue<ScrollLock>,
}

impl CatalogPage {
    pub fn new(config: PageConfig) -> Self {
        let policy = if config.close_on_contact {
            ContactPolicy::CloseAfterContact
        } else {
            ContactPolicy::KeepOpen
        };
        Self {
            config: StoredValue::new(config),
            list: create_state(),
            overlay: RwSignal::new(OverlayController::new(DEFAULT_IMAGE, policy)),
            scroll_lock: StoredValue::new(ScrollLock::default()),
        }
    }

    /// Starts a load. A newer call supersedes any load still in flight.
    pub fn reload(&self) {
        let mut ticket = None;
        self.list.update(|s| ticket = Some(s.begin_load()));
        let Some(ticket) = ticket else {
            return;
        };

        let url = self.config.with_value(|c| c.catalog_url.clone());
        let list = self.list;
        log::info!("Loading catalog from {}", url);

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::load_catalog(&url).await;

            let mut applied = false;
            list.update(|s| applied = s.finish_load(ticket, result));
            if !applied {
                log::debug!("Discarded stale catalog load {:?}", ticket);
                return;
            }

            list.with_untracked(|s| match s.error() {
                Some(e) => log::error!("Error cargando los datos ({:?}): {}", e.kind(), e),
                None => log::info!("Catalog loaded: {} items", s.rows().len()),
            });
        });
    }

    pub fn dispatch(&self, command: OverlayCommand) {
        log::debug!("overlay command: {:?}", command);
        let mut effects = Vec::new();
        self.overlay
            .update(|controller| effects = controller.dispatch(command));
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&self, effect: OverlayEffect) {
        match effect {
            OverlayEffect::LockScroll => {
                self.scroll_lock.update_value(browser::lock_background_scroll)
            }
            OverlayEffect::UnlockScroll => {
                self.scroll_lock.update_value(browser::unlock_background_scroll)
            }
            OverlayEffect::Contact { item_name } => {
                let url = self
                    .config
                    .with_value(|c| WhatsAppComposer::from_config(c).compose(&item_name));
                browser::open_in_new_tab(&url);
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PriceListPage() -> impl IntoView {
    let page = use_context::<CatalogPage>().expect("CatalogPage not provided in context");
    let is_loading = move || page.list.with(|s| matches!(s.status, LoadStatus::Loading));

    view! {
        <section class="pricing-section">
            <div class="header">
                <h2>{"Precios de renta"}</h2>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| page.reload()
                    >
                        {icon("refresh")}
                        {move || if is_loading() { " Actualizando..." } else { " Actualizar precios" }}
                    </Button>
                </div>
            </div>

            <CatalogSummaryPanel />
            <CatalogList />
        </section>
    }
}
