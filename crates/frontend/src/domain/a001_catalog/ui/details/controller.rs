//! Detail overlay state machine.
//!
//! One controller serves every row. It never touches the DOM: each
//! [`OverlayCommand`] yields the [`OverlayEffect`]s the page must apply.

use crate::shared::number_format::format_currency;
use contracts::domain::a001_catalog_item::{CatalogItem, DEFAULT_IMAGE};
use contracts::shared::pricing::{self, DerivedPricing};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(CatalogItem),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Background,
    Escape,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayCommand {
    Activate(CatalogItem),
    Close(CloseReason),
    RequestContact,
    /// The detail photo failed to load.
    ImageFailed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayEffect {
    LockScroll,
    UnlockScroll,
    /// Hand the item name to the link composer and open the result.
    Contact { item_name: String },
}

/// What happens to the overlay after the contact action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactPolicy {
    #[default]
    KeepOpen,
    CloseAfterContact,
}

/// Data shown by the open overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayContent {
    pub image: String,
    pub title: String,
    pub price_per_day: String,
    pub pricing: DerivedPricing,
}

#[derive(Clone, Debug)]
pub struct OverlayController {
    state: OverlayState,
    placeholder_image: String,
    contact_policy: ContactPolicy,
    image_failed: bool,
    mounted: bool,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE, ContactPolicy::default())
    }
}

impl OverlayController {
    pub fn new(placeholder_image: impl Into<String>, contact_policy: ContactPolicy) -> Self {
        Self {
            state: OverlayState::Closed,
            placeholder_image: placeholder_image.into(),
            contact_policy,
            image_failed: false,
            mounted: false,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    /// `true` once the overlay has been opened at least once.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn selected(&self) -> Option<&CatalogItem> {
        match &self.state {
            OverlayState::Open(item) => Some(item),
            OverlayState::Closed => None,
        }
    }

    pub fn dispatch(&mut self, command: OverlayCommand) -> Vec<OverlayEffect> {
        match command {
            OverlayCommand::Activate(item) => {
                let was_open = self.is_open();
                self.state = OverlayState::Open(item);
                self.image_failed = false;
                self.mounted = true;
                if was_open {
                    Vec::new()
                } else {
                    vec![OverlayEffect::LockScroll]
                }
            }
            OverlayCommand::Close(_) => self.close(),
            OverlayCommand::RequestContact => {
                let Some(item) = self.selected() else {
                    return Vec::new();
                };
                let mut effects = vec![OverlayEffect::Contact {
                    item_name: item.name.clone(),
                }];
                if self.contact_policy == ContactPolicy::CloseAfterContact {
                    effects.extend(self.close());
                }
                effects
            }
            OverlayCommand::ImageFailed => {
                if self.is_open() {
                    self.image_failed = true;
                }
                Vec::new()
            }
        }
    }

    fn close(&mut self) -> Vec<OverlayEffect> {
        if !self.is_open() {
            return Vec::new();
        }
        self.state = OverlayState::Closed;
        self.image_failed = false;
        vec![OverlayEffect::UnlockScroll]
    }

    pub fn content(&self) -> Option<OverlayContent> {
        let item = self.selected()?;
        let image = if self.image_failed {
            self.placeholder_image.clone()
        } else {
            match item.image.as_deref().filter(|i| !i.trim().is_empty()) {
                Some(image) => image.to_string(),
                None => self.placeholder_image.clone(),
            }
        };
        Some(OverlayContent {
            image,
            title: item.name.clone(),
            price_per_day: format!("{}/día", format_currency(item.daily_price)),
            pricing: pricing::compute(item.daily_price, item.weekly_discount_fraction),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sierra() -> CatalogItem {
        CatalogItem::new("Sierra", 50.0, 0.20).with_image("img/sierra.jpg")
    }

    fn taladro() -> CatalogItem {
        CatalogItem::new("Taladro", 100.0, 0.10)
    }

    #[test]
    fn test_initial_state_is_closed() {
        let controller = OverlayController::default();
        assert_eq!(controller.state(), &OverlayState::Closed);
        assert!(!controller.is_mounted());
        assert!(controller.content().is_none());
    }

    #[test]
    fn test_activate_then_escape() {
        let mut controller = OverlayController::default();

        let effects = controller.dispatch(OverlayCommand::Activate(sierra()));
        assert_eq!(controller.state(), &OverlayState::Open(sierra()));
        assert_eq!(effects, vec![OverlayEffect::LockScroll]);

        let effects = controller.dispatch(OverlayCommand::Close(CloseReason::Escape));
        assert_eq!(controller.state(), &OverlayState::Closed);
        assert_eq!(effects, vec![OverlayEffect::UnlockScroll]);
        assert!(controller.is_mounted());
    }

    #[test]
    fn test_reactivation_replaces_in_place() {
        let mut controller = OverlayController::default();
        controller.dispatch(OverlayCommand::Activate(sierra()));

        let effects = controller.dispatch(OverlayCommand::Activate(taladro()));
        assert_eq!(controller.state(), &OverlayState::Open(taladro()));
        assert!(effects.is_empty());
        assert_eq!(controller.content().map(|c| c.title), Some("Taladro".to_string()));
    }

    #[test]
    fn test_every_close_reason_closes() {
        for reason in [CloseReason::Button, CloseReason::Background, CloseReason::Escape] {
            let mut controller = OverlayController::default();
            controller.dispatch(OverlayCommand::Activate(taladro()));
            assert_eq!(
                controller.dispatch(OverlayCommand::Close(reason)),
                vec![OverlayEffect::UnlockScroll]
            );
            assert!(!controller.is_open());
        }
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut controller = OverlayController::default();
        assert!(controller.dispatch(OverlayCommand::Close(CloseReason::Escape)).is_empty());
        assert!(controller.dispatch(OverlayCommand::RequestContact).is_empty());
    }

    #[test]
    fn test_contact_keeps_overlay_open_by_default() {
        let mut controller = OverlayController::default();
        controller.dispatch(OverlayCommand::Activate(sierra()));

        let effects = controller.dispatch(OverlayCommand::RequestContact);
        assert_eq!(effects, vec![OverlayEffect::Contact { item_name: "Sierra".into() }]);
        assert_eq!(controller.state(), &OverlayState::Open(sierra()));
    }

    #[test]
    fn test_contact_can_close_overlay() {
        let mut controller = OverlayController::new(DEFAULT_IMAGE, ContactPolicy::CloseAfterContact);
        controller.dispatch(OverlayCommand::Activate(sierra()));

        let effects = controller.dispatch(OverlayCommand::RequestContact);
        assert_eq!(
            effects,
            vec![
                OverlayEffect::Contact { item_name: "Sierra".into() },
                OverlayEffect::UnlockScroll,
            ]
        );
        assert_eq!(controller.state(), &OverlayState::Closed);
    }

    #[test]
    fn test_content() {
        let mut controller = OverlayController::default();
        controller.dispatch(OverlayCommand::Activate(taladro()));

        let content = controller.content().unwrap();
        assert_eq!(content.title, "Taladro");
        assert_eq!(content.image, DEFAULT_IMAGE);
        assert_eq!(content.price_per_day, "$100/día");
        assert_eq!(content.pricing.weekly_price, 630);
    }

    #[test]
    fn test_image_failure_falls_back_to_placeholder() {
        let mut controller = OverlayController::new("img/fallback.png", ContactPolicy::KeepOpen);
        controller.dispatch(OverlayCommand::Activate(sierra()));
        assert_eq!(controller.content().unwrap().image, "img/sierra.jpg");

        assert!(controller.dispatch(OverlayCommand::ImageFailed).is_empty());
        assert_eq!(controller.content().unwrap().image, "img/fallback.png");

        // A new selection gets a fresh attempt at its own photo.
        controller.dispatch(OverlayCommand::Activate(
            CatalogItem::new("Lijadora", 70.0, 0.1).with_image("img/lijadora.jpg"),
        ));
        assert_eq!(controller.content().unwrap().image, "img/lijadora.jpg");
    }
}
