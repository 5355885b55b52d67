//! Browser side effects of the detail overlay.

use web_sys::{window, CssStyleDeclaration};

/// Inline `overflow` of the body as it was before the overlay locked scrolling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
    previous: Option<String>,
}

impl ScrollLock {
    /// Remembers `inline_overflow` unless a lock is already held.
    pub fn lock(&mut self, inline_overflow: &str) {
        if self.locked {
            return;
        }
        self.locked = true;
        self.previous = (!inline_overflow.is_empty()).then(|| inline_overflow.to_string());
    }

    /// Value to put back; `None` means the property was not set inline.
    pub fn unlock(&mut self) -> Option<String> {
        self.locked = false;
        self.previous.take()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

pub fn lock_background_scroll(lock: &mut ScrollLock) {
    let Some(style) = body_style() else {
        return;
    };
    lock.lock(&style.get_property_value("overflow").unwrap_or_default());
    if let Err(e) = style.set_property("overflow", "hidden") {
        log::warn!("Failed to update body overflow: {e:?}");
    }
}

pub fn unlock_background_scroll(lock: &mut ScrollLock) {
    if !lock.is_locked() {
        return;
    }
    let previous = lock.unlock();
    let Some(style) = body_style() else {
        return;
    };
    let result = match previous {
        Some(v) => style.set_property("overflow", &v),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(e) = result {
        log::warn!("Failed to restore body overflow: {e:?}");
    }
}

fn body_style() -> Option<CssStyleDeclaration> {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if body.is_none() {
        log::warn!("document body not available, scroll lock skipped");
    }
    body.map(|b| b.style())
}

/// Opens `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let Some(win) = window() else {
        return;
    };
    if let Err(e) = win.open_with_url_and_target(url, "_blank") {
        log::error!("Failed to open {}: {e:?}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_restores_inline_overflow() {
        let mut lock = ScrollLock::default();
        lock.lock("auto");
        assert!(lock.is_locked());
        assert_eq!(lock.unlock(), Some("auto".to_string()));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_unlock_without_inline_value_removes_property() {
        let mut lock = ScrollLock::default();
        lock.lock("");
        assert_eq!(lock.unlock(), None);
    }

    #[test]
    fn test_second_lock_keeps_first_value() {
        let mut lock = ScrollLock::default();
        lock.lock("scroll");
        lock.lock("hidden");
        assert_eq!(lock.unlock(), Some("scroll".to_string()));
    }
}
