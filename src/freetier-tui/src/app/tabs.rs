//! Tab controller.
//!
//! A three-state machine over the catalogs. It only moves on explicit
//! selection and always starts at [`CatalogKind::Providers`].

use freetier_catalog::CatalogKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabController {
    active: CatalogKind,
}

impl Default for TabController {
    fn default() -> Self {
        Self {
            active: CatalogKind::Providers,
        }
    }
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> CatalogKind {
        self.active
    }

    /// Select `kind`. Returns true if the active tab changed.
    pub fn select(&mut self, kind: CatalogKind) -> bool {
        if self.active == kind {
            return false;
        }
        tracing::debug!(from = %self.active, to = %kind, "tab switch");
        self.active = kind;
        true
    }

    /// Select by position in [`CatalogKind::ALL`]. Out-of-range is ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match CatalogKind::ALL.get(index) {
            Some(kind) => self.select(*kind),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        self.select(self.active.next())
    }

    pub fn prev(&mut self) -> bool {
        self.select(self.active.prev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_providers() {
        assert_eq!(TabController::new().active(), CatalogKind::Providers);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut tabs = TabController::new();
        assert!(tabs.next());
        assert_eq!(tabs.active(), CatalogKind::TrialCredits);
        assert!(tabs.next());
        assert!(tabs.next());
        assert_eq!(tabs.active(), CatalogKind::Providers);
        assert!(tabs.prev());
        assert_eq!(tabs.active(), CatalogKind::Deployment);
    }

    #[test]
    fn test_reselect_is_not_a_change() {
        let mut tabs = TabController::new();
        assert!(!tabs.select(CatalogKind::Providers));
        assert!(tabs.select_index(2));
        assert!(!tabs.select_index(2));
        assert!(!tabs.select_index(7));
        assert_eq!(tabs.active(), CatalogKind::Deployment);
    }
}
