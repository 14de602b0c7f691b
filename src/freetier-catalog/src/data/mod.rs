//! The compiled-in catalogs.
//!
//! Three independent lists. A name may appear in more than one list; no
//! identity is implied across them.

mod deployment;
mod providers;
mod trial_credits;

pub use deployment::DEPLOYMENT_PROVIDERS;
pub use providers::PROVIDERS;
pub use trial_credits::TRIAL_CREDIT_PROVIDERS;

use crate::kind::CatalogKind;

/// Number of entries in the catalog for `kind`.
pub fn catalog_len(kind: CatalogKind) -> usize {
    match kind {
        CatalogKind::Providers => PROVIDERS.len(),
        CatalogKind::TrialCredits => TRIAL_CREDIT_PROVIDERS.len(),
        CatalogKind::Deployment => DEPLOYMENT_PROVIDERS.len(),
    }
}
