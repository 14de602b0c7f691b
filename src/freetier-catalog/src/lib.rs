//! Catalog of free-tier AI/LLM providers, trial-credit offers and deployment
//! platforms.
//!
//! This crate provides:
//! - The entry types ([`Provider`], [`Model`], [`TrialCreditProvider`],
//!   [`DeploymentProvider`]) and a uniform [`EntryRef`] view
//! - The compiled-in catalogs under [`data`]
//! - The case-insensitive substring filter used by both the TUI and the CLI
//! - Logo resolution with a first-letter placeholder fallback
//!
//! ```
//! use freetier_catalog::{CatalogKind, filter_catalog};
//!
//! let hits = filter_catalog(CatalogKind::Providers, "deepseek");
//! assert!(hits.iter().any(|e| e.name() == "OpenRouter"));
//! ```

pub mod data;
pub mod filter;
pub mod kind;
pub mod logo;
pub mod lookup;
pub mod types;

#[cfg(test)]
mod tests;

pub use data::{DEPLOYMENT_PROVIDERS, PROVIDERS, TRIAL_CREDIT_PROVIDERS, catalog_len};
pub use filter::{Query, Searchable, filter_catalog, filter_entries};
pub use kind::CatalogKind;
pub use logo::{LogoLoad, LogoLoader, LogoView, TextSurfaceLoader, placeholder_label, resolve_logo};
pub use lookup::find_entry;
pub use types::{DeploymentProvider, EntryRef, Model, Provider, TrialCreditProvider};
