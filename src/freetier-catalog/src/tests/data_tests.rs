//! Sanity checks over the compiled-in catalogs.

use std::collections::HashSet;

use crate::data::*;
use crate::types::EntryRef;
use crate::{CatalogKind, filter_catalog};

fn all_entries() -> Vec<(CatalogKind, EntryRef<'static>)> {
    CatalogKind::ALL
        .iter()
        .flat_map(|kind| {
            filter_catalog(*kind, "")
                .into_iter()
                .map(move |e| (*kind, e))
        })
        .collect()
}

#[test]
fn test_catalogs_are_not_empty() {
    assert!(!PROVIDERS.is_empty());
    assert!(!TRIAL_CREDIT_PROVIDERS.is_empty());
    assert!(!DEPLOYMENT_PROVIDERS.is_empty());
}

#[test]
fn test_names_unique_within_each_catalog() {
    for kind in CatalogKind::ALL {
        let entries = filter_catalog(kind, "");
        let names: HashSet<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), entries.len(), "duplicate name in {kind}");
    }
}

#[test]
fn test_links_and_logos_are_https() {
    for (kind, entry) in all_entries() {
        assert!(
            entry.link().starts_with("https://"),
            "{kind}/{}: bad link {}",
            entry.name(),
            entry.link()
        );
        assert!(
            entry.logo().starts_with("https://"),
            "{kind}/{}: bad logo {}",
            entry.name(),
            entry.logo()
        );
    }
}

#[test]
fn test_every_provider_lists_models() {
    for provider in PROVIDERS {
        assert!(!provider.models.is_empty(), "{} has no models", provider.name);
        for model in provider.models {
            assert!(!model.name.is_empty());
        }
    }
}

#[test]
fn test_trial_credit_and_deployment_shape() {
    for trial in TRIAL_CREDIT_PROVIDERS {
        assert!(!trial.credits.is_empty(), "{} has no credits", trial.name);
        assert!(!trial.models.is_empty());
    }
    for host in DEPLOYMENT_PROVIDERS {
        assert!(!host.features.is_empty(), "{} has no features", host.name);
    }
}

#[test]
fn test_catalog_len_matches_lists() {
    assert_eq!(catalog_len(CatalogKind::Providers), PROVIDERS.len());
    assert_eq!(
        catalog_len(CatalogKind::TrialCredits),
        TRIAL_CREDIT_PROVIDERS.len()
    );
    assert_eq!(catalog_len(CatalogKind::Deployment), DEPLOYMENT_PROVIDERS.len());
}

#[test]
fn test_model_limits_serialize_only_when_present() {
    let studio = PROVIDERS
        .iter()
        .find(|p| p.name == "Google AI Studio")
        .unwrap();
    let json = serde_json::to_value(studio.models[0]).unwrap();
    assert!(json.get("limits").is_some());

    let openrouter = PROVIDERS.iter().find(|p| p.name == "OpenRouter").unwrap();
    let json = serde_json::to_value(openrouter.models[0]).unwrap();
    assert!(json.get("limits").is_none());
}

#[test]
fn test_entry_ref_serializes_with_kind_tag() {
    let entry = EntryRef::from(&DEPLOYMENT_PROVIDERS[0]);
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["kind"], "deployment");
    assert_eq!(json["name"], "GitHub Codespaces");
}
