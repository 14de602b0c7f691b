//! Name lookup across catalogs.

use crate::filter::{Query, filter_catalog};
use crate::kind::CatalogKind;
use crate::types::EntryRef;

/// Find the entry called `name`.
///
/// Searches the catalogs in `kinds` in order. An exact case-insensitive name
/// match anywhere wins over a substring match; among substring matches the
/// first one in catalog order is returned.
pub fn find_entry(kinds: &[CatalogKind], name: &str) -> Option<EntryRef<'static>> {
    if name.is_empty() {
        return None;
    }

    let candidates: Vec<EntryRef<'static>> = kinds
        .iter()
        .flat_map(|kind| filter_catalog(*kind, ""))
        .collect();

    let wanted = name.to_lowercase();
    if let Some(exact) = candidates
        .iter()
        .find(|e| e.name().to_lowercase() == wanted)
    {
        return Some(*exact);
    }

    let query = Query::new(name);
    candidates.into_iter().find(|e| query.matches(e.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_preferred_over_substring() {
        // "Cloudflare Workers AI" comes before "Cloudflare Workers" when both
        // catalogs are searched, but the exact name must win.
        let entry = find_entry(
            &[CatalogKind::Providers, CatalogKind::Deployment],
            "cloudflare workers",
        )
        .unwrap();
        assert_eq!(entry.name(), "Cloudflare Workers");
        assert!(matches!(entry, EntryRef::Deployment(_)));
    }

    #[test]
    fn test_substring_fallback() {
        let entry = find_entry(&CatalogKind::ALL, "openrout").unwrap();
        assert_eq!(entry.name(), "OpenRouter");
    }

    #[test]
    fn test_restricted_to_kinds() {
        assert!(find_entry(&[CatalogKind::TrialCredits], "vercel").is_none());
    }

    #[test]
    fn test_empty_name_finds_nothing() {
        assert!(find_entry(&CatalogKind::ALL, "").is_none());
    }
}
