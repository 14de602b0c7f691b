//! Case-insensitive substring filtering over a catalog.
//!
//! An entry is kept when its name contains the query, or, for providers, when
//! any of its model names does. The empty query keeps everything. The query is
//! used as-is: no trimming, no tokenizing, no ranking. Output order is input
//! order.

use crate::data;
use crate::kind::CatalogKind;
use crate::types::{DeploymentProvider, EntryRef, Provider, TrialCreditProvider};

/// A lowercased search needle.
///
/// Built once per query so that matching many entries doesn't re-fold the
/// needle each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Returns true if this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive containment test against `haystack`.
    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }
}

/// Something a [`Query`] can select.
pub trait Searchable {
    /// Display name of the entry.
    fn name(&self) -> &str;

    /// Whether the entry should be kept for `query`.
    ///
    /// The default matches on the name alone.
    fn matches(&self, query: &Query) -> bool {
        query.matches(self.name())
    }
}

impl Searchable for Provider {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, query: &Query) -> bool {
        query.matches(self.name) || self.models.iter().any(|m| query.matches(m.name))
    }
}

impl Searchable for TrialCreditProvider {
    fn name(&self) -> &str {
        self.name
    }
}

impl Searchable for DeploymentProvider {
    fn name(&self) -> &str {
        self.name
    }
}

/// Filter `entries` by `query`, preserving order.
pub fn filter_entries<'a, T: Searchable>(entries: &'a [T], query: &str) -> Vec<&'a T> {
    let query = Query::new(query);
    entries.iter().filter(|e| e.matches(&query)).collect()
}

/// Filter one of the built-in catalogs and return uniform entry views.
pub fn filter_catalog(kind: CatalogKind, query: &str) -> Vec<EntryRef<'static>> {
    match kind {
        CatalogKind::Providers => filter_entries(data::PROVIDERS, query)
            .into_iter()
            .map(EntryRef::from)
            .collect(),
        CatalogKind::TrialCredits => filter_entries(data::TRIAL_CREDIT_PROVIDERS, query)
            .into_iter()
            .map(EntryRef::from)
            .collect(),
        CatalogKind::Deployment => filter_entries(data::DEPLOYMENT_PROVIDERS, query)
            .into_iter()
            .map(EntryRef::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Model;

    const OPENROUTER: Provider = Provider {
        name: "OpenRouter",
        link: "https://openrouter.ai",
        logo: "https://openrouter.ai/favicon.ico",
        limits: &["20 requests/minute"],
        models: &[
            Model {
                name: "DeepSeek R1",
                limits: &[],
            },
            Model {
                name: "Mistral Nemo",
                limits: &[],
            },
        ],
    };

    const GROQ: Provider = Provider {
        name: "Groq",
        link: "https://console.groq.com",
        logo: "https://groq.com/favicon.ico",
        limits: &[],
        models: &[Model {
            name: "Llama 3.3 70B",
            limits: &["1,000 requests/day"],
        }],
    };

    #[test]
    fn test_query_folds_case() {
        let q = Query::new("DeepSeek");
        assert!(q.matches("deepseek r1"));
        assert!(q.matches("DEEPSEEK"));
        assert!(!q.matches("deep seek"));
    }

    #[test]
    fn test_query_keeps_whitespace() {
        let q = Query::new(" groq");
        assert!(!q.matches("Groq"));
        assert!(q.matches("Hello groq"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(Query::new("").matches(""));
        assert!(Query::new("").matches("anything"));
    }

    #[test]
    fn test_model_name_selects_provider() {
        let providers = [OPENROUTER, GROQ];
        let result = filter_entries(&providers, "deepseek");
        assert_eq!(result, vec![&OPENROUTER]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let providers = [OPENROUTER, GROQ];
        assert!(filter_entries(&providers, "xyz123").is_empty());
    }

    #[test]
    fn test_trial_credits_match_name_only() {
        let trials = [TrialCreditProvider {
            name: "Together",
            credits: "$1",
            models: &["Various open models"],
            link: "https://together.ai",
            logo: "",
        }];
        assert_eq!(filter_entries(&trials, "toGEther").len(), 1);
        assert!(filter_entries(&trials, "open models").is_empty());
    }

    #[test]
    fn test_deployment_match_name_only() {
        let hosts = [DeploymentProvider {
            name: "Vercel",
            features: &["Edge deployment"],
            link: "https://vercel.com",
            logo: "",
        }];
        assert_eq!(filter_entries(&hosts, "verc").len(), 1);
        assert!(filter_entries(&hosts, "edge").is_empty());
    }

    #[test]
    fn test_filter_catalog_empty_query_is_identity() {
        assert_eq!(
            filter_catalog(CatalogKind::Deployment, "").len(),
            data::DEPLOYMENT_PROVIDERS.len()
        );
    }
}
