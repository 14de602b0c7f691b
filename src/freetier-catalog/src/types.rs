//! Catalog entry types.
//!
//! Every entry is `'static` data compiled into the binary. Nesting is by value:
//! a [`Provider`] owns its [`Model`] list and nothing refers to anything else by id.

use serde::Serialize;

/// One AI model offered by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Model {
    pub name: &'static str,
    /// Free-text usage limits, empty when the provider-level limits apply.
    #[serde(skip_serializing_if = "no_limits")]
    pub limits: &'static [&'static str],
}

impl Model {
    /// Returns true if this model carries its own limit annotations.
    pub fn has_limits(&self) -> bool {
        !self.limits.is_empty()
    }
}

fn no_limits(limits: &&'static [&'static str]) -> bool {
    limits.is_empty()
}

/// A vendor with an ongoing free tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub name: &'static str,
    pub link: &'static str,
    pub logo: &'static str,
    pub limits: &'static [&'static str],
    pub models: &'static [Model],
}

/// A vendor offering one-time trial credit rather than a free tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialCreditProvider {
    pub name: &'static str,
    pub credits: &'static str,
    pub models: &'static [&'static str],
    pub link: &'static str,
    pub logo: &'static str,
}

/// A hosting/deployment platform with a free tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeploymentProvider {
    pub name: &'static str,
    pub features: &'static [&'static str],
    pub link: &'static str,
    pub logo: &'static str,
}

/// Borrowed view over an entry of any catalog.
///
/// Lets callers that do not care which catalog they are looking at (the CLI
/// listing, link activation) treat entries uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryRef<'a> {
    Provider(&'a Provider),
    TrialCredit(&'a TrialCreditProvider),
    Deployment(&'a DeploymentProvider),
}

impl<'a> EntryRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            EntryRef::Provider(p) => p.name,
            EntryRef::TrialCredit(t) => t.name,
            EntryRef::Deployment(d) => d.name,
        }
    }

    pub fn link(&self) -> &'a str {
        match self {
            EntryRef::Provider(p) => p.link,
            EntryRef::TrialCredit(t) => t.link,
            EntryRef::Deployment(d) => d.link,
        }
    }

    pub fn logo(&self) -> &'a str {
        match self {
            EntryRef::Provider(p) => p.logo,
            EntryRef::TrialCredit(t) => t.logo,
            EntryRef::Deployment(d) => d.logo,
        }
    }
}

impl<'a> From<&'a Provider> for EntryRef<'a> {
    fn from(value: &'a Provider) -> Self {
        EntryRef::Provider(value)
    }
}

impl<'a> From<&'a TrialCreditProvider> for EntryRef<'a> {
    fn from(value: &'a TrialCreditProvider) -> Self {
        EntryRef::TrialCredit(value)
    }
}

impl<'a> From<&'a DeploymentProvider> for EntryRef<'a> {
    fn from(value: &'a DeploymentProvider) -> Self {
        EntryRef::Deployment(value)
    }
}
