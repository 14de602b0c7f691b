//! Catalog selector shared by the TUI tabs and the CLI `--tab` flag.

use serde::Serialize;

/// Which of the three catalogs to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    /// Free-tier LLM/API providers
    #[default]
    Providers,
    /// One-time trial credit offers
    TrialCredits,
    /// Hosting/deployment platforms
    Deployment,
}

impl CatalogKind {
    /// All kinds in display order.
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Providers,
        CatalogKind::TrialCredits,
        CatalogKind::Deployment,
    ];

    /// Human-readable label used for tabs and headings.
    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Providers => "LLM Providers",
            CatalogKind::TrialCredits => "Trial Credits",
            CatalogKind::Deployment => "Deployment",
        }
    }

    /// Stable identifier used on the command line and in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Providers => "providers",
            CatalogKind::TrialCredits => "trial-credits",
            CatalogKind::Deployment => "deployment",
        }
    }

    /// Position in [`CatalogKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            CatalogKind::Providers => 0,
            CatalogKind::TrialCredits => 1,
            CatalogKind::Deployment => 2,
        }
    }

    /// The next kind, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous kind, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "providers" | "provider" | "llm" => Ok(Self::Providers),
            "trial-credits" | "trial" | "trials" | "credits" => Ok(Self::TrialCredits),
            "deployment" | "deploy" | "hosting" => Ok(Self::Deployment),
            _ => Err(format!(
                "Invalid catalog '{}'. Use: providers, trial-credits, or deployment",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_providers() {
        assert_eq!(CatalogKind::default(), CatalogKind::Providers);
    }

    #[test]
    fn test_next_prev_cycle() {
        let mut kind = CatalogKind::Providers;
        for _ in 0..CatalogKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, CatalogKind::Providers);

        assert_eq!(CatalogKind::Providers.prev(), CatalogKind::Deployment);
        assert_eq!(CatalogKind::Deployment.next(), CatalogKind::Providers);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("LLM".parse::<CatalogKind>(), Ok(CatalogKind::Providers));
        assert_eq!("trial".parse::<CatalogKind>(), Ok(CatalogKind::TrialCredits));
        assert_eq!("hosting".parse::<CatalogKind>(), Ok(CatalogKind::Deployment));
        assert!("nope".parse::<CatalogKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in CatalogKind::ALL {
            assert_eq!(kind.to_string().parse::<CatalogKind>(), Ok(kind));
        }
    }
}
