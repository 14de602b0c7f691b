//! Open command - launch an entry's website from the shell.

use anyhow::{Result, bail};
use clap::Parser;
use freetier_catalog::{CatalogKind, EntryRef, find_entry};
use freetier_tui::open_link;

/// Arguments for `open`.
#[derive(Debug, Parser)]
pub struct OpenCommand {
    /// Entry name; an exact match wins, otherwise the first name containing it
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Only search this catalog
    #[arg(long = "tab", short = 't')]
    pub tab: Option<CatalogKind>,

    /// Print the link instead of opening it
    #[arg(long)]
    pub print: bool,
}

impl OpenCommand {
    pub async fn run(self) -> Result<()> {
        let entry = self.resolve()?;
        let link = entry.link();

        if self.print {
            println!("{link}");
            return Ok(());
        }

        open_link(link)?;
        println!("Opened {} ({link})", entry.name());
        Ok(())
    }

    /// The entry this command refers to.
    pub fn resolve(&self) -> Result<EntryRef<'static>> {
        let name = self.name.trim();
        if name.is_empty() {
            bail!("Entry name cannot be empty.");
        }

        let kinds: &[CatalogKind] = match &self.tab {
            Some(tab) => std::slice::from_ref(tab),
            None => &CatalogKind::ALL,
        };
        match find_entry(kinds, name) {
            Some(entry) => Ok(entry),
            None => bail!(
                "no entry matches '{}'. Run 'freetier list' to see what is available.",
                name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(name: &str, tab: Option<CatalogKind>) -> OpenCommand {
        OpenCommand {
            name: name.to_string(),
            tab,
            print: true,
        }
    }

    #[test]
    fn test_resolve_across_catalogs() {
        let entry = cmd("groq", None).resolve().unwrap();
        assert_eq!(entry.link(), "https://console.groq.com");

        let entry = cmd("vercel", None).resolve().unwrap();
        assert!(matches!(entry, EntryRef::Deployment(_)));
    }

    #[test]
    fn test_resolve_restricted_to_tab() {
        assert!(cmd("vercel", Some(CatalogKind::Providers)).resolve().is_err());
        let entry = cmd("Fireworks", Some(CatalogKind::TrialCredits))
            .resolve()
            .unwrap();
        assert!(matches!(entry, EntryRef::TrialCredit(_)));
    }

    #[test]
    fn test_resolve_errors() {
        assert!(cmd("   ", None).resolve().is_err());
        let err = cmd("no-such-thing", None).resolve().unwrap_err();
        assert!(err.to_string().contains("no entry matches"));
    }
}
