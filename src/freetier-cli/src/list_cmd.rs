//! List command - print a catalog, optionally filtered.
//!
//! Uses the same filter as the TUI search box, so `freetier list -q llama`
//! shows exactly the cards the TUI shows for that query.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use freetier_catalog::logo::placeholder_url;
use freetier_catalog::{CatalogKind, EntryRef, filter_catalog};
use serde::Serialize;

/// Arguments for `list`.
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// Catalog to list: providers, trial-credits or deployment
    #[arg(long = "tab", short = 't', default_value = "providers")]
    pub tab: CatalogKind,

    /// Case-insensitive substring filter over entry names and model names
    #[arg(long = "query", short = 'q', default_value = "")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    entry: EntryRef<'a>,
    logo_placeholder: String,
}

#[derive(Debug, Serialize)]
struct JsonListing<'a> {
    tab: CatalogKind,
    query: &'a str,
    count: usize,
    entries: Vec<JsonEntry<'a>>,
}

impl ListCommand {
    pub async fn run(self) -> Result<()> {
        let entries = filter_catalog(self.tab, &self.query);
        tracing::debug!(tab = %self.tab, query = %self.query, count = entries.len(), "listing catalog");

        let mut out = io::stdout().lock();
        if self.json {
            write_json(&mut out, self.tab, &self.query, &entries)?;
        } else {
            write_text(&mut out, self.tab, &self.query, &entries)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON listing.
pub fn write_json(
    out: &mut impl Write,
    tab: CatalogKind,
    query: &str,
    entries: &[EntryRef<'_>],
) -> Result<()> {
    let listing = JsonListing {
        tab,
        query,
        count: entries.len(),
        entries: entries
            .iter()
            .map(|entry| JsonEntry {
                entry: *entry,
                logo_placeholder: placeholder_url(entry.name()),
            })
            .collect(),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
    Ok(())
}

/// Human-readable listing, one block per entry.
pub fn write_text(
    out: &mut impl Write,
    tab: CatalogKind,
    query: &str,
    entries: &[EntryRef<'_>],
) -> Result<()> {
    if entries.is_empty() {
        if query.trim().is_empty() {
            writeln!(out, "No {} available.", tab.label())?;
        } else {
            writeln!(out, "No {} match \"{}\".", tab.label(), query)?;
        }
        return Ok(());
    }

    writeln!(out, "{} ({})", tab.label(), entries.len())?;
    writeln!(out, "{}", "=".repeat(60))?;

    for entry in entries {
        writeln!(out)?;
        writeln!(out, "{}", entry.name())?;
        writeln!(out, "  {}", entry.link())?;
        match entry {
            EntryRef::Provider(p) => {
                write_bullets(out, "Limits", p.limits)?;
                if !p.models.is_empty() {
                    writeln!(out, "  Available Models:")?;
                    for model in p.models {
                        writeln!(out, "    - {}", model.name)?;
                        for limit in model.limits {
                            writeln!(out, "        {limit}")?;
                        }
                    }
                }
            }
            EntryRef::TrialCredit(t) => {
                writeln!(out, "  Credits: {}", t.credits)?;
                write_bullets(out, "Models", t.models)?;
            }
            EntryRef::Deployment(d) => {
                write_bullets(out, "Features", d.features)?;
            }
        }
    }
    Ok(())
}

fn write_bullets(out: &mut impl Write, heading: &str, items: &[&str]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "  {heading}:")?;
    for item in items {
        writeln!(out, "    - {item}")?;
    }
    Ok(())
}
