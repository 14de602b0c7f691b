//! CLI styling and formatting.
//!
//! Defines ANSI colors and formatting for the CLI help output.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Freetier help theme: green accents to match the TUI.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section with examples and environment variables.
pub const AFTER_HELP: &str = color_print::cstr!(
    r#"<green,bold>EXAMPLES</>
    <green,bold>freetier</>                              Browse interactively
    <green,bold>freetier list</> <dim>--query llama</>           Providers offering a Llama model
    <green,bold>freetier list</> <dim>--tab deployment --json</> Hosting platforms as JSON
    <green,bold>freetier open</> <dim>groq</>                    Open a provider's website

<green,bold>ENVIRONMENT VARIABLES</>
    <yellow>FREETIER_HOME</>        Config directory (default: ~/.freetier)
    <yellow>FREETIER_LOG_LEVEL</>   Log verbosity (error, warn, info, debug, trace)
    <yellow>RUST_LOG</>             Full tracing filter, overrides the log level
    <yellow>NO_COLOR</>             Disable colored output

<green,bold>KEYS</>
    <dim>Tab/Shift+Tab</> switch tab   <dim>F1-F3</> jump to tab   <dim>Up/Down</> select card
    <dim>Ctrl+N/P</> move model cursor   <dim>Enter</> expand model   <dim>Ctrl+O</> open link
    <dim>Ctrl+B</> toggle background   <dim>Esc</> clear search or quit"#
);

/// Before-help banner.
pub const BEFORE_HELP: &str = color_print::cstr!(
    r#"<green,bold>  ░█▀▀░█▀▄░█▀▀░█▀▀░▀█▀░▀█▀░█▀▀░█▀▄
  ░█▀▀░█▀▄░█▀▀░█▀▀░░█░░░█░░█▀▀░█▀▄
  ░▀░░░▀░▀░▀▀▀░▀▀▀░░▀░░▀▀▀░▀▀▀░▀░▀</>
<dim>        Free Development Resources</>"#
);
