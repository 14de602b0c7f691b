//! Opening entry links in the system browser.

use std::process::{Command, Stdio};

use thiserror::Error;
use url::Url;

/// Errors from [`open_link`].
#[derive(Debug, Error)]
pub enum OpenLinkError {
    #[error("invalid link {link:?}: {source}")]
    Invalid {
        link: String,
        #[source]
        source: url::ParseError,
    },

    #[error("refusing to open {scheme}: link")]
    UnsupportedScheme { scheme: String },

    #[error("refusing to open a link with embedded credentials")]
    Credentials,

    #[error("no browser launcher on this platform")]
    UnsupportedPlatform,

    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Parse `link` and check that it is safe to hand to the OS.
///
/// Only `http` and `https` URLs without a username or password pass.
pub fn validate_link(link: &str) -> Result<Url, OpenLinkError> {
    let url = Url::parse(link).map_err(|source| OpenLinkError::Invalid {
        link: link.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(OpenLinkError::UnsupportedScheme {
                scheme: other.to_string(),
            });
        }
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err(OpenLinkError::Credentials);
    }

    Ok(url)
}

/// Open `link` in the user's browser.
///
/// Returns once the launcher process is spawned; whether the browser actually
/// shows the page is not observable.
pub fn open_link(link: &str) -> Result<(), OpenLinkError> {
    let url = validate_link(link)?;
    let mut command = launcher(url.as_str())?;
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    tracing::info!(link = %url, "opened link");
    Ok(())
}

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Result<Command, OpenLinkError> {
    let mut command = Command::new("open");
    command.arg(url);
    Ok(command)
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Result<Command, OpenLinkError> {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    Ok(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launcher(url: &str) -> Result<Command, OpenLinkError> {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Ok(command)
}

#[cfg(not(any(unix, target_os = "windows")))]
fn launcher(_url: &str) -> Result<Command, OpenLinkError> {
    Err(OpenLinkError::UnsupportedPlatform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_style_links_pass() {
        let url = validate_link("https://openrouter.ai").unwrap();
        assert_eq!(url.host_str(), Some("openrouter.ai"));
        assert!(validate_link("http://localhost:8080/docs").is_ok());
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert!(matches!(
            validate_link("file:///etc/passwd"),
            Err(OpenLinkError::UnsupportedScheme { scheme }) if scheme == "file"
        ));
        assert!(matches!(
            validate_link("javascript:alert(1)"),
            Err(OpenLinkError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_credentials_rejected() {
        assert!(matches!(
            validate_link("https://user:pw@example.com"),
            Err(OpenLinkError::Credentials)
        ));
        assert!(matches!(
            validate_link("https://user@example.com"),
            Err(OpenLinkError::Credentials)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        let err = validate_link("not a url").unwrap_err();
        assert!(matches!(err, OpenLinkError::Invalid { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_open_link_rejects_before_spawning() {
        assert!(matches!(
            open_link("ftp://example.com"),
            Err(OpenLinkError::UnsupportedScheme { .. })
        ));
    }
}
