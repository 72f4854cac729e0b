//! Fixed-destination navigation and search submission.
//!
//! Nothing here routes: each destination is a constant path on the board's
//! website. Navigating either opens the resolved URL in the system browser or
//! just reports it, depending on `open_links`.
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Invalid site URL: {0}")]
    BadSiteUrl(#[from] url::ParseError),

    #[error("Failed to open browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Pages reachable from the board's header buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    NewTopic,
    Login,
    Signup,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::NewTopic => "/new-discussion",
            Self::Login => "/login",
            Self::Signup => "/register",
        }
    }
}

/// What `navigate` did with the resolved URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Opened(Url),
    Shown(Url),
}

/// Resolve a destination against the site's base URL.
pub fn resolve(site_url: &str, dest: Destination) -> Result<Url, NavigationError> {
    Ok(Url::parse(site_url)?.join(dest.path())?)
}

pub fn navigate(
    site_url: &str,
    dest: Destination,
    open_links: bool,
) -> Result<Navigation, NavigationError> {
    let url = resolve(site_url, dest)?;
    tracing::info!(url = %url, ?dest, open_links, "Navigating");
    if open_links {
        open::that(url.as_str())?;
        Ok(Navigation::Opened(url))
    } else {
        Ok(Navigation::Shown(url))
    }
}

/// Submit a search query. Empty input is ignored.
///
/// Search has no backend yet; the query is only logged. Returns the query
/// when it was accepted.
pub fn submit_search(query: &str) -> Option<&str> {
    if query.is_empty() {
        return None;
    }
    tracing::info!(query = %query, "Search submitted");
    Some(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_paths() {
        let url = resolve("http://localhost:5000", Destination::Signup).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/register");
    }

    #[test]
    fn test_resolve_replaces_base_path() {
        let url = resolve("https://example.com/board/", Destination::NewTopic).unwrap();
        assert_eq!(url.as_str(), "https://example.com/new-discussion");
    }

    #[test]
    fn test_bad_site_url_is_error() {
        let err = resolve("not a url", Destination::Login).unwrap_err();
        assert!(matches!(err, NavigationError::BadSiteUrl(_)));
    }

    #[test]
    fn test_navigate_without_opening_shows_url() {
        let nav = navigate("http://localhost:5000", Destination::Login, false).unwrap();
        assert_eq!(
            nav,
            Navigation::Shown(Url::parse("http://localhost:5000/login").unwrap())
        );
    }

    #[test]
    fn test_empty_search_is_ignored() {
        assert_eq!(submit_search(""), None);
        assert_eq!(submit_search("ubi"), Some("ubi"));
    }
}
