//! Page navigation surface.
//!
//! The site has a fixed set of pages; the current page is a single
//! identifier. Unknown names fall back to the home page rather than
//! erroring, matching the site's router.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The fixed set of site pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Menu,
    Gallery,
    Contact,
}

impl Page {
    /// Resolve a page name, falling back to `Home` for unknown values.
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::About => write!(f, "about"),
            Page::Menu => write!(f, "menu"),
            Page::Gallery => write!(f, "gallery"),
            Page::Contact => write!(f, "contact"),
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "menu" => Ok(Page::Menu),
            "gallery" => Ok(Page::Gallery),
            "contact" => Ok(Page::Contact),
            other => Err(format!("unknown page: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_roundtrip() {
        for page in [Page::Home, Page::About, Page::Menu, Page::Gallery, Page::Contact] {
            let s = page.to_string();
            let parsed: Page = s.parse().unwrap();
            assert_eq!(page, parsed);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_home() {
        assert_eq!(Page::resolve("checkout"), Page::Home);
        assert_eq!(Page::resolve(""), Page::Home);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(Page::resolve("Menu"), Page::Menu);
    }
}
