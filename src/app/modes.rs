//! Search mode, page size, and session phase types.
//!
//! These enums are the discrete state of the search session:
//!
//! - [`SearchMode`]: which search service operation the next dispatch uses
//! - [`PageSize`]: the semantic-mode page size selection, including `All`
//! - [`SessionPhase`]: the request lifecycle (`Idle` → `Searching` → `Ready`)
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::{PageSize, SearchMode, SessionPhase};
//!
//! let mode: SearchMode = "semantic".parse().unwrap();
//! assert_eq!(mode, SearchMode::Semantic);
//! assert_eq!(PageSize::All.resolve(37), 37);
//! assert_eq!(SessionPhase::default(), SessionPhase::Idle);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which search service operation future searches use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Literal match against title, division, and family fields. No score.
    #[default]
    Exact,

    /// Ranked match bounded by a requested limit. Each record carries a
    /// similarity score.
    Semantic,
}

impl SearchMode {
    /// Display label used by the search bar tabs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "Exact Match",
            Self::Semantic => "Semantic Search",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Semantic => f.write_str("semantic"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "semantic" => Ok(Self::Semantic),
            other => Err(format!("unknown search mode '{other}' (expected exact or semantic)")),
        }
    }
}

/// Page size selection for semantic mode.
///
/// `All` is symbolic. It never stores a result count; the numeric page size is
/// resolved from the live result length every time pagination is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageSize {
    #[default]
    Ten,
    Fifty,
    Hundred,
    FiveHundred,
    All,
}

impl PageSize {
    /// Every selectable page size, in display order.
    pub const OPTIONS: [Self; 5] = [Self::Ten, Self::Fifty, Self::Hundred, Self::FiveHundred, Self::All];

    /// Returns the fixed number of rows, or `None` for `All`.
    #[must_use]
    pub const fn fixed(self) -> Option<usize> {
        match self {
            Self::Ten => Some(10),
            Self::Fifty => Some(50),
            Self::Hundred => Some(100),
            Self::FiveHundred => Some(500),
            Self::All => None,
        }
    }

    /// Resolves to a numeric page size against a live item count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ncosearch::app::PageSize;
    ///
    /// assert_eq!(PageSize::Fifty.resolve(3), 50);
    /// assert_eq!(PageSize::All.resolve(3), 3);
    /// assert_eq!(PageSize::All.resolve(0), 0);
    /// ```
    #[must_use]
    pub const fn resolve(self, item_count: usize) -> usize {
        match self.fixed() {
            Some(size) => size,
            None => item_count,
        }
    }

    /// Label shown in the page size selector.
    #[must_use]
    pub fn label(self) -> String {
        self.fixed().map_or_else(|| "All".to_string(), |size| size.to_string())
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "10" => Ok(Self::Ten),
            "50" => Ok(Self::Fifty),
            "100" => Ok(Self::Hundred),
            "500" => Ok(Self::FiveHundred),
            "all" => Ok(Self::All),
            other => Err(format!("unsupported page size '{other}' (expected 10, 50, 100, 500 or all)")),
        }
    }
}

impl TryFrom<String> for PageSize {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageSize> for String {
    fn from(size: PageSize) -> Self {
        size.label().to_ascii_lowercase()
    }
}

/// Request lifecycle of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No search has been dispatched yet.
    #[default]
    Idle,

    /// A search is in flight. Further dispatches are dropped.
    Searching,

    /// The last search settled, successfully or not.
    Ready,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_parses_all_options() {
        for option in PageSize::OPTIONS {
            let parsed: PageSize = option.label().parse().unwrap();
            assert_eq!(parsed, option);
        }
        assert!("25".parse::<PageSize>().is_err());
    }

    #[test]
    fn all_follows_item_count() {
        assert_eq!(PageSize::All.resolve(25), 25);
        assert_eq!(PageSize::All.resolve(7), 7);
        assert_eq!(PageSize::Hundred.resolve(7), 100);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Semantic".parse::<SearchMode>().unwrap(), SearchMode::Semantic);
        assert_eq!(" exact ".parse::<SearchMode>().unwrap(), SearchMode::Exact);
        assert!("fuzzy".parse::<SearchMode>().is_err());
    }

    #[test]
    fn page_size_round_trips_through_toml_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            size: PageSize,
        }
        let wrapper: Wrapper = toml::from_str("size = \"all\"").unwrap();
        assert_eq!(wrapper.size, PageSize::All);
    }
}
