//! Search modes offered by the backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which backend search strategy a client targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Semantic search, finds books by meaning
    #[default]
    Recommend,
    /// Keyword search over title and author
    Search,
}

impl Mode {
    /// All modes in selector order
    pub const ALL: [Mode; 2] = [Mode::Recommend, Mode::Search];

    /// Backend endpoint path
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::Recommend => "/recommend",
            Mode::Search => "/search",
        }
    }

    /// Name of the query-string parameter carrying the user's text
    pub fn param_name(self) -> &'static str {
        match self {
            Mode::Recommend => "query",
            Mode::Search => "q",
        }
    }

    /// Search input placeholder
    pub fn placeholder(self) -> &'static str {
        match self {
            Mode::Recommend => {
                "Describe the book you're looking for... (e.g., 'future with AI')"
            }
            Mode::Search => "Search by title or author... (e.g., 'Game of thrones')",
        }
    }

    /// Hint line under the search bar
    pub fn hint(self) -> &'static str {
        match self {
            Mode::Recommend => "Powered by Semantic Search - Finds books by meaning",
            Mode::Search => "Powered by Keyword Search - Finds exact matches",
        }
    }

    /// Selector button label
    pub fn label(self) -> &'static str {
        match self {
            Mode::Recommend => "Recommend",
            Mode::Search => "Search",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Recommend => "recommend",
            Mode::Search => "search",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recommend" => Ok(Mode::Recommend),
            "search" => Ok(Mode::Search),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}
