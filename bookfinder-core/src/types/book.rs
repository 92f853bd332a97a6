//! The Book record returned by the search backend

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A book as returned by `/recommend`, `/search`, `/random-books` and `/books/{isbn}`
///
/// The client never mutates a book; it only decides how each field is shown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Book title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Author name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,

    /// Publication year, a number or free text depending on the source row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,

    /// ISBN, shown verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,

    /// Relevance in [0, 1], only present on search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Outbound link to the book's page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_url: Option<String>,
}

impl Book {
    /// Create a book with the fields every card needs
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Set the publication year
    pub fn with_year(mut self, year: impl Into<Year>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Set the ISBN
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the cover image URL
    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    /// Set the match score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the outbound details link
    pub fn with_book_url(mut self, url: impl Into<String>) -> Self {
        self.book_url = Some(url.into());
        self
    }

    /// The year to display, or `None` when the record has no usable year
    pub fn year_label(&self) -> Option<String> {
        self.year.as_ref().and_then(Year::label)
    }

    /// The description to display, or `None` when absent or empty
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Score as a whole percentage, rounded half away from zero. A score of
    /// exactly 0 counts as absent, the same way a year of 0 does.
    pub fn score_percent(&self) -> Option<i64> {
        self.score
            .filter(|s| *s != 0.0)
            .map(|s| (s * 100.0).round() as i64)
    }
}

/// Publication year as sent by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
#[serde(from = "RawYear")]
pub enum Year {
    Number(i64),
    Text(String),
}

impl Year {
    /// Display text, `None` for values that mean "unknown" (0, empty)
    pub fn label(&self) -> Option<String> {
        match self {
            Year::Number(0) => None,
            Year::Number(n) => Some(n.to_string()),
            Year::Text(t) if t.trim().is_empty() => None,
            Year::Text(t) => Some(t.clone()),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for Year {
    fn from(n: i64) -> Self {
        Year::Number(n)
    }
}

impl From<i32> for Year {
    fn from(n: i32) -> Self {
        Year::Number(n.into())
    }
}

impl From<&str> for Year {
    fn from(s: &str) -> Self {
        Year::Text(s.to_string())
    }
}

impl From<String> for Year {
    fn from(s: String) -> Self {
        Year::Text(s)
    }
}

// pandas exports integer columns with gaps as floats (2004.0)
#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawYear> for Year {
    fn from(raw: RawYear) -> Self {
        match raw {
            RawYear::Int(n) => Year::Number(n),
            RawYear::Float(f) if f.fract() == 0.0 => Year::Number(f as i64),
            RawYear::Float(f) => Year::Text(f.to_string()),
            RawYear::Text(t) => Year::Text(t),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "title": "Dune",
            "author": "Frank Herbert",
            "year": 1965,
            "isbn": "9780441013593",
            "description": "Spice.",
            "poster_url": "https://covers.example/dune.jpg",
            "score": 0.873,
            "book_url": "https://books.example/dune"
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, Some(Year::Number(1965)));
        assert_eq!(book.score_percent(), Some(87));
        assert_eq!(book.book_url.as_deref(), Some("https://books.example/dune"));
    }

    #[test]
    fn test_deserialize_keyword_search_record() {
        // /search only returns these three columns
        let json = r#"{"isbn": "123", "title": "A Game of Thrones", "author": "George R. R. Martin"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.year, None);
        assert_eq!(book.description, None);
        assert_eq!(book.poster_url, None);
        assert_eq!(book.score, None);
    }

    #[test]
    fn test_null_fields() {
        let json = r#"{"title": null, "author": "Anon", "year": null, "description": null}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.title, "");
        assert_eq!(book.year_label(), None);
        assert_eq!(book.description_text(), None);
    }

    #[test]
    fn test_year_variants() {
        let book: Book = serde_json::from_str(r#"{"title": "t", "author": "a", "year": "c. 1850"}"#).unwrap();
        assert_eq!(book.year_label().as_deref(), Some("c. 1850"));

        let book: Book = serde_json::from_str(r#"{"title": "t", "author": "a", "year": 2004.0}"#).unwrap();
        assert_eq!(book.year, Some(Year::Number(2004)));

        assert_eq!(Year::Number(0).label(), None);
        assert_eq!(Year::Text("  ".into()).label(), None);
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let book = Book::new("t", "a").with_description("");
        assert_eq!(book.description_text(), None);
    }

    #[test]
    fn test_score_rounding() {
        assert_eq!(Book::new("t", "a").with_score(0.875).score_percent(), Some(88));
        assert_eq!(Book::new("t", "a").with_score(0.0).score_percent(), None);
        assert_eq!(Book::new("t", "a").with_score(0.001).score_percent(), Some(0));
        assert_eq!(Book::new("t", "a").with_score(1.0).score_percent(), Some(100));
        assert_eq!(Book::new("t", "a").score_percent(), None);
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Serialization Test", "Someone").with_year(1999);
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
