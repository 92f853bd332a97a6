//! Card construction from a [`Book`]

use crate::types::Book;

/// Shown when a book has no description
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Shown when a book has no usable year
pub const UNKNOWN_YEAR: &str = "Unknown Year";

/// Replacement image for covers that fail to load
pub const NO_COVER_IMAGE_URL: &str = "https://via.placeholder.com/150x220?text=No+Cover";

/// The two card layouts the UI uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Search results: long description with a toggle, ISBN in the meta line
    Detailed,
    /// Random-books panel: short clipped description, year only
    Compact,
}

impl CardStyle {
    /// Descriptions longer than this many characters are truncated
    pub fn description_limit(self) -> usize {
        match self {
            CardStyle::Detailed => 400,
            CardStyle::Compact => 100,
        }
    }

    /// Per-card animation stagger
    pub fn stagger_ms(self) -> u64 {
        match self {
            CardStyle::Detailed => 50,
            CardStyle::Compact => 100,
        }
    }

    /// Label of the outbound link
    pub fn link_label(self) -> &'static str {
        match self {
            CardStyle::Detailed => "More Details",
            CardStyle::Compact => "Details",
        }
    }

    /// Whether clicking the card invokes the details callback
    pub fn is_clickable(self) -> bool {
        self == CardStyle::Detailed
    }
}

/// What goes in the poster slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    Image { url: String },
    Placeholder,
}

/// What goes in the description block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Text shown as-is
    Plain(String),
    /// Long text with a collapsed form; the toggle switches between them
    Expandable { short: String, full: String },
}

impl Description {
    pub fn is_expandable(&self) -> bool {
        matches!(self, Description::Expandable { .. })
    }

    /// Text visible in the given expansion state
    pub fn visible_text(&self, expanded: bool) -> String {
        match self {
            Description::Plain(text) => text.clone(),
            Description::Expandable { full, .. } if expanded => full.clone(),
            Description::Expandable { short, .. } => format!("{}...", short),
        }
    }
}

/// A fully resolved card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub index: usize,
    pub style: CardStyle,
    pub poster: Poster,
    pub title: String,
    /// "by {author}"
    pub byline: String,
    /// "{year} • ISBN: {isbn}" for detailed cards, the year alone for compact
    /// ones. A missing ISBN leaves the label in place with nothing after it.
    pub meta: String,
    pub description: Description,
    /// "Match: {n}%"
    pub score_badge: Option<String>,
    pub details_url: Option<String>,
    pub animation_delay_ms: u64,
}

impl CardView {
    /// Resolve the card for `book` at position `index`
    pub fn new(book: &Book, index: usize, style: CardStyle) -> Self {
        let poster = match book.poster_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => Poster::Image {
                url: url.to_string(),
            },
            None => Poster::Placeholder,
        };

        let year = book
            .year_label()
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string());
        let meta = match style {
            CardStyle::Detailed => format!(
                "{} • ISBN: {}",
                year,
                book.isbn.as_deref().unwrap_or_default()
            ),
            CardStyle::Compact => year,
        };

        let text = book.description_text().unwrap_or(DESCRIPTION_PLACEHOLDER);
        let limit = style.description_limit();
        let description = match (truncate_chars(text, limit), style) {
            (None, _) => Description::Plain(text.to_string()),
            (Some(short), CardStyle::Detailed) => Description::Expandable {
                short: short.to_string(),
                full: text.to_string(),
            },
            (Some(short), CardStyle::Compact) => Description::Plain(format!("{}...", short)),
        };

        Self {
            index,
            style,
            poster,
            title: book.title.clone(),
            byline: format!("by {}", book.author),
            meta,
            description,
            score_badge: book.score_percent().map(|p| format!("Match: {}%", p)),
            details_url: book.book_url.clone().filter(|u| !u.is_empty()),
            animation_delay_ms: index as u64 * style.stagger_ms(),
        }
    }

    /// Cards for a whole list, in order
    pub fn list(books: &[Book], style: CardStyle) -> Vec<CardView> {
        books
            .iter()
            .enumerate()
            .map(|(i, book)| CardView::new(book, i, style))
            .collect()
    }
}

/// The first `limit` characters of `text`, or `None` if it is not longer
/// than `limit`. Counts chars, so multi-byte text is never split.
pub fn truncate_chars(text: &str, limit: usize) -> Option<&str> {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => Some(&text[..byte_index]),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 3), None);
        assert_eq!(truncate_chars("abcd", 3), Some("abc"));
        assert_eq!(truncate_chars("", 0), None);
        assert_eq!(truncate_chars("héllo", 2), Some("hé"));
    }

    #[test]
    fn test_minimal_book_fallbacks() {
        let card = CardView::new(&Book::new("Dune", "Frank Herbert"), 0, CardStyle::Detailed);
        assert_eq!(card.poster, Poster::Placeholder);
        assert_eq!(card.byline, "by Frank Herbert");
        assert_eq!(card.meta, "Unknown Year • ISBN: ");
        assert_eq!(
            card.description,
            Description::Plain(DESCRIPTION_PLACEHOLDER.to_string())
        );
        assert_eq!(card.score_badge, None);
        assert_eq!(card.details_url, None);
    }

    #[test]
    fn test_full_book() {
        let book = Book::new("Dune", "Frank Herbert")
            .with_year(1965)
            .with_isbn("9780441013593")
            .with_poster_url("https://covers.example/dune.jpg")
            .with_score(0.91)
            .with_book_url("https://books.example/dune");
        let card = CardView::new(&book, 3, CardStyle::Detailed);
        assert_eq!(card.meta, "1965 • ISBN: 9780441013593");
        assert_eq!(
            card.poster,
            Poster::Image {
                url: "https://covers.example/dune.jpg".into()
            }
        );
        assert_eq!(card.score_badge.as_deref(), Some("Match: 91%"));
        assert_eq!(card.animation_delay_ms, 150);
    }

    #[test]
    fn test_zero_score_has_no_badge() {
        let book = Book::new("t", "a").with_score(0.0);
        let card = CardView::new(&book, 0, CardStyle::Detailed);
        assert_eq!(card.score_badge, None);
    }

    #[test]
    fn test_description_at_threshold_is_not_truncated() {
        let text = "x".repeat(400);
        let card = CardView::new(
            &Book::new("t", "a").with_description(text.clone()),
            0,
            CardStyle::Detailed,
        );
        assert_eq!(card.description, Description::Plain(text));
    }

    #[test]
    fn test_long_description_is_expandable() {
        let text = format!("{}y", "x".repeat(400));
        let card = CardView::new(
            &Book::new("t", "a").with_description(text.clone()),
            0,
            CardStyle::Detailed,
        );
        let Description::Expandable { short, full } = &card.description else {
            panic!("expected expandable description");
        };
        assert_eq!(short.chars().count(), 400);
        assert_eq!(full, &text);
        assert_eq!(card.description.visible_text(false), format!("{}...", "x".repeat(400)));
        assert_eq!(card.description.visible_text(true), text);
    }

    #[test]
    fn test_compact_card() {
        let text = "z".repeat(150);
        let book = Book::new("t", "a")
            .with_year(2001)
            .with_isbn("111")
            .with_description(text)
            .with_book_url("https://books.example/t");
        let card = CardView::new(&book, 2, CardStyle::Compact);
        assert_eq!(card.meta, "2001");
        assert_eq!(
            card.description,
            Description::Plain(format!("{}...", "z".repeat(100)))
        );
        assert_eq!(card.style.link_label(), "Details");
        assert!(!card.style.is_clickable());
        assert_eq!(card.animation_delay_ms, 200);
    }

    #[test]
    fn test_list_preserves_order() {
        let books = vec![Book::new("first", "a"), Book::new("second", "b")];
        let cards = CardView::list(&books, CardStyle::Detailed);
        assert_eq!(cards[0].title, "first");
        assert_eq!(cards[1].index, 1);
    }
}
