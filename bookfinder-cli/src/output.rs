//! Plain-text rendering of book cards

use bookfinder_core::{CardView, Description, Poster, ViewState};

/// Print cards separated by blank lines
pub fn print_cards(cards: &[CardView], view: Option<&ViewState>) {
    for card in cards {
        let expanded = view.map(|v| v.is_expanded(card.index)).unwrap_or(false);
        println!("{}\n", format_card(card, expanded));
    }
}

/// One card as an indented text block
pub fn format_card(card: &CardView, expanded: bool) -> String {
    let mut lines = vec![
        format!("[{}] {}", card.index + 1, card.title),
        format!("    {}", card.byline),
        format!("    {}", card.meta),
    ];

    if let Some(badge) = &card.score_badge {
        lines.push(format!("    {}", badge));
    }

    lines.push(format!("    {}", card.description.visible_text(expanded)));
    if matches!(card.description, Description::Expandable { .. }) && !expanded {
        lines.push("    (use --full to show more)".to_string());
    }

    match &card.poster {
        Poster::Image { url } => lines.push(format!("    Cover: {}", url)),
        Poster::Placeholder => lines.push("    Cover: No Cover".to_string()),
    }

    if let Some(url) = &card.details_url {
        lines.push(format!("    {}: {}", card.style.link_label(), url));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookfinder_core::{Book, CardStyle};

    #[test]
    fn test_format_minimal_card() {
        let card = CardView::new(&Book::new("Dune", "Frank Herbert"), 0, CardStyle::Detailed);
        let text = format_card(&card, false);
        assert!(text.starts_with("[1] Dune"));
        assert!(text.contains("by Frank Herbert"));
        assert!(text.contains("Unknown Year • ISBN: "));
        assert!(text.contains("No description available."));
        assert!(text.contains("Cover: No Cover"));
        assert!(!text.contains("Match:"));
    }

    #[test]
    fn test_format_truncated_card() {
        let book = Book::new("t", "a")
            .with_description("x".repeat(450))
            .with_book_url("https://books.example/t");
        let card = CardView::new(&book, 1, CardStyle::Detailed);

        let collapsed = format_card(&card, false);
        assert!(collapsed.contains("--full"));
        assert!(!collapsed.contains(&"x".repeat(401)));
        assert!(collapsed.contains("More Details: https://books.example/t"));

        let expanded = format_card(&card, true);
        assert!(expanded.contains(&"x".repeat(450)));
        assert!(!expanded.contains("--full"));
    }
}
