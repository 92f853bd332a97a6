//! Property tests for description truncation

use bookfinder_core::view::truncate_chars;
use bookfinder_core::{Book, CardStyle, CardView, Description};
use proptest::prelude::*;

proptest! {
    #[test]
    fn truncated_text_is_a_char_prefix(text in "\\PC{0,600}", limit in 0usize..500) {
        match truncate_chars(&text, limit) {
            Some(short) => {
                prop_assert_eq!(short.chars().count(), limit);
                prop_assert!(text.starts_with(short));
                prop_assert!(text.chars().count() > limit);
            }
            None => prop_assert!(text.chars().count() <= limit),
        }
    }

    #[test]
    fn detailed_card_keeps_full_text(text in "[a-zA-Zéü ]{1,900}") {
        let card = CardView::new(&Book::new("t", "a").with_description(text.clone()), 0, CardStyle::Detailed);
        prop_assert_eq!(card.description.visible_text(true), text.clone());
        match &card.description {
            Description::Expandable { short, .. } => {
                prop_assert!(text.chars().count() > 400);
                prop_assert_eq!(short.chars().count(), 400);
            }
            Description::Plain(_) => prop_assert!(text.chars().count() <= 400),
        }
    }

    #[test]
    fn compact_card_never_expands(text in "[a-z ]{1,300}") {
        let card = CardView::new(&Book::new("t", "a").with_description(text), 0, CardStyle::Compact);
        prop_assert!(!card.description.is_expandable());
        prop_assert!(card.description.visible_text(false).chars().count() <= 103);
    }
}
