//! View model for book cards
//!
//! A [`CardView`] is everything a renderer needs to draw one card, already
//! decided: fallbacks applied, description truncated, labels chosen. HTML
//! and plain-text renderers both work from it.

mod card;
mod state;

pub use card::{
    truncate_chars, CardStyle, CardView, Description, Poster, DESCRIPTION_PLACEHOLDER,
    NO_COVER_IMAGE_URL, UNKNOWN_YEAR,
};
pub use state::{CardState, ViewState};
