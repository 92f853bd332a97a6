//! HTML rendering of the search UI with maud
//!
//! Fragment functions here match the server's swap targets one to one:
//! `search_bar` replaces `#search-bar`, `results` fills `#results-container`,
//! `description` replaces a single `.book-description`, `random_list` fills
//! `#random-books-list`.

use crate::client::{RandomPanel, ResultsArea, SearchClient};
use crate::types::Mode;
use crate::view::{CardStyle, CardView, Description, Poster, NO_COVER_IMAGE_URL};
use maud::{html, Markup, DOCTYPE};

/// Headline of the error panel
pub const ERROR_HEADLINE: &str = "Something went wrong. Is the backend running?";

/// Text of the no-results panel
pub const EMPTY_MESSAGE: &str = "No books found. Try a different query.";

/// Full page for a new session
pub fn page(client: &SearchClient, session: &str) -> Markup {
    let hide_random = !matches!(client.random_panel(), RandomPanel::Visible(_));
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Bookfinder" }
                style { ".hidden { display: none; }" }
            }
            body data-session=(session) {
                header {
                    h1 { "Bookfinder" }
                }
                main {
                    section #random-books-section .hidden[hide_random] {
                        h2 { "Discover something new" }
                        #random-books-list { (random_list(client)) }
                    }
                    (search_bar(client))
                    #results-container { (results(client)) }
                }
                script src="/static/app.js" defer {}
            }
        }
    }
}

/// Mode selector, search input, submit button and hint line
pub fn search_bar(client: &SearchClient) -> Markup {
    let mode = client.mode();
    let loading = client.is_loading();
    html! {
        #search-bar {
            .mode-selector {
                @for m in Mode::ALL {
                    button #(format!("mode-{}", m)) .mode-btn .active[m == mode] type="button" data-mode=(m.as_str()) {
                        (m.label())
                    }
                }
            }
            .search-box {
                input #search-input type="text" autocomplete="off"
                    placeholder=(mode.placeholder()) value=(client.input());
                button #search-btn type="button" {
                    span #btn-text .hidden[loading] { "Search" }
                    span #loader .loader .hidden[!loading] {}
                }
            }
            p #search-hint { (mode.hint()) }
        }
    }
}

/// Contents of the results area
pub fn results(client: &SearchClient) -> Markup {
    html! {
        @match client.results() {
            ResultsArea::Idle => {}
            ResultsArea::Empty => { (empty_panel()) }
            ResultsArea::Failed { message } => { (error_panel(message)) }
            ResultsArea::Cards { books, view } => {
                @for card in CardView::list(books, CardStyle::Detailed) {
                    (book_card(&card, view.is_expanded(card.index)))
                }
            }
        }
    }
}

/// Contents of the random-books list (empty when the panel is hidden)
pub fn random_list(client: &SearchClient) -> Markup {
    html! {
        @if let RandomPanel::Visible(books) = client.random_panel() {
            @for card in CardView::list(books, CardStyle::Compact) {
                (book_card(&card, false))
            }
        }
    }
}

pub fn empty_panel() -> Markup {
    html! {
        .empty-state {
            p { (EMPTY_MESSAGE) }
        }
    }
}

pub fn error_panel(message: &str) -> Markup {
    html! {
        .empty-state.error-state {
            p { (ERROR_HEADLINE) }
            p.error-detail { (message) }
        }
    }
}

/// One card. Detailed cards carry `data-index` so the page script can route
/// clicks to the details callback.
pub fn book_card(card: &CardView, expanded: bool) -> Markup {
    let index = card.style.is_clickable().then_some(card.index);
    html! {
        .book-card data-index=[index] style={ "animation-delay: " (card.animation_delay_ms) "ms" } {
            @match &card.poster {
                Poster::Image { url } => {
                    .book-poster-container {
                        img.book-poster src=(url) alt="Cover"
                            onerror={ "this.onerror=null;this.src='" (NO_COVER_IMAGE_URL) "'" };
                    }
                }
                Poster::Placeholder => {
                    .book-poster-placeholder { "No Cover" }
                }
            }
            .book-info {
                .book-title { (card.title) }
                .book-author { (card.byline) }
                .book-meta { (card.meta) }
                (description(card, expanded))
                .card-footer {
                    @if let Some(badge) = &card.score_badge {
                        .book-score { (badge) }
                    }
                    @if let Some(url) = &card.details_url {
                        a.more-details-btn href=(url) target="_blank" rel="noopener" {
                            (card.style.link_label())
                        }
                    }
                }
            }
        }
    }
}

/// Description block of a card in the given expansion state
pub fn description(card: &CardView, expanded: bool) -> Markup {
    html! {
        .book-description #(format!("desc-{}", card.index)) {
            @match &card.description {
                Description::Plain(text) => { (text) }
                Description::Expandable { .. } => {
                    @if expanded {
                        span.desc-full { (card.description.visible_text(true)) }
                    } @else {
                        span.desc-short { (card.description.visible_text(false)) }
                    }
                    button.show-more-btn type="button" data-toggle=(card.index) {
                        @if expanded { "Show Less" } @else { "Show More" }
                    }
                }
            }
        }
    }
}

/// Description block of result card `index`, or `None` if there is no such card
pub fn result_description(client: &SearchClient, index: usize) -> Option<Markup> {
    let cards = client.result_cards();
    let card = cards.get(index)?;
    let expanded = client
        .view_state()
        .map(|v| v.is_expanded(index))
        .unwrap_or(false);
    Some(description(card, expanded))
}
