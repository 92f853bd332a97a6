//! The search UI controller
//!
//! [`SearchClient`] owns all UI state of one client: the current mode, the
//! search input, the loading indicator, the results area and the random-books
//! panel. Renderers read it; user actions mutate it through its methods.
//!
//! A search is split into [`SearchClient::begin_search`] and
//! [`SearchClient::complete_search`] so callers can release their hold on the
//! client while the request is in flight. Every search gets a sequence
//! number and only the latest one may write to the results area.

use crate::api::{ApiResult, BookApi};
use crate::request::SearchRequest;
use crate::types::{Book, Mode};
use crate::view::{CardStyle, CardView, ViewState};
use std::sync::Arc;

/// Contents of the results area
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsArea {
    /// Nothing rendered (initial state, or cleared while a search runs)
    Idle,
    /// One card per book
    Cards { books: Vec<Book>, view: ViewState },
    /// The search returned no books
    Empty,
    /// The search failed; `message` is the underlying error text
    Failed { message: String },
}

/// State of the random-books panel
#[derive(Debug, Clone, PartialEq)]
pub enum RandomPanel {
    Hidden,
    Visible(Vec<Book>),
}

/// A search that has been issued but not completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub request: SearchRequest,
}

/// UI controller for one client session
pub struct SearchClient {
    api: Arc<dyn BookApi>,
    mode: Mode,
    input: String,
    loading: bool,
    results: ResultsArea,
    random: RandomPanel,
    latest_seq: u64,
}

impl SearchClient {
    /// A fresh client in recommend mode with nothing rendered
    pub fn new(api: Arc<dyn BookApi>) -> Self {
        Self {
            api,
            mode: Mode::default(),
            input: String::new(),
            loading: false,
            results: ResultsArea::Idle,
            random: RandomPanel::Hidden,
            latest_seq: 0,
        }
    }

    /// The backend this client talks to
    pub fn api(&self) -> Arc<dyn BookApi> {
        Arc::clone(&self.api)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the search mode
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "mode changed");
        }
        self.mode = mode;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the search input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the loading indicator is shown (and the submit text hidden)
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &ResultsArea {
        &self.results
    }

    pub fn random_panel(&self) -> &RandomPanel {
        &self.random
    }

    /// Start a search from the current input and mode.
    ///
    /// Returns `None` and leaves the UI untouched when the input is blank.
    /// Otherwise the results area is cleared, the loading indicator shown, and
    /// the returned request must be completed with [`Self::complete_search`].
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        let request = SearchRequest::new(self.mode, &self.input)?;

        self.latest_seq += 1;
        self.loading = true;
        self.results = ResultsArea::Idle;

        tracing::debug!(seq = self.latest_seq, target = %request.target(), "search issued");
        Some(PendingSearch {
            seq: self.latest_seq,
            request,
        })
    }

    /// Apply the outcome of search `seq`.
    ///
    /// Returns `false` if a newer search has been issued since, in which case
    /// the outcome is dropped and nothing changes.
    pub fn complete_search(&mut self, seq: u64, outcome: ApiResult<Vec<Book>>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale search response");
            return false;
        }

        self.results = match outcome {
            Ok(books) if books.is_empty() => ResultsArea::Empty,
            Ok(books) => {
                tracing::debug!(seq, count = books.len(), "search completed");
                let view = ViewState::collapsed(books.len());
                ResultsArea::Cards { books, view }
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "search failed");
                ResultsArea::Failed {
                    message: e.to_string(),
                }
            }
        };
        self.loading = false;
        true
    }

    /// Run a complete search against the backend. Blank input is a no-op.
    pub async fn perform_search(&mut self) {
        let Some(pending) = self.begin_search() else {
            return;
        };
        let outcome = self.api.run_search(&pending.request).await;
        self.complete_search(pending.seq, outcome);
    }

    /// Cards currently in the results area
    pub fn result_cards(&self) -> Vec<CardView> {
        match &self.results {
            ResultsArea::Cards { books, .. } => CardView::list(books, CardStyle::Detailed),
            _ => Vec::new(),
        }
    }

    /// View state of the results area, if it holds cards
    pub fn view_state(&self) -> Option<&ViewState> {
        match &self.results {
            ResultsArea::Cards { view, .. } => Some(view),
            _ => None,
        }
    }

    /// Flip the description of card `index` between short and full text.
    ///
    /// Returns the new expansion state, or `None` if there is no such card or
    /// its description is not truncated.
    pub fn toggle_description(&mut self, index: usize) -> Option<bool> {
        let ResultsArea::Cards { books, view } = &mut self.results else {
            return None;
        };
        let book = books.get(index)?;
        if !CardView::new(book, index, CardStyle::Detailed)
            .description
            .is_expandable()
        {
            return None;
        }
        view.toggle(index)
    }

    /// Show the full description on every result card
    pub fn expand_all_descriptions(&mut self) {
        if let ResultsArea::Cards { view, .. } = &mut self.results {
            view.expand_all();
        }
    }

    /// Details callback for a clicked card. Only logs the selection.
    pub fn open_details(&self, index: usize) -> Option<&Book> {
        let ResultsArea::Cards { books, .. } = &self.results else {
            return None;
        };
        let book = books.get(index)?;
        tracing::info!(
            index,
            title = %book.title,
            isbn = book.isbn.as_deref().unwrap_or_default(),
            "book selected"
        );
        Some(book)
    }

    /// Fetch the random-books selection and update the panel
    pub async fn load_random_books(&mut self) {
        let outcome = self.api.random_books().await;
        self.apply_random_books(outcome);
    }

    /// Update the random-books panel. Failures keep it hidden and are only logged.
    pub fn apply_random_books(&mut self, outcome: ApiResult<Vec<Book>>) {
        self.random = match outcome {
            Ok(books) if !books.is_empty() => RandomPanel::Visible(books),
            Ok(_) => RandomPanel::Hidden,
            Err(e) => {
                tracing::warn!(error = %e, "could not load random books");
                RandomPanel::Hidden
            }
        };
    }
}
