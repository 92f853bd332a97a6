//! Per-card view state owned by the results area

/// UI state of one rendered card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    /// Full description visible instead of the truncated one
    pub expanded: bool,
}

/// View state for every card in a result list, indexed like the list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    cards: Vec<CardState>,
}

impl ViewState {
    /// All cards collapsed
    pub fn collapsed(len: usize) -> Self {
        Self {
            cards: vec![CardState::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<CardState> {
        self.cards.get(index).copied()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.get(index).map(|c| c.expanded).unwrap_or(false)
    }

    /// Flip a card's expansion, returning the new value
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let card = self.cards.get_mut(index)?;
        card.expanded = !card.expanded;
        Some(card.expanded)
    }

    /// Expand every card
    pub fn expand_all(&mut self) {
        for card in &mut self.cards {
            card.expanded = true;
        }
    }
}
