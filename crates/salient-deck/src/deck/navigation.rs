use super::domain::DeckError;
use serde::Serialize;

/// Position within a deck of `len` slides. Moves clamp at both ends; there is no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideCursor {
    current: usize,
    len: usize,
}

impl SlideCursor {
    pub fn new(current: usize, len: usize) -> Result<Self, DeckError> {
        if len == 0 {
            return Err(DeckError::EmptyDeck);
        }
        if current >= len {
            return Err(DeckError::SlideOutOfRange {
                index: current,
                len,
            });
        }
        Ok(Self { current, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed cursor; `new` rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        Self {
            current: (self.current + 1).min(self.len - 1),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            current: self.current.saturating_sub(1),
            ..self
        }
    }

    pub fn jump_to(self, index: usize) -> Result<Self, DeckError> {
        Self::new(index, self.len)
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.len
    }
}
