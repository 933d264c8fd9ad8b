use crate::error::HistoryError;

/// Undo/redo stacks of saved game states.
///
/// Recording a new state discards the redo stack. `undo` and `redo` take the
/// state being left so it can be returned to later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    past: Vec<T>,
    future: Vec<T>,
}

impl<T> History<T> {
    pub fn new() -> Self {
        History {
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    /// Save `state`, typically the one just before a move is applied.
    pub fn record(&mut self, state: T) {
        self.past.push(state);
        self.future.clear();
    }

    pub fn undo(&mut self, current: T) -> Result<T, HistoryError> {
        let previous = self.past.pop().ok_or(HistoryError::NothingToUndo)?;
        self.future.push(current);
        Ok(previous)
    }

    pub fn redo(&mut self, current: T) -> Result<T, HistoryError> {
        let next = self.future.pop().ok_or(HistoryError::NothingToRedo)?;
        self.past.push(current);
        Ok(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
