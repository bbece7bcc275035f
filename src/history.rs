// Single-level undo history

/// Holds at most one previous value.
///
/// Recording overwrites whatever was stored. Restoring hands the value back and
/// empties the slot, so a second restore in a row yields `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndoSlot<T: Copy> {
    slot: Option<T>,
}

impl<T: Copy> UndoSlot<T> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Stores `value`, replacing any earlier entry.
    pub fn record(&mut self, value: T) {
        self.slot = Some(value);
    }

    /// Returns the stored value without consuming it.
    pub fn previous(&self) -> Option<T> {
        self.slot
    }

    /// Takes the stored value, leaving the slot empty.
    pub fn restore(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// True when there is nothing to restore.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

impl<T: Copy> Default for UndoSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_only_the_latest_value() {
        let mut slot = UndoSlot::new();
        assert!(slot.is_empty());
        slot.record(1);
        slot.record(2);
        assert_eq!(slot.previous(), Some(2));
        assert_eq!(slot.restore(), Some(2));
        assert_eq!(slot.restore(), None);
        assert!(slot.is_empty());
    }
}
