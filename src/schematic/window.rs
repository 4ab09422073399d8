use std::array;
use std::mem;

/// A fixed-size rolling window over the last `N` items pushed.
///
/// Slots are ordered oldest to newest. A slot is empty until enough items have been pushed, or
/// when an explicit `None` is pushed to mark a missing line past the end of the grid.
#[derive(Debug, Clone)]
pub struct LineWindow<T, const N: usize> {
    slots: [Option<T>; N],
}

impl<T, const N: usize> Default for LineWindow<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> LineWindow<T, N> {
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N > 0, "a window needs at least one slot") };
        Self {
            slots: array::from_fn(|_| None),
        }
    }

    /// Slide the window forward by one, returning whatever fell out of the oldest slot.
    pub fn push(&mut self, item: Option<T>) -> Option<T> {
        self.slots.rotate_left(1);
        mem::replace(&mut self.slots[N - 1], item)
    }

    /// The item at `position`, counted from the oldest slot.
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<&T> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    /// The most recently pushed item.
    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        self.slot(N - 1)
    }

    /// The occupied slots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }
}
