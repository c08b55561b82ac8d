//! Selection within the entries of the current page.

/// Trait for types that support list-style navigation.
pub trait ListNavigator {
    /// Get the currently selected index.
    fn selected(&self) -> usize;

    /// Set the selected index.
    fn set_selected(&mut self, index: usize);

    /// Get the maximum valid index (item count - 1, or 0 if empty).
    fn max_index(&self) -> usize;

    /// Move selection up by one item.
    fn move_up(&mut self) {
        let current = self.selected();
        self.set_selected(current.saturating_sub(1));
    }

    /// Move selection down by one item.
    fn move_down(&mut self) {
        let current = self.selected();
        let max = self.max_index();
        self.set_selected((current + 1).min(max));
    }

    /// Jump to the first item.
    fn jump_to_top(&mut self) {
        self.set_selected(0);
    }
}

/// Index-based selection over a list of `count` items.
#[derive(Debug, Clone, Default)]
pub struct SimpleListNav {
    selected: usize,
    count: usize,
}

impl SimpleListNav {
    /// Update the item count, clamping selection if necessary.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.selected > self.max_index() {
            self.selected = self.max_index();
        }
    }

    /// Selected index, or `None` when the list is empty.
    pub fn selection(&self) -> Option<usize> {
        (self.count > 0).then_some(self.selected)
    }
}

impl ListNavigator for SimpleListNav {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index.min(self.max_index());
    }

    fn max_index(&self) -> usize {
        self.count.saturating_sub(1)
    }
}
