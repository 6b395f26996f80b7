//! Multi-select state machine behind the interactive picker.
//!
//! Terminal handling lives in the binary; this module only knows keys and
//! rows, so every transition can be exercised without a TTY.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    Up,
    Down,
    Toggle,
    ToggleAll,
    Confirm,
    Interrupt,
    /// Anything else, including resizes. Causes a redraw and nothing more.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Browsing,
    Confirmed,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    names: Vec<String>,
    selected: Vec<bool>,
    cursor: usize,
    phase: SelectionPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRow<'a> {
    pub name: &'a str,
    pub selected: bool,
    pub is_cursor: bool,
}

impl SelectionState {
    /// Starts with every entry selected and the cursor on the first row.
    pub fn new(names: Vec<String>) -> Self {
        let selected = vec![true; names.len()];
        Self {
            names,
            selected,
            cursor: 0,
            phase: SelectionPhase::Browsing,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &[bool] {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    pub fn into_selected(self) -> Vec<bool> {
        self.selected
    }

    pub fn rows(&self) -> impl Iterator<Item = SelectionRow<'_>> {
        self.names
            .iter()
            .zip(&self.selected)
            .enumerate()
            .map(|(i, (name, selected))| SelectionRow {
                name,
                selected: *selected,
                is_cursor: i == self.cursor,
            })
    }

    /// Applies one key. Keys arriving after a terminal phase are ignored.
    ///
    /// Confirming with nothing selected is allowed here; the orchestrator
    /// rejects the empty selection afterwards.
    pub fn apply(&mut self, key: SelectionKey) -> SelectionPhase {
        if self.phase != SelectionPhase::Browsing {
            return self.phase;
        }

        let len = self.names.len();
        match key {
            SelectionKey::Up | SelectionKey::Down | SelectionKey::Toggle if len == 0 => {}
            SelectionKey::Up => self.cursor = (self.cursor + len - 1) % len,
            SelectionKey::Down => self.cursor = (self.cursor + 1) % len,
            SelectionKey::Toggle => self.selected[self.cursor] = !self.selected[self.cursor],
            SelectionKey::ToggleAll => {
                let any_off = self.selected.iter().any(|s| !s);
                self.selected.iter_mut().for_each(|s| *s = any_off);
            }
            SelectionKey::Confirm => self.phase = SelectionPhase::Confirmed,
            SelectionKey::Interrupt => self.phase = SelectionPhase::Aborted,
            SelectionKey::Other => {}
        }

        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(n: usize) -> SelectionState {
        SelectionState::new((0..n).map(|i| format!("skill-{i}")).collect())
    }

    #[test]
    fn starts_all_selected_on_first_row() {
        let s = state(3);
        assert_eq!(s.selected(), &[true, true, true]);
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.phase(), SelectionPhase::Browsing);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut s = state(3);
        s.apply(SelectionKey::Up);
        assert_eq!(s.cursor(), 2);
        s.apply(SelectionKey::Down);
        assert_eq!(s.cursor(), 0);
        s.apply(SelectionKey::Down);
        s.apply(SelectionKey::Down);
        s.apply(SelectionKey::Down);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn space_toggles_cursor_row_only() {
        let mut s = state(3);
        s.apply(SelectionKey::Down);
        s.apply(SelectionKey::Toggle);
        assert_eq!(s.selected(), &[true, false, true]);
        s.apply(SelectionKey::Toggle);
        assert_eq!(s.selected(), &[true, true, true]);
    }

    #[test]
    fn toggle_all_law() {
        let mut s = state(3);
        s.apply(SelectionKey::Toggle);
        assert_eq!(s.selected(), &[false, true, true]);

        s.apply(SelectionKey::ToggleAll);
        assert_eq!(s.selected(), &[true, true, true]);

        s.apply(SelectionKey::ToggleAll);
        assert_eq!(s.selected(), &[false, false, false]);

        s.apply(SelectionKey::ToggleAll);
        assert_eq!(s.selected(), &[true, true, true]);
    }

    #[test]
    fn confirm_with_empty_selection_is_allowed() {
        let mut s = state(2);
        s.apply(SelectionKey::ToggleAll);
        assert_eq!(s.apply(SelectionKey::Confirm), SelectionPhase::Confirmed);
        assert_eq!(s.selected_count(), 0);
    }

    #[test]
    fn interrupt_aborts_and_freezes_state() {
        let mut s = state(2);
        assert_eq!(s.apply(SelectionKey::Interrupt), SelectionPhase::Aborted);
        s.apply(SelectionKey::Toggle);
        s.apply(SelectionKey::Down);
        assert_eq!(s.selected(), &[true, true]);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn other_keys_change_nothing() {
        let mut s = state(2);
        let before = s.clone();
        assert_eq!(s.apply(SelectionKey::Other), SelectionPhase::Browsing);
        assert_eq!(s, before);
    }

    #[test]
    fn rows_mark_cursor() {
        let mut s = state(2);
        s.apply(SelectionKey::Down);
        s.apply(SelectionKey::Toggle);
        let rows: Vec<_> = s.rows().collect();
        assert_eq!(
            rows,
            vec![
                SelectionRow {
                    name: "skill-0",
                    selected: true,
                    is_cursor: false
                },
                SelectionRow {
                    name: "skill-1",
                    selected: false,
                    is_cursor: true
                },
            ]
        );
    }
}
