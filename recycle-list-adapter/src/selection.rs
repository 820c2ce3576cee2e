use alloc::collections::BTreeSet;
use alloc::vec::Vec;

/// How item activation maps to selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Selection is disabled.
    #[default]
    None,
    /// At most one selected index.
    Single,
    /// Any number of selected indexes; selecting toggles membership.
    Multi,
}

/// Emitted when a call to [`SelectionController::select`] changes selection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionEvent {
    pub id: usize,
    /// The previously selected id (single mode) or the id passed to the previous `select`
    /// (multi mode).
    pub previous: Option<usize>,
    /// Whether `id` is selected after the change. Always `true` in single mode.
    pub selected: bool,
}

/// Selection bookkeeping, independent of any view.
///
/// Indexes do not need an active view to be selected: the list consults
/// [`SelectionController::is_selected`] whenever it binds a view, so selection survives
/// recycling.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionController {
    mode: SelectionMode,
    current: Option<usize>,
    selected: BTreeSet<usize>,
}

impl SelectionController {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            current: None,
            selected: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Applies a selection request for `id`.
    ///
    /// Returns `None` when nothing changed: selection is disabled, or `id` is already the
    /// selected id in single mode.
    pub fn select(&mut self, id: usize) -> Option<SelectionEvent> {
        match self.mode {
            SelectionMode::None => None,
            SelectionMode::Single => {
                if self.current == Some(id) {
                    return None;
                }
                let previous = self.current.replace(id);
                Some(SelectionEvent {
                    id,
                    previous,
                    selected: true,
                })
            }
            SelectionMode::Multi => {
                let previous = self.current.replace(id);
                let selected = if self.selected.remove(&id) {
                    false
                } else {
                    self.selected.insert(id);
                    true
                };
                Some(SelectionEvent {
                    id,
                    previous,
                    selected,
                })
            }
        }
    }

    pub fn is_selected(&self, id: usize) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => self.current == Some(id),
            SelectionMode::Multi => self.selected.contains(&id),
        }
    }

    /// The selected id in single mode, or the most recently toggled id in multi mode.
    pub fn selected_id(&self) -> Option<usize> {
        self.current
    }

    /// Every selected id, ascending.
    pub fn selected_ids(&self) -> Vec<usize> {
        match self.mode {
            SelectionMode::None => Vec::new(),
            SelectionMode::Single => self.current.into_iter().collect(),
            SelectionMode::Multi => self.selected.iter().copied().collect(),
        }
    }

    /// Deselects everything and returns the ids that were selected.
    pub fn clear(&mut self) -> Vec<usize> {
        let ids = self.selected_ids();
        self.current = None;
        self.selected.clear();
        ids
    }
}
