//! Per-row UI state, separated from rendering.
//!
//! `RowStates` is an arena with one slot per message in the conversation.
//! A slot holds `Some(RowState)` while the row is mounted and `None` once
//! the list has discarded it. Rows never share state: every operation
//! addresses exactly one index.

use serde::{Deserialize, Serialize};

/// Body visibility of a single row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowExpansion {
    #[default]
    Collapsed,
    Expanded,
}

impl RowExpansion {
    /// The opposite state.
    pub fn toggle(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// What happens to a row's state once it scrolls out of the materialised
/// window.
///
/// Every mount gets a fresh [`RowState::mount`] number and the row keys its
/// animations with it, so a remounted row never resumes an old transition.
/// egui keeps the superseded animation entries until the context is dropped;
/// each is a few bytes per mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Rows keep their expansion while off-screen.
    #[default]
    KeepOffscreen,
    /// Rows are unmounted when they leave the window and come back collapsed.
    ResetOffscreen,
}

/// State owned by one mounted row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    pub expansion: RowExpansion,
    /// Set on toggle; cleared by `RowStates::take_dirty`.
    pub dirty: bool,
    /// Distinguishes this mount from earlier mounts of the same row.
    pub mount: u64,
}

/// Arena of row states keyed by row index.
#[derive(Clone, Debug, Default)]
pub struct RowStates {
    rows: Vec<Option<RowState>>,
    mounts: u64,
}

impl RowStates {
    /// Create an arena for `len` rows, all unmounted.
    pub fn new(len: usize) -> Self {
        Self {
            rows: vec![None; len],
            mounts: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Grow or shrink to match the number of messages. New slots start
    /// unmounted; removed slots are dropped.
    pub fn resize(&mut self, len: usize) {
        self.rows.resize(len, None);
    }

    /// Mount a row, creating a collapsed state if it has none yet.
    pub fn mount(&mut self, index: usize) -> Option<&mut RowState> {
        let len = self.rows.len();
        let Some(slot) = self.rows.get_mut(index) else {
            tracing::warn!(index, len, "mount of out-of-range row ignored");
            return None;
        };
        if slot.is_none() {
            self.mounts += 1;
            *slot = Some(RowState {
                mount: self.mounts,
                ..RowState::default()
            });
        }
        slot.as_mut()
    }

    /// Discard a row's state. Mounting it again starts collapsed.
    pub fn unmount(&mut self, index: usize) {
        if let Some(slot) = self.rows.get_mut(index) {
            if slot.take().is_some() {
                tracing::trace!(index, "row unmounted");
            }
        }
    }

    /// Unmount every row outside `keep`.
    pub fn unmount_outside(&mut self, keep: std::ops::Range<usize>) {
        for index in 0..self.rows.len() {
            if !keep.contains(&index) {
                self.unmount(index);
            }
        }
    }

    pub fn is_mounted(&self, index: usize) -> bool {
        matches!(self.rows.get(index), Some(Some(_)))
    }

    /// Number of rows currently holding state.
    pub fn mounted_count(&self) -> usize {
        self.rows.iter().filter(|slot| slot.is_some()).count()
    }

    /// Current expansion of a row. Unmounted rows report `Collapsed`, which is
    /// the state they will have when mounted.
    pub fn expansion(&self, index: usize) -> RowExpansion {
        self.rows
            .get(index)
            .copied()
            .flatten()
            .map(|row| row.expansion)
            .unwrap_or_default()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion(index).is_expanded()
    }

    /// Flip one row between collapsed and expanded and mark it dirty.
    ///
    /// Returns the new state, or `None` for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<RowExpansion> {
        let row = self.mount(index)?;
        row.expansion = row.expansion.toggle();
        row.dirty = true;
        tracing::debug!(index, expansion = ?row.expansion, "row toggled");
        Some(row.expansion)
    }

    /// Indices of rows toggled since the last call, ascending. Clears the
    /// dirty flags.
    pub fn take_dirty(&mut self) -> Vec<usize> {
        self.rows
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Some(row) if row.dirty => {
                    row.dirty = false;
                    Some(index)
                }
                _ => None,
            })
            .collect()
    }
}
