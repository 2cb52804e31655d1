//! Minimal update scripts between an old and a new list.
//!
//! Used by incremental renderers to touch only the entries that moved in
//! or out of the feed between two fetches. Matching is LCS-based over item
//! identity, then content comparison decides whether a matched entry needs
//! a redraw.

use crate::domain::Story;

/// Identity and content comparison for list entries.
pub trait DiffItem {
    /// Do both values represent the same underlying entity?
    fn same_item(&self, other: &Self) -> bool;

    /// Is the visible content identical?
    fn same_content(&self, other: &Self) -> bool;
}

impl DiffItem for Story {
    fn same_item(&self, other: &Self) -> bool {
        self.id == other.id
    }

    fn same_content(&self, other: &Self) -> bool {
        self == other
    }
}

/// One edit in an update script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate {
    /// Entry at `index` of the old list is gone.
    Removed { index: usize },
    /// Entry at `index` of the new list was not present before.
    Inserted { index: usize },
    /// Entry at `index` of the new list is the same entity with changed
    /// content.
    Changed { index: usize },
}

/// Compute the edits turning `old` into `new`, in ascending position order.
///
/// Entries matched by identity but differing in content yield `Changed`;
/// identical entries yield nothing.
pub fn diff<T: DiffItem>(old: &[T], new: &[T]) -> Vec<ListUpdate> {
    let m = old.len();
    let n = new.len();

    // lcs[i][j] holds the LCS length of old[i..] and new[j..].
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            lcs[i][j] = if old[i].same_item(&new[j]) {
                1 + lcs[i + 1][j + 1]
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut updates = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < m || j < n {
        if i < m && j < n && old[i].same_item(&new[j]) {
            if !old[i].same_content(&new[j]) {
                updates.push(ListUpdate::Changed { index: j });
            }
            i += 1;
            j += 1;
        } else if i < m && (j == n || lcs[i + 1][j] >= lcs[i][j + 1]) {
            updates.push(ListUpdate::Removed { index: i });
            i += 1;
        } else {
            updates.push(ListUpdate::Inserted { index: j });
            j += 1;
        }
    }

    updates
}
