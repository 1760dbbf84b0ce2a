//! Grouping of change records for display.

use super::record::{ChangeAction, ChangeRecord};

/// Preview records split into new and modified files.
#[derive(Debug, Clone, Default)]
pub struct PreviewReport<'a> {
    /// Files that will be created, in input order.
    pub created: Vec<&'a ChangeRecord>,
    /// Files that will be overwritten, in input order.
    pub modified: Vec<&'a ChangeRecord>,
}

impl<'a> PreviewReport<'a> {
    /// Groups `records` by action.
    #[must_use]
    pub fn group(records: &'a [ChangeRecord]) -> Self {
        let (created, modified) = records
            .iter()
            .partition(|record| record.action == ChangeAction::Create);
        Self { created, modified }
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.created.len() + self.modified.len()
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
