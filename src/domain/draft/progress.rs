//! DraftProgress value object - resumable progress of a draft.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// `{current, total, percentage}` where `percentage = round(current / total * 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftProgress {
    pub current: usize,
    pub total: usize,
    pub percentage: Percentage,
}

impl DraftProgress {
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            percentage: Percentage::from_ratio(current, total),
        }
    }

    /// True once every item has an answer.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.current)
    }
}
