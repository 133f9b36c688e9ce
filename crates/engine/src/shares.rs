use uuid::Uuid;

/// Per-participant weight input for a split.
///
/// Only the field matching the chosen [`SplitMethod`] is consulted:
/// `ratio` for proportional splits, `fixed_minor` for fixed splits. The
/// other field is carried but ignored.
///
/// [`SplitMethod`]: crate::SplitMethod
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareWeight {
    pub user_id: Uuid,
    /// Relative weight for proportional splits.
    pub ratio: u64,
    /// Stated owed amount in minor units for fixed splits.
    pub fixed_minor: i64,
}

impl ShareWeight {
    /// Weight for an equal split (ratio 1, no fixed amount).
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            ratio: 1,
            fixed_minor: 0,
        }
    }

    /// Weight for a proportional split.
    #[must_use]
    pub fn with_ratio(user_id: Uuid, ratio: u64) -> Self {
        Self {
            user_id,
            ratio,
            fixed_minor: 0,
        }
    }

    /// Weight for a fixed split.
    #[must_use]
    pub fn with_fixed(user_id: Uuid, fixed_minor: i64) -> Self {
        Self {
            user_id,
            ratio: 1,
            fixed_minor,
        }
    }
}

/// One participant's computed share of an expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocatedShare {
    pub user_id: Uuid,
    pub amount_owed_minor: i64,
}
