//! Expense split allocation.
//!
//! [`distribute`] turns an expense total into per-participant owed
//! amounts under one of three methods, and always returns amounts that
//! sum exactly to the total: integer division leftovers are
//! redistributed, never lost.

use uuid::Uuid;

use crate::{AllocatedShare, EngineError, ResultEngine, ShareWeight};

/// How an expense total is divided among participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMethod {
    Equal,
    Ratio,
    Fixed,
}

impl SplitMethod {
    /// Returns the canonical method tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Ratio => "ratio",
            Self::Fixed => "fixed",
        }
    }
}

/// Splits `amount_minor` among `shares` according to `method`.
///
/// The returned list has one entry per input participant, in input
/// order, and the owed amounts sum exactly to `amount_minor`.
///
/// Leftover placement after integer division:
/// - `Equal`: the payer absorbs the whole leftover when `payer_id` is
///   given (an unmatched id degrades to the first participant); without
///   a payer, leftover units go round-robin starting from the first
///   participant.
/// - `Ratio`: the first participants, in input order, each take one
///   leftover unit. Reordering an otherwise identical input moves the
///   leftover with it.
/// - `Fixed`: when the stated amounts do not add up to the total, the
///   whole signed difference lands on the payer, or on the first
///   participant when no payer matches. Callers that prefer to reject
///   such input call [`validate_fixed`] first.
///
/// # Examples
///
/// ```rust
/// use engine::{ShareWeight, SplitMethod, distribute};
/// use uuid::Uuid;
///
/// let shares = vec![
///     ShareWeight::new(Uuid::new_v4()),
///     ShareWeight::new(Uuid::new_v4()),
///     ShareWeight::new(Uuid::new_v4()),
/// ];
///
/// let result = distribute(100, &shares, SplitMethod::Equal, None).unwrap();
/// let owed: Vec<i64> = result.iter().map(|s| s.amount_owed_minor).collect();
/// assert_eq!(owed, vec![34, 33, 33]);
/// ```
pub fn distribute(
    amount_minor: i64,
    shares: &[ShareWeight],
    method: SplitMethod,
    payer_id: Option<Uuid>,
) -> ResultEngine<Vec<AllocatedShare>> {
    if shares.is_empty() {
        return Err(EngineError::InvalidSplit(
            "at least one participant is required".to_string(),
        ));
    }
    if amount_minor < 0 {
        return Err(EngineError::InvalidAmount(format!(
            "amount must not be negative, got {amount_minor}"
        )));
    }

    let result = match method {
        SplitMethod::Equal => equal_shares(amount_minor, shares, payer_id),
        SplitMethod::Ratio => ratio_shares(amount_minor, shares),
        SplitMethod::Fixed => fixed_shares(amount_minor, shares, payer_id),
    };

    Ok(result)
}

/// Checks that the stated fixed amounts add up to the expense total.
///
/// [`distribute`] silently moves any difference onto the payer; callers
/// that want to reject inconsistent fixed input instead run this check
/// first.
pub fn validate_fixed(amount_minor: i64, shares: &[ShareWeight]) -> ResultEngine<()> {
    let total: i64 = shares.iter().map(|s| s.fixed_minor).sum();
    if total != amount_minor {
        return Err(EngineError::InvalidSplit(format!(
            "fixed amounts sum to {total}, expected {amount_minor}"
        )));
    }
    Ok(())
}

fn payer_index(shares: &[ShareWeight], payer_id: Option<Uuid>) -> Option<usize> {
    let payer_id = payer_id?;
    shares.iter().position(|s| s.user_id == payer_id)
}

fn equal_shares(
    amount_minor: i64,
    shares: &[ShareWeight],
    payer_id: Option<Uuid>,
) -> Vec<AllocatedShare> {
    let n = shares.len() as i64;
    let base = amount_minor / n;
    let mut result: Vec<AllocatedShare> = shares
        .iter()
        .map(|s| AllocatedShare {
            user_id: s.user_id,
            amount_owed_minor: base,
        })
        .collect();

    let remainder = amount_minor - base * n;
    if payer_id.is_some() {
        // An unmatched payer id degrades to the first participant.
        let idx = payer_index(shares, payer_id).unwrap_or(0);
        result[idx].amount_owed_minor += remainder;
    } else {
        // remainder < n by construction; the wrap keeps the sum intact
        // even if it is not.
        for i in 0..remainder {
            result[(i % n) as usize].amount_owed_minor += 1;
        }
    }

    result
}

fn ratio_shares(amount_minor: i64, shares: &[ShareWeight]) -> Vec<AllocatedShare> {
    let sum_ratio: u128 = shares.iter().map(|s| u128::from(s.ratio)).sum();
    // A zero weight total would divide by zero; every participant then
    // gets a zero proportional share and the leftover loop repairs the
    // sum.
    let sum_ratio = if sum_ratio == 0 { 1 } else { sum_ratio };

    let mut allocated: i64 = 0;
    let mut result: Vec<AllocatedShare> = shares
        .iter()
        .map(|s| {
            let owed = (u128::from(s.ratio) * amount_minor as u128 / sum_ratio) as i64;
            allocated += owed;
            AllocatedShare {
                user_id: s.user_id,
                amount_owed_minor: owed,
            }
        })
        .collect();

    let n = shares.len() as i64;
    let remainder = amount_minor - allocated;
    for i in 0..remainder {
        result[(i % n) as usize].amount_owed_minor += 1;
    }

    result
}

fn fixed_shares(
    amount_minor: i64,
    shares: &[ShareWeight],
    payer_id: Option<Uuid>,
) -> Vec<AllocatedShare> {
    let mut result: Vec<AllocatedShare> = shares
        .iter()
        .map(|s| AllocatedShare {
            user_id: s.user_id,
            amount_owed_minor: s.fixed_minor,
        })
        .collect();

    let total: i64 = result.iter().map(|r| r.amount_owed_minor).sum();
    let diff = amount_minor - total;
    if diff != 0 {
        let idx = payer_index(shares, payer_id).unwrap_or(0);
        result[idx].amount_owed_minor += diff;
    }

    result
}
