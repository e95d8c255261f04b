//! # Treasury arithmetic
//!
//! Checked integer helpers shared by the entry points. Every function
//! returns `None` on overflow; callers map that to `Error::Overflow`.

/// Percentage denominator used by the quorum test.
pub const PERCENT: i128 = 100;

/// `true` when `votes` is at least `quorum` percent of `total_shares`.
///
/// Evaluated as `votes * 100 >= quorum * total_shares` so that no precision
/// is lost to integer division.
pub fn meets_quorum(votes: i128, total_shares: i128, quorum: u32) -> Option<bool> {
    let lhs = votes.checked_mul(PERCENT)?;
    let rhs = i128::from(quorum).checked_mul(total_shares)?;
    Some(lhs >= rhs)
}

/// Funds paid out for burning `shares` out of `total_shares` when
/// `available` funds remain. Rounds down.
///
/// Returns `Some(0)` when no shares are outstanding.
pub fn redemption_payout(shares: i128, available: i128, total_shares: i128) -> Option<i128> {
    if total_shares == 0 {
        return Some(0);
    }
    shares.checked_mul(available)?.checked_div(total_shares)
}
