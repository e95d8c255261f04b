//! # Access control
//!
//! The treasury knows two kinds of privileged identity:
//!
//! ```text
//! Admin      set once by `init`; may call `withdraw_funds`
//! Investor   any address that ever held shares; may propose and vote
//! ```
//!
//! ## Storage layout
//!
//! - `DataKey::Config.admin` → `Address`: the one and only admin.
//! - `DataKey::Investor(addr)` → `bool`: registry flag, never cleared.
//!
//! ## Threat model notes
//!
//! - The admin cannot be changed after `init`.
//! - Investor status survives redeeming or transferring away every share;
//!   such an investor still passes the gate but votes with zero weight.
//! - Voting locks the voter's shares against `transfer_shares` until the
//!   latest window it voted in has closed.
//! - Execution is deliberately ungated: once a proposal has passed, any
//!   address may trigger the payout.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::DaoConfig;
use crate::Error;

// ─────────────────────────────────────────────────────────
// Investor registry
// ─────────────────────────────────────────────────────────

/// Mark `who` as an investor. Idempotent.
pub fn register_investor(env: &Env, who: &Address) {
    if !storage::is_investor(env, who) {
        storage::set_investor(env, who);
    }
}

/// Returns `true` if `who` has ever been registered as an investor.
pub fn is_investor(env: &Env, who: &Address) -> bool {
    storage::is_investor(env, who)
}

// ─────────────────────────────────────────────────────────
// Access guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

/// Assert that `caller` is the configured admin.
/// Panics with `Error::NotAdmin` on failure.
pub fn require_admin(env: &Env, config: &DaoConfig, caller: &Address) {
    if &config.admin != caller {
        fail(env, Error::NotAdmin);
    }
}

/// Assert that `caller` is a registered investor.
/// Panics with `Error::NotInvestor` on failure.
#[inline]
pub fn require_investor(env: &Env, caller: &Address) {
    if !storage::is_investor(env, caller) {
        fail(env, Error::NotInvestor);
    }
}

/// Thin wrapper so guards can abort without importing the macro.
#[inline(always)]
fn fail(env: &Env, err: Error) -> ! {
    soroban_sdk::panic_with_error!(env, err)
}
