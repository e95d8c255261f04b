//! # Types
//!
//! Shared data structures used across all modules of the DAO treasury.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Proposal` is internally stored as two separate ledger entries:
//!
//! - [`ProposalConfig`]: written once at creation; never mutated.
//! - [`ProposalState`]: written on every vote and on execution.
//!
//! The public API exposes the reconstructed [`Proposal`] struct for convenience.
//!
//! ### Status is derived, not stored
//!
//! [`ProposalStatus`] is computed from the stored state and the current
//! ledger timestamp on every query:
//!
//! ```text
//! Voting ──► Passed ──► Executed
//!    └─────► BelowQuorum ──► Passed   (only if total shares shrink)
//! ```
//!
//! A proposal that never reaches quorum stays `BelowQuorum` forever; every
//! `execute_proposal` call on it is rejected.

use soroban_sdk::{contracttype, Address, String};

/// Organization parameters, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoConfig {
    /// Identity allowed to call `withdraw_funds`.
    pub admin: Address,
    /// SEP-41 token held by the treasury and paid out by it.
    pub token: Address,
    /// Ledger timestamp after which `contribute` is rejected.
    pub contribution_end: u64,
    /// Length of each proposal's voting window, in seconds.
    pub vote_duration: u64,
    /// Share of `total_shares` (percent, 0–100) that must vote for a proposal.
    pub quorum: u32,
}

/// Immutable proposal configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalConfig {
    pub id: u64,
    pub name: String,
    pub amount: i128,
    pub recipient: Address,
    pub end: u64,
}

/// Mutable proposal state, updated on votes and execution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalState {
    pub votes: i128,
    pub executed: bool,
}

/// Full on-chain representation of a disbursement proposal.
///
/// Used as the public API return type; reconstructed internally from
/// the split `ProposalConfig` + `ProposalState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential ID, starting at 0.
    pub id: u64,
    /// Free-form label supplied by the proposer.
    pub name: String,
    /// Token amount paid to `recipient` on execution.
    pub amount: i128,
    /// Address that receives `amount` on execution.
    pub recipient: Address,
    /// Sum of the share balances of every voter, read at vote time.
    pub votes: i128,
    /// Ledger timestamp closing the voting window (inclusive).
    pub end: u64,
    /// Set once the payout has been made; never reset.
    pub executed: bool,
}

impl Proposal {
    pub(crate) fn from_parts(config: ProposalConfig, state: ProposalState) -> Self {
        Proposal {
            id: config.id,
            name: config.name,
            amount: config.amount,
            recipient: config.recipient,
            votes: state.votes,
            end: config.end,
            executed: state.executed,
        }
    }

    /// `true` while `now` is inside the voting window.
    pub fn is_open(&self, now: u64) -> bool {
        now <= self.end
    }
}

/// Lifecycle position of a proposal as seen at a given ledger time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Voting window still open.
    Voting,
    /// Window closed and quorum met; waiting for `execute_proposal`.
    Passed,
    /// Window closed without quorum.
    BelowQuorum,
    /// Funds released to the recipient. Terminal.
    Executed,
}
