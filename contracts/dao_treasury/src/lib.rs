//! # DAO Treasury Contract
//!
//! A share-weighted treasury: investors contribute tokens for voting shares,
//! propose disbursements, vote, and execute proposals that reached quorum once
//! their voting window has closed. It exposes the single Soroban contract
//! `DaoTreasury` whose entry points cover the full lifecycle:
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | [`DaoTreasury::init`]                            |
//! | Funding      | [`DaoTreasury::contribute`]                      |
//! | Governance   | `create_proposal`, `vote`, `execute_proposal`    |
//! | Treasury     | `withdraw_funds`                                 |
//! | Shares       | `redeem_shares`, `transfer_shares`               |
//! | Queries      | `shares`, `is_investor`, `get_proposal`, `proposal_status`, ... |
//!
//! ## Architecture
//!
//! Authorization checks live in [`access`]. Storage access is fully
//! delegated to [`storage`] and arithmetic to [`math`]. This file contains
//! **only** the public entry points and event emissions.
//!
//! Every mutating entry point takes the acting address explicitly and calls
//! `require_auth` on it first. A failed precondition aborts the invocation
//! with an [`Error`], rolling back every write and token transfer.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

pub mod access;
pub mod events;
pub mod math;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use storage::{get_and_increment_proposal_id, load_proposal, load_proposal_pair, save_proposal};
pub use types::{DaoConfig, Proposal, ProposalStatus};

/// Upper bound on the page size accepted by `get_proposals`.
const MAX_PAGE: u32 = 50;

/// Longest proposal name, in bytes.
pub const MAX_NAME_LEN: u32 = 64;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotInvestor = 3,
    NotAdmin = 4,
    ContributionClosed = 5,
    InsufficientFunds = 6,
    BelowQuorum = 7,
    AlreadyExecuted = 8,
    AlreadyVoted = 9,
    VotingClosed = 10,
    TooEarly = 11,
    ProposalNotFound = 12,
    InvalidAmount = 13,
    InsufficientShares = 14,
    InvalidQuorum = 15,
    InvalidDuration = 16,
    Overflow = 17,
    InvalidName = 18,
    SharesLocked = 19,
}

#[contract]
pub struct DaoTreasury;

#[contractimpl]
impl DaoTreasury {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the treasury and fix its parameters for good.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `admin` must sign; it is the only address allowed to withdraw.
    /// - Contributions are accepted until `now + contribution_duration`.
    /// - Each proposal stays open for `vote_duration` seconds.
    /// - `quorum` is a percentage of total shares, at most 100.
    pub fn init(
        env: Env,
        admin: Address,
        token: Address,
        contribution_duration: u64,
        vote_duration: u64,
        quorum: u32,
    ) {
        admin.require_auth();
        if storage::has_config(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if quorum > 100 {
            panic_with_error!(&env, Error::InvalidQuorum);
        }
        if vote_duration == 0 {
            panic_with_error!(&env, Error::InvalidDuration);
        }

        let contribution_end = Self::checked(
            &env,
            env.ledger().timestamp().checked_add(contribution_duration),
        );
        let config = DaoConfig {
            admin: admin.clone(),
            token: token.clone(),
            contribution_end,
            vote_duration,
            quorum,
        };
        storage::init_config(&env, &config);

        events::emit_initialized(
            &env,
            events::DaoInitialized {
                admin,
                token,
                contribution_end,
                vote_duration,
                quorum,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` tokens and receive the same number of shares.
    ///
    /// Only possible before `contribution_end`. The first contribution
    /// registers `investor` in the investor registry.
    pub fn contribute(env: Env, investor: Address, amount: i128) {
        investor.require_auth();
        let config = storage::load_config(&env);

        if env.ledger().timestamp() >= config.contribution_end {
            panic_with_error!(&env, Error::ContributionClosed);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let shares = Self::checked(&env, storage::get_shares(&env, &investor).checked_add(amount));
        let total = Self::checked(&env, storage::get_total_shares(&env).checked_add(amount));
        let funds = Self::checked(&env, storage::get_available_funds(&env).checked_add(amount));

        token::Client::new(&env, &config.token).transfer(
            &investor,
            &env.current_contract_address(),
            &amount,
        );

        storage::set_shares(&env, &investor, shares);
        storage::set_total_shares(&env, total);
        storage::set_available_funds(&env, funds);
        access::register_investor(&env, &investor);

        events::emit_contributed(&env, investor, amount, shares);
    }

    // ─────────────────────────────────────────────────────────
    // Governance
    // ─────────────────────────────────────────────────────────

    /// Propose paying `amount` to `recipient`.
    ///
    /// `proposer` must be an investor. The amount is checked against the
    /// funds available right now but is not reserved. `name` is at most
    /// `MAX_NAME_LEN` bytes.
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        name: String,
        amount: i128,
        recipient: Address,
    ) -> Proposal {
        proposer.require_auth();
        let config = storage::load_config(&env);
        access::require_investor(&env, &proposer);

        if name.len() > MAX_NAME_LEN {
            panic_with_error!(&env, Error::InvalidName);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        if amount > storage::get_available_funds(&env) {
            panic_with_error!(&env, Error::InsufficientFunds);
        }

        let end = Self::checked(
            &env,
            env.ledger().timestamp().checked_add(config.vote_duration),
        );
        let id = get_and_increment_proposal_id(&env);
        let proposal = Proposal {
            id,
            name,
            amount,
            recipient: recipient.clone(),
            votes: 0,
            end,
            executed: false,
        };
        save_proposal(&env, &proposal);

        events::emit_proposal_created(&env, id, proposer, amount, recipient, end);

        proposal
    }

    /// Vote for `proposal_id` with every share `voter` holds right now.
    ///
    /// One vote per address per proposal, only while the window is open.
    /// The voter's shares stay locked until the window closes, so the same
    /// shares cannot be counted again from another address.
    pub fn vote(env: Env, voter: Address, proposal_id: u64) {
        voter.require_auth();
        storage::load_config(&env);
        access::require_investor(&env, &voter);

        let (proposal, mut state) = load_proposal_pair(&env, proposal_id);

        if storage::has_voted(&env, &voter, proposal_id) {
            panic_with_error!(&env, Error::AlreadyVoted);
        }
        if env.ledger().timestamp() > proposal.end {
            panic_with_error!(&env, Error::VotingClosed);
        }

        let weight = storage::get_shares(&env, &voter);
        state.votes = Self::checked(&env, state.votes.checked_add(weight));

        storage::record_vote(&env, &voter, proposal_id);
        if storage::get_share_lock(&env, &voter).map_or(true, |until| until < proposal.end) {
            storage::set_share_lock(&env, &voter, proposal.end);
        }
        storage::save_proposal_state(&env, proposal_id, &state);

        events::emit_vote_cast(&env, proposal_id, voter, weight);
    }

    /// Pay out a proposal whose window has closed with quorum reached.
    ///
    /// Quorum is measured against the shares outstanding at execution time.
    /// Any address may execute.
    pub fn execute_proposal(env: Env, executor: Address, proposal_id: u64) {
        executor.require_auth();
        let dao = storage::load_config(&env);

        let (proposal, mut state) = load_proposal_pair(&env, proposal_id);

        if env.ledger().timestamp() <= proposal.end {
            panic_with_error!(&env, Error::TooEarly);
        }
        if state.executed {
            panic_with_error!(&env, Error::AlreadyExecuted);
        }
        let total = storage::get_total_shares(&env);
        if !Self::checked(&env, math::meets_quorum(state.votes, total, dao.quorum)) {
            panic_with_error!(&env, Error::BelowQuorum);
        }
        let funds = storage::get_available_funds(&env);
        if proposal.amount > funds {
            panic_with_error!(&env, Error::InsufficientFunds);
        }

        state.executed = true;
        storage::save_proposal_state(&env, proposal_id, &state);
        storage::set_available_funds(&env, funds - proposal.amount);

        token::Client::new(&env, &dao.token).transfer(
            &env.current_contract_address(),
            &proposal.recipient,
            &proposal.amount,
        );

        events::emit_proposal_executed(&env, proposal_id, proposal.recipient, proposal.amount);
    }

    // ─────────────────────────────────────────────────────────
    // Treasury
    // ─────────────────────────────────────────────────────────

    /// Send `amount` of the available funds to `to`.
    ///
    /// - `admin` must be the admin set at `init`.
    pub fn withdraw_funds(env: Env, admin: Address, amount: i128, to: Address) {
        admin.require_auth();
        let config = storage::load_config(&env);
        access::require_admin(&env, &config, &admin);

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let funds = storage::get_available_funds(&env);
        if amount > funds {
            panic_with_error!(&env, Error::InsufficientFunds);
        }

        storage::set_available_funds(&env, funds - amount);
        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );

        events::emit_funds_withdrawn(&env, admin, to, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Shares
    // ─────────────────────────────────────────────────────────

    /// Burn `amount` of the caller's shares for a proportional slice of the
    /// available funds. Returns the payout.
    ///
    /// payout = amount * available_funds / total_shares, rounded down.
    pub fn redeem_shares(env: Env, investor: Address, amount: i128) -> i128 {
        investor.require_auth();
        let config = storage::load_config(&env);

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let held = storage::get_shares(&env, &investor);
        if amount > held {
            panic_with_error!(&env, Error::InsufficientShares);
        }

        let total = storage::get_total_shares(&env);
        let funds = storage::get_available_funds(&env);
        let payout = Self::checked(&env, math::redemption_payout(amount, funds, total));
        if payout <= 0 {
            panic_with_error!(&env, Error::InsufficientFunds);
        }

        storage::set_shares(&env, &investor, held - amount);
        storage::set_total_shares(&env, total - amount);
        storage::set_available_funds(&env, funds - payout);

        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &investor,
            &payout,
        );

        events::emit_shares_redeemed(&env, investor, amount, payout);
        payout
    }

    /// Move `amount` shares from `from` to `to` without touching funds.
    ///
    /// The receiver becomes an investor. A sender who voted on a proposal
    /// still open is rejected with `Error::SharesLocked`.
    pub fn transfer_shares(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        storage::load_config(&env);

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let from_shares = storage::get_shares(&env, &from);
        if amount > from_shares {
            panic_with_error!(&env, Error::InsufficientShares);
        }
        let now = env.ledger().timestamp();
        if storage::get_share_lock(&env, &from).map_or(false, |until| now <= until) {
            panic_with_error!(&env, Error::SharesLocked);
        }

        storage::set_shares(&env, &from, from_shares - amount);
        let to_shares = Self::checked(&env, storage::get_shares(&env, &to).checked_add(amount));
        storage::set_shares(&env, &to, to_shares);
        access::register_investor(&env, &to);

        events::emit_shares_transferred(&env, from, to, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn config(env: Env) -> DaoConfig {
        storage::load_config(&env)
    }

    pub fn admin(env: Env) -> Address {
        storage::load_config(&env).admin
    }

    pub fn token(env: Env) -> Address {
        storage::load_config(&env).token
    }

    /// Share balance of `holder`; 0 for unknown addresses.
    pub fn shares(env: Env, holder: Address) -> i128 {
        storage::get_shares(&env, &holder)
    }

    pub fn is_investor(env: Env, address: Address) -> bool {
        access::is_investor(&env, &address)
    }

    pub fn total_shares(env: Env) -> i128 {
        storage::get_total_shares(&env)
    }

    pub fn available_funds(env: Env) -> i128 {
        storage::get_available_funds(&env)
    }

    /// ID the next proposal will receive; equals the number of proposals.
    pub fn next_proposal_id(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    pub fn get_proposal(env: Env, id: u64) -> Proposal {
        load_proposal(&env, id)
    }

    /// Return up to `limit` proposals starting at ID `start`, in ID order.
    ///
    /// `limit` is capped at 50. An out-of-range `start` yields an empty list.
    pub fn get_proposals(env: Env, start: u64, limit: u32) -> Vec<Proposal> {
        let count = storage::get_proposal_count(&env);
        let end = start
            .saturating_add(u64::from(limit.min(MAX_PAGE)))
            .min(count);

        let mut page = Vec::new(&env);
        for id in start..end {
            page.push_back(load_proposal(&env, id));
        }
        page
    }

    pub fn has_voted(env: Env, voter: Address, proposal_id: u64) -> bool {
        storage::has_voted(&env, &voter, proposal_id)
    }

    /// Where `proposal_id` stands at the current ledger time.
    pub fn proposal_status(env: Env, proposal_id: u64) -> ProposalStatus {
        let config = storage::load_config(&env);
        let proposal = load_proposal(&env, proposal_id);

        if proposal.executed {
            return ProposalStatus::Executed;
        }
        if proposal.is_open(env.ledger().timestamp()) {
            return ProposalStatus::Voting;
        }
        let total = storage::get_total_shares(&env);
        if Self::checked(&env, math::meets_quorum(proposal.votes, total, config.quorum)) {
            ProposalStatus::Passed
        } else {
            ProposalStatus::BelowQuorum
        }
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn checked<T>(env: &Env, value: Option<T>) -> T {
        value.unwrap_or_else(|| panic_with_error!(env, Error::Overflow))
    }
}
