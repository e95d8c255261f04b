//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the treasury:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type        | Description                          |
//! |------------------|-------------|--------------------------------------|
//! | `Config`         | `DaoConfig` | Organization parameters set by init  |
//! | `TotalShares`    | `i128`      | Sum of every investor's shares       |
//! | `AvailableFunds` | `i128`      | Treasury balance not yet paid out    |
//! | `ProposalCount`  | `u64`       | Auto-increment proposal ID counter   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type             | Description                     |
//! |--------------------|------------------|---------------------------------|
//! | `Shares(addr)`     | `i128`           | Share balance of `addr`         |
//! | `Investor(addr)`   | `bool`           | Investor registry flag          |
//! | `PropConfig(id)`   | `ProposalConfig` | Immutable proposal fields       |
//! | `PropState(id)`    | `ProposalState`  | Votes tally and executed flag   |
//! | `Vote(addr, id)`   | `bool`           | `addr` has voted on `id`        |
//! | `ShareLock(addr)`  | `u64`            | End of latest window voted in   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//! Missing entries are never bumped; reads of absent shares, flags and votes
//! return their zero value.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, IntoVal, TryFromVal, Val};

use crate::types::{DaoConfig, Proposal, ProposalConfig, ProposalState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Organization parameters (Instance).
    Config,
    /// Outstanding shares across all investors (Instance).
    TotalShares,
    /// Funds still available for proposals and withdrawals (Instance).
    AvailableFunds,
    /// Global auto-increment counter for proposal IDs (Instance).
    ProposalCount,
    /// Share balance per identity (Persistent).
    Shares(Address),
    /// Investor registry flag per identity (Persistent).
    Investor(Address),
    /// Immutable proposal configuration keyed by ID (Persistent).
    PropConfig(u64),
    /// Mutable proposal state keyed by ID (Persistent).
    PropState(u64),
    /// Vote record for (voter, proposal ID) (Persistent).
    Vote(Address, u64),
    /// End of the latest voting window `addr` voted in (Persistent).
    ShareLock(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Load the organization parameters.
/// Panics with `Error::NotInitialized` before `init`.
pub fn load_config(env: &Env) -> DaoConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Store the organization parameters and zero every treasury counter.
pub fn init_config(env: &Env, config: &DaoConfig) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::TotalShares, &0i128);
    instance.set(&DataKey::AvailableFunds, &0i128);
    instance.set(&DataKey::ProposalCount, &0u64);
    bump_instance(env);
}

pub fn get_total_shares(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn set_total_shares(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

pub fn get_available_funds(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::AvailableFunds)
        .unwrap_or(0)
}

pub fn set_available_funds(env: &Env, funds: i128) {
    env.storage()
        .instance()
        .set(&DataKey::AvailableFunds, &funds);
}

// ─────────────────────────────────────────────────────────
// Proposal counter
// ─────────────────────────────────────────────────────────

/// Number of proposals created so far, which is also the next ID.
pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Atomically read and increment the proposal counter.
/// Returns the ID that should be used for the next proposal.
pub fn get_and_increment_proposal_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = get_proposal_count(env);
    let next = current
        .checked_add(1)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &next);
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

fn get_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

// ─────────────────────────────────────────────────────────
// Share ledger and investor registry
// ─────────────────────────────────────────────────────────

pub fn get_shares(env: &Env, holder: &Address) -> i128 {
    get_persistent(env, &DataKey::Shares(holder.clone())).unwrap_or(0)
}

pub fn set_shares(env: &Env, holder: &Address, shares: i128) {
    set_persistent(env, &DataKey::Shares(holder.clone()), &shares);
}

pub fn is_investor(env: &Env, who: &Address) -> bool {
    get_persistent(env, &DataKey::Investor(who.clone())).unwrap_or(false)
}

pub fn set_investor(env: &Env, who: &Address) {
    set_persistent(env, &DataKey::Investor(who.clone()), &true);
}

// ─────────────────────────────────────────────────────────
// Proposals
// ─────────────────────────────────────────────────────────

/// Save both the immutable config and initial mutable state for a new proposal.
pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let config = ProposalConfig {
        id: proposal.id,
        name: proposal.name.clone(),
        amount: proposal.amount,
        recipient: proposal.recipient.clone(),
        end: proposal.end,
    };
    let state = ProposalState {
        votes: proposal.votes,
        executed: proposal.executed,
    };

    set_persistent(env, &DataKey::PropConfig(proposal.id), &config);
    set_persistent(env, &DataKey::PropState(proposal.id), &state);
}

/// Load config and state of a proposal together.
/// Panics with `Error::ProposalNotFound` if the ID was never issued.
pub fn load_proposal_pair(env: &Env, id: u64) -> (ProposalConfig, ProposalState) {
    let config: ProposalConfig = get_persistent(env, &DataKey::PropConfig(id))
        .unwrap_or_else(|| panic_with_error!(env, Error::ProposalNotFound));
    let state: ProposalState = get_persistent(env, &DataKey::PropState(id))
        .unwrap_or_else(|| panic_with_error!(env, Error::ProposalNotFound));
    (config, state)
}

/// Load the full `Proposal` by combining config and state.
pub fn load_proposal(env: &Env, id: u64) -> Proposal {
    let (config, state) = load_proposal_pair(env, id);
    Proposal::from_parts(config, state)
}

/// Save only the mutable proposal state (votes and execution).
pub fn save_proposal_state(env: &Env, id: u64, state: &ProposalState) {
    set_persistent(env, &DataKey::PropState(id), state);
}

// ─────────────────────────────────────────────────────────
// Vote records
// ─────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, voter: &Address, proposal_id: u64) -> bool {
    get_persistent(env, &DataKey::Vote(voter.clone(), proposal_id)).unwrap_or(false)
}

pub fn record_vote(env: &Env, voter: &Address, proposal_id: u64) {
    set_persistent(env, &DataKey::Vote(voter.clone(), proposal_id), &true);
}

/// End of the latest voting window `holder` has voted in, if any.
pub fn get_share_lock(env: &Env, holder: &Address) -> Option<u64> {
    get_persistent(env, &DataKey::ShareLock(holder.clone()))
}

pub fn set_share_lock(env: &Env, holder: &Address, until: u64) {
    set_persistent(env, &DataKey::ShareLock(holder.clone()), &until);
}
