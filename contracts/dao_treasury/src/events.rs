use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoInitialized {
    pub admin: Address,
    pub token: Address,
    pub contribution_end: u64,
    pub vote_duration: u64,
    pub quorum: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contributed {
    pub investor: Address,
    pub amount: i128,
    /// Investor's share balance after the contribution.
    pub shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub proposer: Address,
    pub amount: i128,
    pub recipient: Address,
    pub end: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub proposal_id: u64,
    pub voter: Address,
    pub weight: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecuted {
    pub proposal_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub admin: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesRedeemed {
    pub investor: Address,
    pub shares: i128,
    pub payout: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesTransferred {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, data: DaoInitialized) {
    let topics = (symbol_short!("init"), data.admin.clone());
    env.events().publish(topics, data);
}

pub fn emit_contributed(env: &Env, investor: Address, amount: i128, shares: i128) {
    let topics = (symbol_short!("contrib"), investor.clone());
    let data = Contributed {
        investor,
        amount,
        shares,
    };
    env.events().publish(topics, data);
}

pub fn emit_proposal_created(
    env: &Env,
    proposal_id: u64,
    proposer: Address,
    amount: i128,
    recipient: Address,
    end: u64,
) {
    let topics = (symbol_short!("proposed"), proposal_id);
    let data = ProposalCreated {
        proposal_id,
        proposer,
        amount,
        recipient,
        end,
    };
    env.events().publish(topics, data);
}

pub fn emit_vote_cast(env: &Env, proposal_id: u64, voter: Address, weight: i128) {
    let topics = (symbol_short!("voted"), proposal_id);
    let data = VoteCast {
        proposal_id,
        voter,
        weight,
    };
    env.events().publish(topics, data);
}

pub fn emit_proposal_executed(env: &Env, proposal_id: u64, recipient: Address, amount: i128) {
    let topics = (symbol_short!("executed"), proposal_id);
    let data = ProposalExecuted {
        proposal_id,
        recipient,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_withdrawn(env: &Env, admin: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("withdrawn"), to.clone());
    let data = FundsWithdrawn { admin, to, amount };
    env.events().publish(topics, data);
}

pub fn emit_shares_redeemed(env: &Env, investor: Address, shares: i128, payout: i128) {
    let topics = (symbol_short!("redeemed"), investor.clone());
    let data = SharesRedeemed {
        investor,
        shares,
        payout,
    };
    env.events().publish(topics, data);
}

pub fn emit_shares_transferred(env: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("sh_xfer"), from.clone());
    let data = SharesTransferred { from, to, amount };
    env.events().publish(topics, data);
}
