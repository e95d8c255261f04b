#![allow(dead_code)]

extern crate std;

use soroban_sdk::{token, Address};

use crate::types::Proposal;
use crate::DaoTreasuryClient;

/// INV-1: Total shares equal the sum of every holder's balance.
///
/// `holders` must list every address that ever held shares.
pub fn assert_share_conservation(client: &DaoTreasuryClient, holders: &[Address]) {
    let sum: i128 = holders.iter().map(|h| client.shares(h)).sum();
    let total = client.total_shares();
    assert_eq!(
        sum, total,
        "INV-1 violated: sum of shares ({}) != total_shares ({})",
        sum, total
    );
}

/// INV-2: Available funds are never negative and never exceed what the
/// contract actually holds.
pub fn assert_funds_backed(client: &DaoTreasuryClient, token: &token::Client) {
    let funds = client.available_funds();
    let held = token.balance(&client.address);
    assert!(funds >= 0, "INV-2 violated: negative available funds ({})", funds);
    assert!(
        funds <= held,
        "INV-2 violated: available funds ({}) exceed contract balance ({})",
        funds,
        held
    );
}

/// INV-3: Available funds follow the ledger of inflows and outflows.
pub fn assert_funds_accounting(
    client: &DaoTreasuryClient,
    contributed: i128,
    paid_out: i128,
) {
    let funds = client.available_funds();
    assert_eq!(
        funds,
        contributed - paid_out,
        "INV-3 violated: available funds {} != {} contributed - {} paid out",
        funds,
        contributed,
        paid_out
    );
}

/// INV-4: Proposal IDs are sequential starting from 0.
pub fn assert_sequential_ids(proposals: &[Proposal]) {
    for (i, proposal) in proposals.iter().enumerate() {
        assert_eq!(
            proposal.id, i as u64,
            "INV-4 violated: expected id {}, got {}",
            i, proposal.id
        );
    }
}

/// INV-5: Fields fixed at creation never change afterwards.
pub fn assert_proposal_immutable_fields(original: &Proposal, current: &Proposal) {
    assert_eq!(original.id, current.id, "INV-5 violated: proposal id changed");
    assert_eq!(
        original.name, current.name,
        "INV-5 violated: proposal name changed"
    );
    assert_eq!(
        original.amount, current.amount,
        "INV-5 violated: proposal amount changed"
    );
    assert_eq!(
        original.recipient, current.recipient,
        "INV-5 violated: proposal recipient changed"
    );
    assert_eq!(original.end, current.end, "INV-5 violated: proposal end changed");
}

/// INV-6: Votes only grow and `executed` never reverts.
pub fn assert_monotonic_progress(before: &Proposal, after: &Proposal) {
    assert!(
        after.votes >= before.votes,
        "INV-6 violated: votes decreased from {} to {}",
        before.votes,
        after.votes
    );
    assert!(
        !before.executed || after.executed,
        "INV-6 violated: proposal {} went back to not executed",
        before.id
    );
}

/// Run all ledger-wide invariants.
pub fn assert_all_treasury_invariants(
    client: &DaoTreasuryClient,
    token: &token::Client,
    holders: &[Address],
) {
    assert_share_conservation(client, holders);
    assert_funds_backed(client, token);
}
