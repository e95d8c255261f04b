extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{
    Contributed, DaoInitialized, FundsWithdrawn, ProposalCreated, ProposalExecuted,
    SharesRedeemed, SharesTransferred, VoteCast,
};
use crate::test::{setup, setup_uninit, CONTRIBUTION_WINDOW, QUORUM, VOTE_WINDOW};

#[test]
fn test_initialized_event() {
    let dao = setup_uninit();
    dao.client.init(
        &dao.admin,
        &dao.token.address,
        &CONTRIBUTION_WINDOW,
        &VOTE_WINDOW,
        &QUORUM,
    );

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, dao.client.address);
    let expected_topics = vec![
        &dao.env,
        symbol_short!("init").into_val(&dao.env),
        dao.admin.into_val(&dao.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DaoInitialized = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        DaoInitialized {
            admin: dao.admin.clone(),
            token: dao.token.address.clone(),
            contribution_end: CONTRIBUTION_WINDOW,
            vote_duration: VOTE_WINDOW,
            quorum: QUORUM,
        }
    );
}

#[test]
fn test_contributed_event() {
    let dao = setup();
    let investor = Address::generate(&dao.env);
    dao.fund(&investor, 70);
    dao.fund(&investor, 30);

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("contrib"), investor)
    assert_eq!(last_event.0, dao.client.address);
    let expected_topics = vec![
        &dao.env,
        symbol_short!("contrib").into_val(&dao.env),
        investor.into_val(&dao.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data carries the running share balance.
    let event_data: Contributed = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        Contributed {
            investor: investor.clone(),
            amount: 30,
            shares: 100,
        }
    );
}

#[test]
fn test_proposal_created_event() {
    let dao = setup();
    let (investor1, _, _) = dao.investor_trio();
    let recipient = Address::generate(&dao.env);
    let proposal = dao.propose(&investor1, 100, &recipient);

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, dao.client.address);
    let expected_topics = vec![
        &dao.env,
        symbol_short!("proposed").into_val(&dao.env),
        proposal.id.into_val(&dao.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalCreated = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        ProposalCreated {
            proposal_id: proposal.id,
            proposer: investor1.clone(),
            amount: 100,
            recipient: recipient.clone(),
            end: proposal.end,
        }
    );
}

#[test]
fn test_vote_cast_event() {
    let dao = setup();
    let (investor1, _, investor3) = dao.investor_trio();
    let recipient = Address::generate(&dao.env);
    dao.propose(&investor1, 100, &recipient);
    dao.client.vote(&investor3, &0);

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &dao.env,
        symbol_short!("voted").into_val(&dao.env),
        0u64.into_val(&dao.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: VoteCast = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        VoteCast {
            proposal_id: 0,
            voter: investor3.clone(),
            weight: 300,
        }
    );
}

#[test]
fn test_proposal_executed_event() {
    let dao = setup();
    let (investor1, _, investor3) = dao.investor_trio();
    let recipient = Address::generate(&dao.env);
    dao.propose(&investor1, 100, &recipient);
    dao.client.vote(&investor1, &0);
    dao.client.vote(&investor3, &0);
    dao.advance(VOTE_WINDOW + 1);
    dao.client.execute_proposal(&investor1, &0);

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &dao.env,
        symbol_short!("executed").into_val(&dao.env),
        0u64.into_val(&dao.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalExecuted = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        ProposalExecuted {
            proposal_id: 0,
            recipient: recipient.clone(),
            amount: 100,
        }
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let dao = setup();
    dao.investor_trio();
    let to = Address::generate(&dao.env);
    dao.client.withdraw_funds(&dao.admin, &25, &to);

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &dao.env,
        symbol_short!("withdrawn").into_val(&dao.env),
        to.into_val(&dao.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            admin: dao.admin.clone(),
            to: to.clone(),
            amount: 25,
        }
    );
}

#[test]
fn test_shares_redeemed_event() {
    let dao = setup();
    let (_, investor2, _) = dao.investor_trio();
    dao.client.redeem_shares(&investor2, &50);

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let event_data: SharesRedeemed = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        SharesRedeemed {
            investor: investor2.clone(),
            shares: 50,
            payout: 50,
        }
    );
}

#[test]
fn test_shares_transferred_event() {
    let dao = setup();
    let (investor1, investor2, _) = dao.investor_trio();
    dao.client.transfer_shares(&investor1, &investor2, &20);

    let all_events = dao.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &dao.env,
        symbol_short!("sh_xfer").into_val(&dao.env),
        investor1.into_val(&dao.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SharesTransferred = last_event.2.try_into_val(&dao.env).unwrap();
    assert_eq!(
        event_data,
        SharesTransferred {
            from: investor1.clone(),
            to: investor2.clone(),
            amount: 20,
        }
    );
}
