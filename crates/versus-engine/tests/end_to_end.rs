//! End-to-end settlement cycles: create → accept → report → settle,
//! the dispute path through adjudication, and the funding queue feeding
//! the same ledger.

use std::sync::Arc;

use versus_engine::WagerEngine;
use versus_ledger::Ledger;
use versus_types::{
    AccountId, FundingDecision, FundingKind, FundingState, NoModeration, PageRequest, Role,
    SelfReport, VersusError, WagerState,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct World {
    engine: WagerEngine,
    a: AccountId,
    b: AccountId,
    admin: AccountId,
}

fn world() -> World {
    init_tracing();
    let engine = WagerEngine::new(Arc::new(Ledger::new()), Arc::new(NoModeration));
    let a = AccountId::new();
    let b = AccountId::new();
    let admin = AccountId::new();
    engine.ledger().open_account(a, Role::Player, 100).unwrap();
    engine.ledger().open_account(b, Role::Player, 100).unwrap();
    engine.ledger().open_account(admin, Role::Admin, 0).unwrap();
    World {
        engine,
        a,
        b,
        admin,
    }
}

#[test]
fn create_escrows_creator_stake() {
    // Account A, balance 100, creates a wager with stake 30.
    let w = world();
    let wager = w.engine.create_wager(w.a, "lol-1v1", 30).unwrap();
    assert_eq!(wager.state, WagerState::Open);
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 70);
    w.engine.verify_conservation().unwrap();
}

#[test]
fn accept_escrows_both_stakes() {
    let w = world();
    let wager = w.engine.create_wager(w.a, "lol-1v1", 30).unwrap();
    let wager = w.engine.accept_wager(w.b, wager.id).unwrap();
    assert_eq!(wager.state, WagerState::Active);
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 70);
    assert_eq!(w.engine.ledger().balance(w.b).unwrap(), 70);
    w.engine.verify_conservation().unwrap();
}

#[test]
fn clean_win_pays_double_stake() {
    let w = world();
    let wager = w.engine.create_wager(w.a, "lol-1v1", 30).unwrap();
    w.engine.accept_wager(w.b, wager.id).unwrap();
    w.engine
        .report_outcome(w.a, wager.id, SelfReport::Win)
        .unwrap();
    let wager = w
        .engine
        .report_outcome(w.b, wager.id, SelfReport::Loss)
        .unwrap();

    assert_eq!(wager.state, WagerState::Finalized);
    assert_eq!(wager.winner_id, Some(w.a));
    // A is up 30 net: 100 - 30 + 60.
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 130);
    assert_eq!(w.engine.ledger().balance(w.b).unwrap(), 70);
    w.engine.verify_conservation().unwrap();
}

#[test]
fn conflicting_wins_need_an_admin() {
    let w = world();
    let wager = w.engine.create_wager(w.a, "lol-1v1", 30).unwrap();
    w.engine.accept_wager(w.b, wager.id).unwrap();
    w.engine
        .report_outcome(w.a, wager.id, SelfReport::Win)
        .unwrap();
    let held = w
        .engine
        .report_outcome(w.b, wager.id, SelfReport::Win)
        .unwrap();
    assert_eq!(held.state, WagerState::Held);

    let wager = w.engine.adjudicate_appeal(w.admin, held.id, w.b).unwrap();
    assert_eq!(wager.state, WagerState::Finalized);
    assert_eq!(wager.winner_id, Some(w.b));
    assert!(wager.resolved_by_appeal);
    assert_eq!(w.engine.ledger().balance(w.b).unwrap(), 130);
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 70);
    w.engine.verify_conservation().unwrap();
}

#[test]
fn double_loss_refunds_both_stakes() {
    let w = world();
    let wager = w.engine.create_wager(w.a, "lol-1v1", 30).unwrap();
    w.engine.accept_wager(w.b, wager.id).unwrap();
    w.engine
        .report_outcome(w.a, wager.id, SelfReport::Loss)
        .unwrap();
    let wager = w
        .engine
        .report_outcome(w.b, wager.id, SelfReport::Loss)
        .unwrap();

    assert_eq!(wager.state, WagerState::Finalized);
    assert!(wager.winner_id.is_none());
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 100);
    assert_eq!(w.engine.ledger().balance(w.b).unwrap(), 100);
    w.engine.verify_conservation().unwrap();
}

#[test]
fn funding_request_lifecycle_is_once_only() {
    let w = world();
    let req = w
        .engine
        .submit_funding_request(w.a, FundingKind::Load, 50)
        .unwrap();
    assert_eq!(req.state, FundingState::Pending);
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 100);

    let decided = w
        .engine
        .approve_funding_request(w.admin, req.id, FundingDecision::Approve)
        .unwrap();
    assert_eq!(decided.state, FundingState::Approved);
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 150);

    let err = w
        .engine
        .approve_funding_request(w.admin, req.id, FundingDecision::Approve)
        .unwrap_err();
    assert!(matches!(err, VersusError::AlreadyProcessed(id) if id == req.id));
    assert_eq!(w.engine.ledger().balance(w.a).unwrap(), 150);
    w.engine.verify_conservation().unwrap();
}

#[test]
fn adjudicator_guard_keeps_wager_held() {
    let w = world();
    let wager = w.engine.create_wager(w.a, "lol-1v1", 30).unwrap();
    w.engine.accept_wager(w.b, wager.id).unwrap();
    w.engine.request_appeal(w.a, wager.id).unwrap();

    let err = w
        .engine
        .adjudicate_appeal(w.admin, wager.id, w.admin)
        .unwrap_err();
    assert!(matches!(err, VersusError::Validation { .. }));
    assert_eq!(w.engine.wager(wager.id).unwrap().state, WagerState::Held);
    w.engine.verify_conservation().unwrap();
}

#[test]
fn full_cycle_conserves_tokens() {
    let w = world();

    // Fund A through the queue, then play three wagers with mixed outcomes.
    let req = w
        .engine
        .submit_funding_request(w.a, FundingKind::Load, 200)
        .unwrap();
    w.engine
        .approve_funding_request(w.admin, req.id, FundingDecision::Approve)
        .unwrap();

    let outcomes = [
        (SelfReport::Win, SelfReport::Loss),
        (SelfReport::Loss, SelfReport::Loss),
        (SelfReport::Win, SelfReport::Win),
    ];
    for (a_report, b_report) in outcomes {
        let wager = w.engine.create_wager(w.a, "lol-1v1", 25).unwrap();
        w.engine.accept_wager(w.b, wager.id).unwrap();
        w.engine.report_outcome(w.a, wager.id, a_report).unwrap();
        w.engine.report_outcome(w.b, wager.id, b_report).unwrap();
        w.engine.verify_conservation().unwrap();
    }

    // Settle the held wager and withdraw; conservation holds throughout.
    let held = w.engine.list_held_wagers(PageRequest::first());
    assert_eq!(held.total, 1);
    w.engine
        .adjudicate_appeal(w.admin, held.items[0].id, w.b)
        .unwrap();
    w.engine.verify_conservation().unwrap();

    let req = w
        .engine
        .submit_funding_request(w.b, FundingKind::Withdraw, 50)
        .unwrap();
    w.engine
        .approve_funding_request(w.admin, req.id, FundingDecision::Approve)
        .unwrap();
    w.engine.verify_conservation().unwrap();

    // Every token is either in a balance or escrowed; nothing minted by play.
    let total = w.engine.ledger().balances_total();
    assert_eq!(total, 100 + 100 + 200 - 50);
}
