#![cfg(test)]
extern crate std;

use crate::common::error::Error;
use crate::common::types::EXP_ONE;
use crate::{YieldTokenContract, YieldTokenContractClient};
use soroban_sdk::{
    Address, Env,
    testutils::{Address as _, Ledger as _},
};

// Helper: register a token with a generated portal and registrar
fn create_token(env: &Env) -> (YieldTokenContractClient<'_>, Address, Address) {
    let portal = Address::generate(env);
    let registrar = Address::generate(env);
    let contract_id = env.register(YieldTokenContract, (portal.clone(), registrar.clone()));
    (
        YieldTokenContractClient::new(env, &contract_id),
        portal,
        registrar,
    )
}

fn advance(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

// Helper: 100% APY committed at t0, 7 days elapsed, 1_000_000_000 minted and
// earning. Index is 1_019_363_162_880 afterwards.
fn seven_day_earner<'a>(env: &'a Env, amount: i128) -> (YieldTokenContractClient<'a>, Address) {
    let (client, _, _) = create_token(env);
    let alice = Address::generate(env);

    client.update_index(&10_000);
    advance(env, 604_800);
    client.mint(&alice, &amount);
    client.approve_earner(&alice);
    client.start_earning(&alice);

    (client, alice)
}

#[test]
fn test_initialization() {
    let env = Env::default();
    let (client, portal, registrar) = create_token(&env);

    assert_eq!(client.current_index(), EXP_ONE);
    assert_eq!(client.latest_rate(), 0);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.total_non_earning_supply(), 0);
    assert_eq!(client.principal_of_earning_supply(), 0);
    assert_eq!(client.portal(), portal);
    assert_eq!(client.registrar(), registrar);
}

// ==================== Index ====================

#[test]
fn test_index_grows_continuously() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);

    client.update_index(&1_000);
    assert_eq!(client.latest_rate(), 1_000);
    assert_eq!(client.current_index(), EXP_ONE);

    advance(&env, 31_536_000);
    // e^0.1 after one year at 10%
    assert_eq!(client.current_index(), 1_105_170_918_075);
}

#[test]
fn test_index_commit_is_idempotent() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);

    client.update_index(&1_000);
    advance(&env, 86_400);
    let committed = client.update_index(&1_000);
    // same timestamp, same rate: nothing moves
    assert_eq!(client.update_index(&1_000), committed);
    assert_eq!(client.current_index(), committed);
}

#[test]
fn test_index_compounds_across_commits() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);

    client.update_index(&1_000);
    let mut previous = client.current_index();
    for _ in 0..5 {
        advance(&env, 86_400);
        let index = client.update_index(&1_000);
        assert!(index > previous);
        previous = index;
    }
    // five daily commits at 10%; truncation keeps this a hair under the
    // single five-day jump of 1_001_370_801_703
    assert_eq!(previous, 1_001_370_801_694);
}

#[test]
fn test_negative_time_elapsed_is_fatal() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_000);
    let (client, _, _) = create_token(&env);

    env.ledger().with_mut(|li| li.timestamp = 500);
    assert_eq!(
        client.try_current_index(),
        Err(Ok(Error::NegativeTimeElapsed))
    );
}

// ==================== Mint / burn ====================

#[test]
fn test_mint_to_non_earning() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    client.mint(&alice, &1_000);
    assert_eq!(client.balance(&alice), 1_000);
    assert_eq!(client.principal_balance(&alice), 0);
    assert!(!client.is_earning(&alice));
    assert_eq!(client.total_supply(), 1_000);
    assert_eq!(client.total_non_earning_supply(), 1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn test_mint_zero_amount() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    client.mint(&alice, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn test_mint_negative_amount() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    client.mint(&alice, &-5);
}

#[test]
#[should_panic(expected = "Error(Contract, #6)")]
fn test_mint_to_token_contract() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);

    client.mint(&client.address, &1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn test_mint_overflows_supply_envelope() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    // two max mints leave exactly one unit of u128 headroom
    client.mint(&alice, &i128::MAX);
    client.mint(&alice, &i128::MAX);
    client.mint(&alice, &2);
}

#[test]
fn test_burn_from_non_earning() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    client.mint(&alice, &1_000);
    client.burn(&alice, &400);
    assert_eq!(client.balance(&alice), 600);
    assert_eq!(client.total_supply(), 600);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_burn_exceeding_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    client.mint(&alice, &1_000);
    client.burn(&alice, &1_001);
}

// ==================== Earning transitions ====================

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_start_earning_requires_approval() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    client.mint(&alice, &1_000);
    client.start_earning(&alice);
}

#[test]
fn test_start_earning_converts_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);

    assert_eq!(client.current_index(), 1_019_363_162_880);
    assert!(client.is_earning(&alice));
    // principal rounds down at conversion
    assert_eq!(client.principal_balance(&alice), 981_004_647);
    assert_eq!(client.principal_of_earning_supply(), 981_004_647);
    assert_eq!(client.total_non_earning_supply(), 0);
    // present value loses the fractional remainder to the protocol
    assert_eq!(client.balance(&alice), 999_999_999);
    assert_eq!(client.total_supply(), 999_999_999);
}

#[test]
fn test_start_earning_is_idempotent() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);

    client.start_earning(&alice);
    assert_eq!(client.principal_balance(&alice), 981_004_647);
}

#[test]
fn test_mint_direct_to_earner() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);

    client.update_index(&10_000);
    client.approve_earner(&alice);
    client.start_earning(&alice);
    advance(&env, 604_800);

    client.mint(&alice, &1_000_000_000);
    assert_eq!(client.principal_balance(&alice), 981_004_647);
    assert_eq!(client.balance(&alice), 999_999_999);
}

#[test]
fn test_seven_day_round_trip_keeps_one_unit() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);

    // burning the full present value differs from the mint by exactly the
    // rounding remainder
    client.burn(&alice, &999_999_999);
    assert_eq!(client.balance(&alice), 0);
    assert_eq!(client.principal_balance(&alice), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_stop_earning_realizes_present_value() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);

    advance(&env, 604_800);
    let (present, principal) = client.stop_earning(&alice);
    assert_eq!(principal, 981_004_647);
    assert_eq!(present, 1_019_363_162);

    assert!(!client.is_earning(&alice));
    assert_eq!(client.principal_balance(&alice), 0);
    assert_eq!(client.balance(&alice), 1_019_363_162);
    assert_eq!(client.principal_of_earning_supply(), 0);
    assert_eq!(client.total_non_earning_supply(), 1_019_363_162);

    // already non-earning: no-op
    assert_eq!(client.stop_earning(&alice), (0, 0));
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_stop_earning_for_approved_earner_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);

    client.stop_earning_for(&alice);
}

#[test]
fn test_stop_earning_for_after_disapproval() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);

    client.disapprove_earner(&alice);
    let (present, principal) = client.stop_earning_for(&alice);
    assert_eq!(principal, 981_004_647);
    assert_eq!(present, 999_999_999);
    assert!(!client.is_earning(&alice));
}

// ==================== Claim ====================

#[test]
fn test_claim_realizes_interest_since_last_claim() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);

    advance(&env, 604_800);
    assert_eq!(client.claim(&alice), 19_363_163);
    // watermark moved, principal untouched
    assert_eq!(client.claim(&alice), 0);
    assert_eq!(client.principal_balance(&alice), 981_004_647);
    assert_eq!(client.balance(&alice), 1_019_363_162);
}

#[test]
fn test_claim_for_non_earner_is_zero() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let bob = Address::generate(&env);

    client.mint(&bob, &1_000);
    assert_eq!(client.claim(&bob), 0);
}

// ==================== Transfers ====================

#[test]
fn test_transfer_both_non_earning() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);

    client.mint(&bob, &1_000);
    client.transfer(&bob, &carol, &300);
    assert_eq!(client.balance(&bob), 700);
    assert_eq!(client.balance(&carol), 300);
    assert_eq!(client.total_non_earning_supply(), 1_000);
    assert_eq!(client.total_supply(), 1_000);
}

#[test]
fn test_transfer_earning_to_non_earning() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);
    let bob = Address::generate(&env);

    client.transfer(&alice, &bob, &500_000_000);
    // debit side rounds principal up
    assert_eq!(client.principal_balance(&alice), 490_502_323);
    assert_eq!(client.balance(&bob), 500_000_000);
    assert_eq!(client.principal_of_earning_supply(), 490_502_323);
    assert_eq!(client.total_non_earning_supply(), 500_000_000);
    assert_eq!(client.balance(&alice), 499_999_999);
    assert_eq!(client.total_supply(), 999_999_999);
}

#[test]
fn test_transfer_non_earning_to_earning() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);

    client.update_index(&10_000);
    advance(&env, 604_800);
    client.mint(&bob, &500_000_000);
    client.approve_earner(&carol);
    client.start_earning(&carol);

    client.transfer(&bob, &carol, &500_000_000);
    // credit side rounds principal down
    assert_eq!(client.principal_balance(&carol), 490_502_323);
    assert_eq!(client.balance(&bob), 0);
    assert_eq!(client.total_non_earning_supply(), 0);
    assert_eq!(client.principal_of_earning_supply(), 490_502_323);
}

#[test]
fn test_transfer_both_earning_moves_principal_in_kind() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);
    let dave = Address::generate(&env);

    client.approve_earner(&dave);
    client.start_earning(&dave);

    client.transfer(&alice, &dave, &500_000_000);
    assert_eq!(client.principal_balance(&alice), 490_502_323);
    assert_eq!(client.principal_balance(&dave), 490_502_324);
    // the earning total is preserved exactly
    assert_eq!(client.principal_of_earning_supply(), 981_004_647);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_transfer_exceeding_earning_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, alice) = seven_day_earner(&env, 1_000_000_000);
    let bob = Address::generate(&env);

    client.transfer(&alice, &bob, &1_000_000_001);
}

#[test]
#[should_panic(expected = "Error(Contract, #6)")]
fn test_transfer_to_token_contract() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let bob = Address::generate(&env);

    client.mint(&bob, &1_000);
    client.transfer(&bob, &client.address, &100);
}

// ==================== Allowances ====================

#[test]
fn test_transfer_from_spends_allowance() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);
    let spender = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &1_000);
    client.approve(&alice, &spender, &600, &0);
    assert_eq!(client.allowance(&alice, &spender), 600);

    client.transfer_from(&spender, &alice, &bob, &400);
    assert_eq!(client.balance(&bob), 400);
    assert_eq!(client.allowance(&alice, &spender), 200);
}

#[test]
#[should_panic(expected = "Error(Contract, #12)")]
fn test_transfer_from_exceeding_allowance() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let alice = Address::generate(&env);
    let spender = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &1_000);
    client.approve(&alice, &spender, &300, &0);
    client.transfer_from(&spender, &alice, &bob, &400);
}

// ==================== Closure ====================

#[test]
fn test_accounting_closure_over_mixed_operations() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _, _) = create_token(&env);
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let c = Address::generate(&env);

    client.update_index(&1_000);
    client.mint(&a, &1_000_000_000);
    client.mint(&b, &750_000_000);
    client.mint(&c, &250_000_000);
    client.approve_earner(&a);
    client.approve_earner(&b);

    advance(&env, 2_592_000);
    client.start_earning(&a);

    advance(&env, 864_000);
    client.start_earning(&b);

    advance(&env, 432_000);
    client.transfer(&a, &b, &100_000_000);
    client.transfer(&b, &c, &200_000_000);
    client.transfer(&c, &a, &50_000_000);
    client.burn(&c, &100_000_000);
    client.claim(&a);
    client.stop_earning(&b);

    // principal closure across the earning cohort
    assert_eq!(
        client.principal_of_earning_supply(),
        client.principal_balance(&a) + client.principal_balance(&b)
    );
    // face-value closure across the non-earning cohort
    assert_eq!(
        client.total_non_earning_supply(),
        client.balance(&b) as u128 + client.balance(&c) as u128
    );
    // supply closure across both cohorts
    assert_eq!(
        client.total_supply(),
        client.total_earning_supply() + client.total_non_earning_supply() as i128
    );
}
