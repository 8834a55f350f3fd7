//! Settlement table tests.

use ventuno::{DealerFinal, HandFinal, PayoutRatio, hand_delta};

const PAYOUT: PayoutRatio = PayoutRatio::THREE_TO_TWO;

const fn dealer(total: u8, natural: bool) -> DealerFinal {
    DealerFinal { total, natural }
}

const fn hand(total: u8, natural: bool, wager: i64) -> HandFinal {
    HandFinal {
        total,
        natural,
        wager,
    }
}

#[test]
fn dealer_natural_against_standing_hand() {
    // Insurance pays 2:1, the main wager is lost: -100 + 2 * 50 = 0.
    assert_eq!(hand_delta(dealer(21, true), hand(16, false, 100), 50, PAYOUT), 0);
    // Without insurance only the wager is lost.
    assert_eq!(
        hand_delta(dealer(21, true), hand(16, false, 100), 0, PAYOUT),
        -100
    );
}

#[test]
fn dealer_natural_against_player_natural_pushes() {
    assert_eq!(hand_delta(dealer(21, true), hand(21, true, 100), 0, PAYOUT), 0);
    assert_eq!(
        hand_delta(dealer(21, true), hand(21, true, 100), 50, PAYOUT),
        100
    );
}

#[test]
fn dealer_natural_outranks_player_bust() {
    // Case 1 wins over the bust case: the insurance still pays.
    assert_eq!(hand_delta(dealer(21, true), hand(22, false, 100), 50, PAYOUT), 0);
}

#[test]
fn player_natural_pays_three_to_two() {
    assert_eq!(
        hand_delta(dealer(17, false), hand(21, true, 100), 0, PAYOUT),
        150
    );
    // Insurance is forfeited against a non-natural dealer.
    assert_eq!(
        hand_delta(dealer(17, false), hand(21, true, 100), 40, PAYOUT),
        110
    );
}

#[test]
fn blackjack_payout_is_floored() {
    assert_eq!(hand_delta(dealer(18, false), hand(21, true, 25), 0, PAYOUT), 37);
    assert_eq!(PAYOUT.apply(25), 37);
}

#[test]
fn player_bust_loses_even_against_dealer_bust() {
    assert_eq!(hand_delta(dealer(24, false), hand(22, false, 60), 0, PAYOUT), -60);
    assert_eq!(hand_delta(dealer(17, false), hand(22, false, 60), 0, PAYOUT), -60);
    assert_eq!(
        hand_delta(dealer(17, false), hand(22, false, 60), 20, PAYOUT),
        -80
    );
}

#[test]
fn dealer_bust_pays_the_wager() {
    assert_eq!(hand_delta(dealer(22, false), hand(12, false, 80), 0, PAYOUT), 80);
}

#[test]
fn higher_total_wins_lower_total_loses() {
    assert_eq!(hand_delta(dealer(18, false), hand(20, false, 75), 0, PAYOUT), 75);
    assert_eq!(
        hand_delta(dealer(20, false), hand(18, false, 75), 0, PAYOUT),
        -75
    );
}

#[test]
fn push_returns_the_wager() {
    assert_eq!(hand_delta(dealer(19, false), hand(19, false, 100), 0, PAYOUT), 0);
    // Only the insurance is forfeited on a push.
    assert_eq!(
        hand_delta(dealer(19, false), hand(19, false, 100), 30, PAYOUT),
        -30
    );
}

#[test]
fn three_card_twenty_one_is_not_a_natural() {
    // A 21 reached by hitting wins but does not earn the bonus payout.
    assert_eq!(
        hand_delta(dealer(20, false), hand(21, false, 100), 0, PAYOUT),
        100
    );
}

#[test]
fn settlement_is_a_pure_function_of_its_inputs() {
    let d = dealer(20, false);
    let h = hand(19, false, 100);
    assert_eq!(hand_delta(d, h, 10, PAYOUT), hand_delta(d, h, 10, PAYOUT));
}
