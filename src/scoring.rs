//! Hand scoring.

use crate::card::{Card, RANK_ACE};

/// Points a rank contributes before Ace adjustment.
const fn rank_points(rank: u8) -> u8 {
    match rank {
        RANK_ACE => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Computes the best blackjack total for `cards`.
///
/// Each Ace counts as 11 when that keeps the total at 21 or below, otherwise
/// as 1. When every interpretation busts, the minimum total is returned.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(rank_points(card.rank));
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}
