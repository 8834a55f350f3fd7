//! Round settlement summaries.

use crate::player::Chips;

/// Settlement for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSettlement {
    /// The hand index in creation order.
    pub hand_index: usize,
    /// The hand's final total.
    pub total: u8,
    /// Whether the hand was a natural.
    pub natural: bool,
    /// The wager riding on the hand (doubled if doubled down).
    pub wager: Chips,
    /// Signed money movement for the hand, insurance included.
    pub delta: Chips,
}

/// Settlement for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSettlement {
    /// The player's name.
    pub name: String,
    /// Per-hand settlements in creation order.
    pub hands: Vec<HandSettlement>,
    /// The insurance wager, 0 if none was placed.
    pub insurance_wager: Chips,
    /// Net money movement across all hands.
    pub net: Chips,
    /// Bankroll after the deltas were applied.
    pub money_after: Chips,
    /// Whether the player ran out of money and was removed.
    pub evicted: bool,
}

/// Settlement for a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Per-player settlements in join order.
    pub players: Vec<PlayerSettlement>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer had a natural.
    pub dealer_natural: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the shoe was reshuffled at round end.
    pub reshuffled: bool,
}

impl RoundSummary {
    /// Names of the players who came out ahead this round.
    #[must_use]
    pub fn winners(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| p.net > 0)
            .map(|p| p.name.as_str())
            .collect()
    }
}
