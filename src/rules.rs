//! Table configuration.

use core::fmt;

use crate::card::DECK_SIZE;
use crate::player::Chips;

/// Default minimum wager.
pub const MIN_BET: Chips = 20;

/// Default maximum wager.
pub const MAX_BET: Chips = 500;

/// Default cap on hands per player per round, counting splits.
pub const MAX_SPLIT_HANDS: usize = 4;

/// A blackjack payout expressed as an integer ratio.
///
/// Winnings are `wager * numerator / denominator`, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRatio {
    /// Payout numerator.
    pub numerator: Chips,
    /// Payout denominator.
    pub denominator: Chips,
}

impl PayoutRatio {
    /// The conventional 3:2 blackjack payout.
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };

    /// Applies the ratio to `wager`, flooring the result.
    #[must_use]
    pub const fn apply(&self, wager: Chips) -> Chips {
        wager * self.numerator / self.denominator
    }
}

impl fmt::Display for PayoutRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Immutable configuration for one table.
///
/// Passed to the engine at construction so independent tables and tests can
/// run with different rules side by side.
///
/// ```
/// use ventuno::TableRules;
///
/// let rules = TableRules::default().with_decks(6);
/// assert_eq!(rules.decks, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRules {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Smallest wager the table accepts.
    pub min_bet: Chips,
    /// Largest wager the table accepts.
    pub max_bet: Chips,
    /// Payout for a natural blackjack.
    pub blackjack_payout: PayoutRatio,
    /// Cap on hands per player per round.
    pub max_hands: usize,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            decks: 2,
            min_bet: MIN_BET,
            max_bet: MAX_BET,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
            max_hands: MAX_SPLIT_HANDS,
        }
    }
}

impl TableRules {
    /// Sets the number of decks.
    ///
    /// ```
    /// use ventuno::TableRules;
    ///
    /// let rules = TableRules::default().with_decks(4);
    /// assert_eq!(rules.decks, 4);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the wager bounds.
    ///
    /// ```
    /// use ventuno::TableRules;
    ///
    /// let rules = TableRules::default().with_bet_limits(5, 1_000);
    /// assert_eq!((rules.min_bet, rules.max_bet), (5, 1_000));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min: Chips, max: Chips) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// ```
    /// use ventuno::{PayoutRatio, TableRules};
    ///
    /// let even = PayoutRatio { numerator: 1, denominator: 1 };
    /// let rules = TableRules::default().with_blackjack_payout(even);
    /// assert_eq!(rules.blackjack_payout.apply(100), 100);
    /// ```
    #[must_use]
    pub const fn with_blackjack_payout(mut self, payout: PayoutRatio) -> Self {
        self.blackjack_payout = payout;
        self
    }

    /// Sets the per-player hand cap.
    ///
    /// ```
    /// use ventuno::TableRules;
    ///
    /// let rules = TableRules::default().with_max_hands(2);
    /// assert_eq!(rules.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Total cards in a full shoe under these rules.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Remaining-card count at or below which the shoe is reshuffled at
    /// round end: a third of the full shoe.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> usize {
        self.total_cards() / 3
    }
}
