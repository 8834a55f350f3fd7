//! The presentation boundary.
//!
//! The engine never formats text or touches a display surface. It hands the
//! presentation layer structured snapshots through [`RoundEvent`] and pulls
//! raw decisions back through [`Frontend`]. Range validation lives in the
//! engine; a rejected input produces an event and the prompt is repeated.

use crate::card::Card;
use crate::error::{InsuranceError, WagerError};
use crate::hand::{DealerHand, Hand};
use crate::player::{Chips, Player};

/// A raw amount entry from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WagerInput {
    /// A parsed amount. May still be out of range; the engine decides.
    Amount(Chips),
    /// Unparseable input. The engine reports it and asks again.
    Invalid,
    /// The player leaves the table, forfeiting anything already wagered.
    Leave,
}

/// A raw hit/stand entry from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnInput {
    /// Draw one more card.
    Hit,
    /// End the turn for this hand.
    Stand,
    /// Unrecognized input. The engine reports it and asks again.
    Invalid,
    /// The player leaves the table, forfeiting their wagers.
    Leave,
}

/// The wager bounds shown alongside a bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WagerLimits {
    /// Smallest acceptable wager.
    pub min: Chips,
    /// Largest acceptable wager.
    pub max: Chips,
}

/// Snapshot of a player for prompts and events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// The player's name.
    pub name: String,
    /// The player's bankroll.
    pub money: Chips,
}

impl PlayerView {
    pub(crate) fn of(player: &Player) -> Self {
        Self {
            name: player.name().to_owned(),
            money: player.money(),
        }
    }
}

/// Snapshot of one player hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Current total.
    pub total: u8,
    /// Wager riding on the hand.
    pub wager: Chips,
    /// Whether the hand has been doubled down.
    pub doubled: bool,
}

impl HandView {
    pub(crate) fn of(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            total: hand.total(),
            wager: hand.wager(),
            doubled: hand.is_doubled(),
        }
    }
}

/// Snapshot of the dealer's hand.
///
/// While `hole_revealed` is false the presentation layer is expected to show
/// only the up-card and `visible_total`; the full hand is carried so the
/// reveal needs no second query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerView {
    /// All cards, including the hole card.
    pub cards: Vec<Card>,
    /// The face-up card.
    pub up_card: Option<Card>,
    /// Whether the hole card has been revealed.
    pub hole_revealed: bool,
    /// The full total.
    pub total: u8,
    /// The total derivable from face-up cards alone.
    pub visible_total: u8,
}

impl DealerView {
    pub(crate) fn of(dealer: &DealerHand) -> Self {
        Self {
            cards: dealer.cards().to_vec(),
            up_card: dealer.up_card().copied(),
            hole_revealed: dealer.is_hole_revealed(),
            total: dealer.total(),
            visible_total: dealer.visible_total(),
        }
    }
}

/// Everything the engine tells the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A round has begun.
    RoundStarted {
        /// Players seated when betting opened.
        players: usize,
        /// Decks the shoe was built from.
        decks: u8,
        /// Cards left in the shoe.
        cards_remaining: usize,
    },
    /// A wager was rejected; the prompt will be repeated.
    WagerRejected {
        /// The player whose wager was rejected.
        player: String,
        /// Why it was rejected.
        reason: WagerError,
    },
    /// A wager was accepted.
    WagerPlaced {
        /// The betting player.
        player: String,
        /// The accepted amount.
        wager: Chips,
    },
    /// The player's bankroll fell below the table minimum, so their entire
    /// balance was wagered without consulting them.
    ForcedAllIn {
        /// The short-stacked player.
        player: String,
        /// Their full remaining balance.
        wager: Chips,
    },
    /// A card was dealt to a player hand.
    PlayerCard {
        /// The receiving player.
        player: String,
        /// Which of their hands received it.
        hand_index: usize,
        /// The hand after the deal.
        hand: HandView,
    },
    /// A card was dealt to the dealer.
    DealerCard {
        /// The dealer's hand after the deal.
        dealer: DealerView,
    },
    /// A player had no money left after their wager, so insurance was not
    /// offered to them.
    InsuranceSkipped {
        /// The player passed over.
        player: String,
    },
    /// An insurance wager was rejected; the prompt will be repeated.
    InsuranceRejected {
        /// The player whose insurance was rejected.
        player: String,
        /// Why it was rejected.
        reason: InsuranceError,
    },
    /// An insurance wager was accepted.
    InsurancePlaced {
        /// The insuring player.
        player: String,
        /// The accepted amount.
        wager: Chips,
    },
    /// A hand's wager was doubled; it will receive exactly one more card
    /// during the player's turn.
    DoubledDown {
        /// The doubling player.
        player: String,
        /// The doubled hand.
        hand_index: usize,
        /// The wager after doubling.
        wager: Chips,
    },
    /// A pair was split into two hands.
    Split {
        /// The splitting player.
        player: String,
        /// The hand that was split.
        hand_index: usize,
        /// How many hands the player now holds.
        hand_count: usize,
    },
    /// A player's hit/stand turn has begun.
    TurnStarted {
        /// The player up.
        player: String,
    },
    /// A hand is a natural blackjack and takes no further action.
    Natural {
        /// The lucky player.
        player: String,
        /// The natural hand.
        hand_index: usize,
    },
    /// A hand went over 21.
    Busted {
        /// The busting player.
        player: String,
        /// The busted hand.
        hand_index: usize,
        /// Its final total.
        total: u8,
    },
    /// A hand's turn ended at or below 21.
    Stood {
        /// The standing player.
        player: String,
        /// The standing hand.
        hand_index: usize,
        /// Its final total.
        total: u8,
    },
    /// A hit/stand entry was not understood; the prompt will be repeated.
    InvalidTurnInput {
        /// The player re-prompted.
        player: String,
    },
    /// A player left mid-round.
    LeftTable {
        /// The departing player.
        player: String,
        /// Wagers and insurance forfeited on the way out.
        forfeited: Chips,
    },
    /// The dealer revealed the hole card and began playing.
    DealerTurn {
        /// The revealed hand.
        dealer: DealerView,
    },
    /// The dealer's two cards are a natural blackjack.
    DealerNatural,
    /// The dealer drew a card.
    DealerHit {
        /// The hand after the draw.
        dealer: DealerView,
    },
    /// The dealer stood.
    DealerStood {
        /// The dealer's final total.
        total: u8,
    },
    /// The dealer went over 21.
    DealerBusted {
        /// The dealer's final total.
        total: u8,
    },
    /// One hand was settled against the dealer.
    HandSettled {
        /// The hand's owner.
        player: String,
        /// Which hand.
        hand_index: usize,
        /// The hand as settled.
        hand: HandView,
        /// Signed money movement for the hand, insurance included.
        delta: Chips,
    },
    /// A player ran out of money and was removed from the table.
    PlayerEvicted {
        /// The departing player.
        player: String,
    },
    /// The shoe was rebuilt and reshuffled at round end.
    Reshuffled {
        /// Cards in the fresh shoe.
        cards_remaining: usize,
    },
    /// The round is over and transient state has been cleared.
    RoundEnded,
}

/// The presentation layer as the engine sees it.
///
/// Decision methods block until the user answers; the engine re-asks on
/// invalid or out-of-range input. Yes/no questions arrive pre-validated
/// because re-reading a key is the presentation layer's business, while
/// amount and action entries may come back `Invalid` so the engine can
/// report *why* they were refused.
pub trait Frontend {
    /// Asks `player` for a wager within `limits`.
    fn wager(&mut self, player: &PlayerView, limits: WagerLimits) -> WagerInput;

    /// Asks `player` whether they want insurance.
    fn insurance_offer(&mut self, player: &PlayerView) -> bool;

    /// Asks `player` for an insurance amount between 1 and `max`.
    fn insurance_wager(&mut self, player: &PlayerView, max: Chips) -> WagerInput;

    /// Asks `player` whether to double down on `hand`.
    fn double_down_offer(&mut self, player: &PlayerView, hand: &HandView) -> bool;

    /// Asks `player` whether to split `hand`.
    fn split_offer(&mut self, player: &PlayerView, hand: &HandView) -> bool;

    /// Asks `player` to hit or stand on the hand at `hand_index`.
    fn turn_action(
        &mut self,
        player: &PlayerView,
        hand_index: usize,
        hand: &HandView,
    ) -> TurnInput;

    /// Receives a structured snapshot to render.
    fn event(&mut self, event: &RoundEvent);

    /// Synchronous pacing acknowledgment between steps. Defaults to a no-op.
    fn pause(&mut self) {}
}
