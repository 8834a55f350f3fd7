//! Player and dealer hand representations.

use crate::card::Card;
use crate::player::Chips;
use crate::scoring;

/// One of a player's hands.
///
/// A player starts a round with a single hand and may grow up to the table's
/// hand cap by splitting pairs. The total is cached and refreshed on every
/// card added.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    wager: Chips,
    doubled: bool,
    total: u8,
}

impl Hand {
    /// Creates an empty hand carrying `wager`.
    #[must_use]
    pub const fn new(wager: Chips) -> Self {
        Self {
            cards: Vec::new(),
            wager,
            doubled: false,
            total: 0,
        }
    }

    /// Creates a one-card hand produced by a split, carrying the original
    /// hand's wager.
    #[must_use]
    pub fn from_split(card: Card, wager: Chips) -> Self {
        let total = scoring::score(&[card]);
        Self {
            cards: vec![card],
            wager,
            doubled: false,
            total,
        }
    }

    /// Adds a card and refreshes the cached total.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.total = scoring::score(&self.cards);
    }

    /// Removes and returns the second card so it can seed a split hand.
    ///
    /// Returns `None` unless the hand holds exactly two cards.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() != 2 {
            return None;
        }
        let card = self.cards.pop();
        self.total = scoring::score(&self.cards);
        card
    }

    /// The cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cached total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// The wager riding on this hand.
    #[must_use]
    pub const fn wager(&self) -> Chips {
        self.wager
    }

    /// Doubles the wager and marks the hand as doubled down.
    pub const fn double_down(&mut self) {
        self.wager *= 2;
        self.doubled = true;
    }

    /// Whether the hand has been doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Whether the hand is a natural: exactly two cards totaling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total == 21
    }

    /// Whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Whether the hand is a splittable pair: two cards of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The second card stays face down until the dealer's turn; the engine flips
/// `hole_revealed` and the presentation layer decides how to render the
/// hidden card.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
    total: u8,
}

impl DealerHand {
    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
            total: 0,
        }
    }

    /// Adds a card and refreshes the cached total.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.total = scoring::score(&self.cards);
    }

    /// All cards, including the hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The face-up card dealt first.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// The full cached total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// The total a player can see: the full total once the hole card is
    /// revealed, otherwise only the up-card's points.
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        if self.hole_revealed {
            self.total
        } else {
            self.cards.first().map_or(0, |c| scoring::score(&[*c]))
        }
    }

    /// Whether the hand is a natural: exactly two cards totaling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total == 21
    }

    /// Whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
        self.total = 0;
    }
}
