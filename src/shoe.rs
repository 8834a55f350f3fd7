//! The multi-deck shoe the engine draws from.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::error::ShoeError;

/// A shoe of one or more shuffled decks.
///
/// The shoe owns its RNG, seeded at construction, so a given seed always
/// produces the same card order.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    deck_count: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe with `deck_count` full decks, shuffled.
    #[must_use]
    pub fn new(deck_count: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::fill(deck_count, &mut rng);
        Self {
            cards,
            deck_count,
            rng,
        }
    }

    fn fill(deck_count: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

        for _ in 0..deck_count {
            for suit in SUITS {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] when the shoe is exhausted. The engine
    /// reshuffles at round end before this can happen in normal play.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Number of decks this shoe was configured with.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Total cards in a full shoe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.deck_count as usize * DECK_SIZE
    }

    /// Discards the remaining cards and rebuilds a full, freshly shuffled
    /// shoe.
    pub fn reshuffle(&mut self) {
        self.cards = Self::fill(self.deck_count, &mut self.rng);
    }

    /// Replaces the shoe contents with `cards`.
    ///
    /// Cards are drawn from the back, so the last element is the next card
    /// dealt. Intended for deterministic tests and replays.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
