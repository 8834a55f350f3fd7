//! A multi-player blackjack round engine.
//!
//! The crate provides a [`Table`] that runs complete rounds — betting with
//! validation re-prompts, a strictly interleaved initial deal with
//! insurance, double-down, and split offers, player hit/stand turns, the
//! fixed dealer automaton, and signed-delta settlement — against any
//! presentation layer implementing [`Frontend`]. The engine never formats
//! text; it exchanges structured snapshots and raw decisions with the
//! frontend and keeps all round state to itself.
//!
//! # Example
//!
//! ```
//! use ventuno::{Table, TableRules};
//!
//! let mut table = Table::new(TableRules::default(), 42);
//! table.add_player("Ada", 1_000).unwrap();
//! assert_eq!(table.player_count(), 1);
//! ```

pub mod card;
pub mod error;
pub mod hand;
pub mod player;
pub mod result;
pub mod rules;
pub mod scoring;
pub mod shoe;
pub mod table;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_ACE, Suit};
pub use error::{InsuranceError, JoinError, RoundError, ShoeError, WagerError};
pub use hand::{DealerHand, Hand};
pub use player::{Chips, Player};
pub use result::{HandSettlement, PlayerSettlement, RoundSummary};
pub use rules::{MAX_BET, MAX_SPLIT_HANDS, MIN_BET, PayoutRatio, TableRules};
pub use shoe::Shoe;
pub use table::settle::{DealerFinal, HandFinal, hand_delta};
pub use table::{RoundPhase, Table};
pub use view::{
    DealerView, Frontend, HandView, PlayerView, RoundEvent, TurnInput, WagerInput, WagerLimits,
};
