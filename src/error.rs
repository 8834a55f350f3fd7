//! Error and rejection types.
//!
//! Invalid interactive input never fails a round: the engine reports the
//! reason through a [`RoundEvent`](crate::view::RoundEvent) and asks again.
//! Only the fatal conditions in [`RoundError`] abort a round.

use thiserror::Error;

use crate::player::Chips;

/// Reasons a wager is rejected during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Input could not be read as a number.
    #[error("the wager must be a number")]
    NotANumber,
    /// Wager below the table minimum.
    #[error("must wager at least {min}")]
    BelowMinimum {
        /// The table minimum.
        min: Chips,
    },
    /// Wager above the table maximum.
    #[error("cannot wager more than {max}")]
    AboveMaximum {
        /// The table maximum.
        max: Chips,
    },
    /// Wager above the player's bankroll.
    #[error("not enough money for that wager")]
    InsufficientFunds,
}

/// Reasons an insurance wager is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Input could not be read as a number.
    #[error("the insurance wager must be a number")]
    NotANumber,
    /// Insurance wagers start at 1.
    #[error("cannot insure for less than 1")]
    BelowMinimum,
    /// Insurance is capped at half the original wager.
    #[error("cannot insure for more than {max}")]
    AboveHalfWager {
        /// Half the original wager, floored.
        max: Chips,
    },
    /// Money left after the main wager does not cover the insurance.
    #[error("not enough money left for that insurance wager")]
    InsufficientFunds,
}

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players may only join between rounds.
    #[error("cannot join while a round is in progress")]
    RoundInProgress,
}

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe has no cards left.
    #[error("the shoe is out of cards")]
    Empty,
}

/// Fatal errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round cannot start with zero participants.
    #[error("no players at the table")]
    NoPlayers,
    /// The shoe ran dry mid-deal. The round-end reshuffle prevents this in
    /// normal play, so hitting it means the table is misconfigured.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
