//! The round engine.

use log::info;

use crate::card::Card;
use crate::error::{JoinError, RoundError};
use crate::hand::DealerHand;
use crate::player::{Chips, Player};
use crate::result::RoundSummary;
use crate::rules::TableRules;
use crate::shoe::Shoe;
use crate::view::{DealerView, Frontend, HandView, PlayerView, RoundEvent};

mod betting;
mod dealing;
pub mod phase;
pub mod settle;
mod turns;

pub use phase::RoundPhase;

/// A blackjack table: the players seated at it, the shoe, the dealer's hand,
/// and the round engine that drives them.
///
/// [`Table::play_round`] runs one full round lifecycle — betting, the
/// interleaved initial deal with insurance/double-down/split offers, player
/// turns, the dealer automaton, settlement, and cleanup — blocking on the
/// supplied [`Frontend`] at every decision point. Player bankrolls are the
/// only state that survives from one round to the next.
#[derive(Debug)]
pub struct Table {
    rules: TableRules,
    shoe: Shoe,
    players: Vec<Player>,
    dealer: DealerHand,
    phase: RoundPhase,
}

impl Table {
    /// Creates a table with the given rules and shoe seed.
    #[must_use]
    pub fn new(rules: TableRules, seed: u64) -> Self {
        let shoe = Shoe::new(rules.decks, seed);
        Self {
            rules,
            shoe,
            players: Vec::new(),
            dealer: DealerHand::new(),
            phase: RoundPhase::Idle,
        }
    }

    /// The table's rules.
    #[must_use]
    pub const fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// The current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Seats a player with a starting bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::RoundInProgress`] unless the table is idle.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        money: Chips,
    ) -> Result<(), JoinError> {
        if self.phase != RoundPhase::Idle {
            return Err(JoinError::RoundInProgress);
        }
        self.players.push(Player::new(name, money));
        Ok(())
    }

    /// Removes the named player between rounds.
    ///
    /// Returns whether a player of that name was seated. Leaving mid-round
    /// happens through the [`Frontend`] prompts instead.
    pub fn remove_player(&mut self, name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.name() != name);
        self.players.len() != before
    }

    /// The seated players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Replaces the shoe contents for deterministic rounds; see
    /// [`Shoe::load`].
    pub fn load_shoe(&mut self, cards: Vec<Card>) {
        self.shoe.load(cards);
    }

    /// Runs one full round.
    ///
    /// Blocks on `io` for every wager, insurance, double-down, split, and
    /// hit/stand decision; invalid or out-of-range input is reported through
    /// an event and re-prompted. Returns the settlement summary once the
    /// round completes.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoPlayers`] when nobody is seated (or everyone
    /// leaves during betting), and [`RoundError::Shoe`] if the shoe runs dry
    /// mid-deal — the round-end reshuffle makes that unreachable unless the
    /// table is misconfigured. On error all transient round state has been
    /// cleared.
    pub fn play_round(&mut self, io: &mut dyn Frontend) -> Result<RoundSummary, RoundError> {
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        self.phase = RoundPhase::Betting;
        info!(
            "round starting with {} players, {} cards in the shoe",
            self.players.len(),
            self.shoe.remaining()
        );
        io.event(&RoundEvent::RoundStarted {
            players: self.players.len(),
            decks: self.shoe.deck_count(),
            cards_remaining: self.shoe.remaining(),
        });
        io.pause();

        self.collect_wagers(io);
        if self.players.is_empty() {
            self.phase = RoundPhase::Idle;
            return Err(RoundError::NoPlayers);
        }

        if let Err(err) = self.deal_and_play(io) {
            self.abort_round();
            return Err(err);
        }

        self.phase = RoundPhase::Settlement;
        let mut summary = self.settle(io);
        summary.reshuffled = self.end_round(io);
        self.phase = RoundPhase::Idle;
        Ok(summary)
    }

    fn deal_and_play(&mut self, io: &mut dyn Frontend) -> Result<(), RoundError> {
        self.phase = RoundPhase::InitialDeal;
        self.deal_initial(io)?;
        self.phase = RoundPhase::PlayerTurns;
        self.player_turns(io)?;
        self.phase = RoundPhase::DealerTurn;
        self.dealer_turn(io)
    }

    /// Clears transient state after a fatal mid-round error.
    fn abort_round(&mut self) {
        for player in &mut self.players {
            player.clear_round();
        }
        self.dealer.clear();
        self.phase = RoundPhase::Idle;
    }

    /// Clears transient state and reshuffles a depleted shoe. Returns
    /// whether a reshuffle happened.
    fn end_round(&mut self, io: &mut dyn Frontend) -> bool {
        for player in &mut self.players {
            player.clear_round();
        }
        self.dealer.clear();

        let mut reshuffled = false;
        if self.shoe.remaining() <= self.rules.reshuffle_threshold() {
            self.shoe.reshuffle();
            reshuffled = true;
            info!("shoe reshuffled, {} cards", self.shoe.remaining());
            io.event(&RoundEvent::Reshuffled {
                cards_remaining: self.shoe.remaining(),
            });
            io.pause();
        }

        io.event(&RoundEvent::RoundEnded);
        io.pause();
        reshuffled
    }

    /// Removes the player at `index` mid-round, forfeiting their wagers.
    fn depart(&mut self, index: usize, io: &mut dyn Frontend) {
        let mut player = self.players.remove(index);
        let forfeited = player.total_wager() + player.insurance().unwrap_or(0);
        player.add_money(-forfeited);
        info!("{} left the table, forfeiting {forfeited}", player.name());
        io.event(&RoundEvent::LeftTable {
            player: player.name().to_owned(),
            forfeited,
        });
        io.pause();
    }

    fn player_view(&self, index: usize) -> PlayerView {
        PlayerView::of(&self.players[index])
    }

    fn hand_view(&self, index: usize, hand_index: usize) -> HandView {
        HandView::of(&self.players[index].hands()[hand_index])
    }

    fn dealer_view(&self) -> DealerView {
        DealerView::of(&self.dealer)
    }
}
