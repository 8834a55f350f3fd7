use log::debug;

use crate::card::Card;
use crate::error::{InsuranceError, RoundError};
use crate::hand::Hand;
use crate::view::{Frontend, RoundEvent, WagerInput};

use super::{RoundPhase, Table};

impl Table {
    /// Deals the initial two cards to everyone, strictly interleaved: every
    /// player's first card, the dealer's up-card, then — after the insurance
    /// window, if the up-card is an Ace — every player's second cards with
    /// their double-down/split decision points, and finally the dealer's
    /// hole card.
    pub(super) fn deal_initial(&mut self, io: &mut dyn Frontend) -> Result<(), RoundError> {
        for index in 0..self.players.len() {
            self.deal_player_card(index, 0, io)?;
        }
        self.deal_dealer_card(io)?;

        if self.dealer.up_card().is_some_and(Card::is_ace) {
            self.phase = RoundPhase::InsuranceOffer;
            self.offer_insurance(io);
            self.phase = RoundPhase::InitialDeal;
        }

        for index in 0..self.players.len() {
            self.deal_second_cards(index, io)?;
        }
        self.deal_dealer_card(io)
    }

    pub(super) fn deal_player_card(
        &mut self,
        index: usize,
        hand_index: usize,
        io: &mut dyn Frontend,
    ) -> Result<(), RoundError> {
        let card = self.shoe.draw()?;
        let player = &mut self.players[index];
        player.hand_mut(hand_index).push(card);
        debug!(
            "dealt {card:?} to {} hand {hand_index}, total {}",
            player.name(),
            player.hands()[hand_index].total()
        );
        io.event(&RoundEvent::PlayerCard {
            player: self.players[index].name().to_owned(),
            hand_index,
            hand: self.hand_view(index, hand_index),
        });
        Ok(())
    }

    fn deal_dealer_card(&mut self, io: &mut dyn Frontend) -> Result<(), RoundError> {
        let card = self.shoe.draw()?;
        self.dealer.push(card);
        io.event(&RoundEvent::DealerCard {
            dealer: self.dealer_view(),
        });
        io.pause();
        Ok(())
    }

    /// Offers insurance to every player still holding uncommitted money.
    fn offer_insurance(&mut self, io: &mut dyn Frontend) {
        let mut index = 0;
        while index < self.players.len() {
            if self.offer_insurance_to(index, io) {
                index += 1;
            } else {
                self.depart(index, io);
            }
        }
    }

    /// Returns `false` when the player leaves at the insurance prompt.
    fn offer_insurance_to(&mut self, index: usize, io: &mut dyn Frontend) -> bool {
        let player = &self.players[index];
        let wager = player.hands()[0].wager();
        let headroom = player.money() - wager;
        let view = self.player_view(index);

        if headroom == 0 {
            io.event(&RoundEvent::InsuranceSkipped { player: view.name });
            io.pause();
            return true;
        }
        if !io.insurance_offer(&view) {
            return true;
        }

        let max = wager / 2;
        loop {
            let reason = match io.insurance_wager(&view, max) {
                WagerInput::Amount(amount) if amount < 1 => InsuranceError::BelowMinimum,
                WagerInput::Amount(amount) if amount > max => {
                    InsuranceError::AboveHalfWager { max }
                }
                WagerInput::Amount(amount) if amount > headroom => {
                    InsuranceError::InsufficientFunds
                }
                WagerInput::Amount(amount) => {
                    self.players[index].set_insurance(amount);
                    debug!("{} insures for {amount}", view.name);
                    io.event(&RoundEvent::InsurancePlaced {
                        player: view.name,
                        wager: amount,
                    });
                    io.pause();
                    return true;
                }
                WagerInput::Invalid => InsuranceError::NotANumber,
                WagerInput::Leave => return false,
            };
            io.event(&RoundEvent::InsuranceRejected {
                player: view.name.clone(),
                reason,
            });
        }
    }

    /// Completes every one-card hand of the player to two cards, running
    /// the double-down/split decision point as each hand fills. Splits grow
    /// the hand list mid-loop, so the scan repeats until nothing is short.
    fn deal_second_cards(&mut self, index: usize, io: &mut dyn Frontend) -> Result<(), RoundError> {
        loop {
            let Some(hand_index) = self.players[index]
                .hands()
                .iter()
                .position(|hand| hand.len() < 2)
            else {
                return Ok(());
            };
            self.deal_player_card(index, hand_index, io)?;
            self.offer_hand_options(index, hand_index, io);
        }
    }

    /// The decision point for a freshly completed two-card hand: double
    /// down, else split. Skipped outright on a natural 21 or when the
    /// player's bankroll cannot cover another wager of this size.
    fn offer_hand_options(&mut self, index: usize, hand_index: usize, io: &mut dyn Frontend) {
        let player = &self.players[index];
        let hand = &player.hands()[hand_index];

        if hand.total() == 21 {
            io.pause();
            return;
        }
        if hand.wager() + player.total_wager() > player.money() {
            io.pause();
            return;
        }

        let view = self.player_view(index);
        let hand_view = self.hand_view(index, hand_index);

        if io.double_down_offer(&view, &hand_view) {
            let hand = self.players[index].hand_mut(hand_index);
            hand.double_down();
            let wager = hand.wager();
            debug!("{} doubles down on hand {hand_index}", view.name);
            io.event(&RoundEvent::DoubledDown {
                player: view.name,
                hand_index,
                wager,
            });
            io.pause();
            return;
        }

        let player = &self.players[index];
        let hand = &player.hands()[hand_index];
        if hand.is_pair()
            && player.hands().len() < self.rules.max_hands
            && io.split_offer(&view, &hand_view)
        {
            self.split_hand(index, hand_index, io);
        }
    }

    /// Moves the pair's second card into a new hand appended after the
    /// existing ones; the dealing loop completes both to two cards.
    fn split_hand(&mut self, index: usize, hand_index: usize, io: &mut dyn Frontend) {
        let player = &mut self.players[index];
        let wager = player.hands()[hand_index].wager();
        let Some(card) = player.hand_mut(hand_index).take_split_card() else {
            return;
        };
        player.push_hand(Hand::from_split(card, wager));
        let hand_count = player.hands().len();
        debug!("{} splits hand {hand_index} into {hand_count} hands", player.name());
        io.event(&RoundEvent::Split {
            player: player.name().to_owned(),
            hand_index,
            hand_count,
        });
        io.pause();
    }
}
