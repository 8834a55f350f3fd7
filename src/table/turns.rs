use log::{debug, info};

use crate::error::RoundError;
use crate::view::{Frontend, RoundEvent, TurnInput};

use super::Table;

/// How a hand's turn ended.
enum HandFlow {
    /// Move on to the next hand.
    Continue,
    /// The player left the table mid-turn.
    Left,
}

impl Table {
    /// Runs every player's turn, hand by hand in creation order.
    pub(super) fn player_turns(&mut self, io: &mut dyn Frontend) -> Result<(), RoundError> {
        let mut index = 0;
        while index < self.players.len() {
            io.event(&RoundEvent::TurnStarted {
                player: self.players[index].name().to_owned(),
            });

            let mut left = false;
            let mut hand_index = 0;
            while hand_index < self.players[index].hands().len() {
                match self.play_hand(index, hand_index, io)? {
                    HandFlow::Continue => hand_index += 1,
                    HandFlow::Left => {
                        left = true;
                        break;
                    }
                }
            }

            if left {
                self.depart(index, io);
            } else {
                index += 1;
            }
        }
        Ok(())
    }

    /// Plays one hand: a natural resolves untouched, a doubled hand draws
    /// exactly one card, anything else runs the hit/stand loop until the
    /// hand stands, reaches 21, or busts.
    fn play_hand(
        &mut self,
        index: usize,
        hand_index: usize,
        io: &mut dyn Frontend,
    ) -> Result<HandFlow, RoundError> {
        let name = self.players[index].name().to_owned();
        let hand = &self.players[index].hands()[hand_index];

        if hand.is_natural() {
            io.event(&RoundEvent::Natural {
                player: name,
                hand_index,
            });
            io.pause();
            return Ok(HandFlow::Continue);
        }

        if hand.is_doubled() {
            self.deal_player_card(index, hand_index, io)?;
            let hand = &self.players[index].hands()[hand_index];
            let total = hand.total();
            if hand.is_bust() {
                io.event(&RoundEvent::Busted {
                    player: name,
                    hand_index,
                    total,
                });
            } else {
                io.event(&RoundEvent::Stood {
                    player: name,
                    hand_index,
                    total,
                });
            }
            io.pause();
            return Ok(HandFlow::Continue);
        }

        self.players[index].set_turn(true);
        while self.players[index].is_turn() {
            let view = self.player_view(index);
            let hand_view = self.hand_view(index, hand_index);
            let total = hand_view.total;

            if total > 21 {
                self.players[index].set_turn(false);
                io.event(&RoundEvent::Busted {
                    player: view.name,
                    hand_index,
                    total,
                });
                io.pause();
            } else if total == 21 {
                self.players[index].set_turn(false);
                io.event(&RoundEvent::Stood {
                    player: view.name,
                    hand_index,
                    total,
                });
                io.pause();
            } else {
                match io.turn_action(&view, hand_index, &hand_view) {
                    TurnInput::Hit => self.deal_player_card(index, hand_index, io)?,
                    TurnInput::Stand => {
                        self.players[index].set_turn(false);
                        io.event(&RoundEvent::Stood {
                            player: view.name,
                            hand_index,
                            total,
                        });
                        io.pause();
                    }
                    TurnInput::Invalid => {
                        io.event(&RoundEvent::InvalidTurnInput { player: view.name });
                    }
                    TurnInput::Leave => {
                        self.players[index].set_turn(false);
                        return Ok(HandFlow::Left);
                    }
                }
            }
        }
        Ok(HandFlow::Continue)
    }

    /// Reveals the hole card and runs the dealer automaton: an immediate
    /// stop on a natural, otherwise hit on 16 or less, stand on 17 or more,
    /// bust over 21.
    pub(super) fn dealer_turn(&mut self, io: &mut dyn Frontend) -> Result<(), RoundError> {
        self.dealer.reveal_hole();
        io.event(&RoundEvent::DealerTurn {
            dealer: self.dealer_view(),
        });
        io.pause();

        if self.dealer.is_natural() {
            info!("dealer has a natural");
            io.event(&RoundEvent::DealerNatural);
            io.pause();
            return Ok(());
        }

        loop {
            let total = self.dealer.total();
            if total > 21 {
                info!("dealer busts at {total}");
                io.event(&RoundEvent::DealerBusted { total });
                io.pause();
                return Ok(());
            }
            if total >= 17 {
                info!("dealer stands at {total}");
                io.event(&RoundEvent::DealerStood { total });
                io.pause();
                return Ok(());
            }

            let card = self.shoe.draw()?;
            self.dealer.push(card);
            debug!("dealer hits, total {}", self.dealer.total());
            io.event(&RoundEvent::DealerHit {
                dealer: self.dealer_view(),
            });
            io.pause();
        }
    }
}
