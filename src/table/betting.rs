use log::debug;

use crate::error::WagerError;
use crate::hand::Hand;
use crate::player::Chips;
use crate::view::{Frontend, RoundEvent, WagerInput, WagerLimits};

use super::Table;

impl Table {
    /// Collects a valid wager from every player in join order, opening one
    /// hand per player. Players may leave instead of betting.
    pub(super) fn collect_wagers(&mut self, io: &mut dyn Frontend) {
        let mut index = 0;
        while index < self.players.len() {
            match self.prompt_wager(index, io) {
                Some(wager) => {
                    let player = &mut self.players[index];
                    player.push_hand(Hand::new(wager));
                    debug!("{} wagers {wager}", player.name());
                    io.event(&RoundEvent::WagerPlaced {
                        player: player.name().to_owned(),
                        wager,
                    });
                    index += 1;
                }
                None => self.depart(index, io),
            }
        }
    }

    /// Prompts until the wager satisfies the table bounds and the player's
    /// bankroll. Returns `None` when the player leaves instead.
    ///
    /// A bankroll below the table minimum is wagered whole without asking.
    fn prompt_wager(&mut self, index: usize, io: &mut dyn Frontend) -> Option<Chips> {
        let limits = WagerLimits {
            min: self.rules.min_bet,
            max: self.rules.max_bet,
        };
        let view = self.player_view(index);
        let money = view.money;

        if money < limits.min {
            io.event(&RoundEvent::ForcedAllIn {
                player: view.name,
                wager: money,
            });
            io.pause();
            return Some(money);
        }

        loop {
            let reason = match io.wager(&view, limits) {
                WagerInput::Amount(wager) if wager < limits.min => WagerError::BelowMinimum {
                    min: limits.min,
                },
                WagerInput::Amount(wager) if wager > limits.max => WagerError::AboveMaximum {
                    max: limits.max,
                },
                WagerInput::Amount(wager) if wager > money => WagerError::InsufficientFunds,
                WagerInput::Amount(wager) => return Some(wager),
                WagerInput::Invalid => WagerError::NotANumber,
                WagerInput::Leave => return None,
            };
            io.event(&RoundEvent::WagerRejected {
                player: view.name.clone(),
                reason,
            });
        }
    }
}
