//! The settlement table and payout distribution.

use log::info;

use crate::player::Chips;
use crate::result::{HandSettlement, PlayerSettlement, RoundSummary};
use crate::rules::PayoutRatio;
use crate::view::{Frontend, HandView, RoundEvent};

use super::Table;

/// The dealer's final figures entering settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerFinal {
    /// The dealer's final total.
    pub total: u8,
    /// Whether the dealer's hand is a two-card 21.
    pub natural: bool,
}

/// A player hand's final figures entering settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandFinal {
    /// The hand's final total.
    pub total: u8,
    /// Whether the hand is a two-card 21.
    pub natural: bool,
    /// The wager riding on the hand.
    pub wager: Chips,
}

/// Computes the signed money movement for one hand.
///
/// Cases are evaluated in priority order; the first match wins:
///
/// 1. Dealer natural — the main wager pushes against a player natural and
///    loses otherwise; insurance pays 2:1 either way.
/// 2. Player natural — pays `payout` on the wager; insurance is lost.
/// 3. Player bust — wager and insurance lost, even against a dealer bust.
/// 4. Dealer bust, or the player outscores the dealer — wager won,
///    insurance lost.
/// 5. Dealer outscores the player — wager and insurance lost.
/// 6. Push — only the insurance is lost.
///
/// A hand without insurance passes 0, which makes every formula above apply
/// uniformly.
#[must_use]
pub const fn hand_delta(
    dealer: DealerFinal,
    hand: HandFinal,
    insurance: Chips,
    payout: PayoutRatio,
) -> Chips {
    if dealer.natural {
        if hand.natural {
            2 * insurance
        } else {
            -hand.wager + 2 * insurance
        }
    } else if hand.natural {
        payout.apply(hand.wager) - insurance
    } else if hand.total > 21 {
        -hand.wager - insurance
    } else if dealer.total > 21 || hand.total > dealer.total {
        hand.wager - insurance
    } else if hand.total < dealer.total {
        -hand.wager - insurance
    } else {
        -insurance
    }
}

impl Table {
    /// Settles every hand against the dealer, applies the deltas to player
    /// bankrolls, and removes players who ran out of money.
    ///
    /// A player's insurance wager enters the settlement of their first hand
    /// only; split hands settle with insurance 0.
    pub(super) fn settle(&mut self, io: &mut dyn Frontend) -> RoundSummary {
        let dealer = DealerFinal {
            total: self.dealer.total(),
            natural: self.dealer.is_natural(),
        };
        let payout = self.rules.blackjack_payout;

        let mut settlements = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let name = player.name().to_owned();
            let insurance_wager = player.insurance().unwrap_or(0);
            let mut insurance_left = insurance_wager;
            let mut hands = Vec::with_capacity(player.hands().len());
            let mut net: Chips = 0;

            for (hand_index, hand) in player.hands().iter().enumerate() {
                let figures = HandFinal {
                    total: hand.total(),
                    natural: hand.is_natural(),
                    wager: hand.wager(),
                };
                let delta = hand_delta(dealer, figures, insurance_left, payout);
                insurance_left = 0;
                net += delta;
                hands.push(HandSettlement {
                    hand_index,
                    total: figures.total,
                    natural: figures.natural,
                    wager: figures.wager,
                    delta,
                });
                io.event(&RoundEvent::HandSettled {
                    player: name.clone(),
                    hand_index,
                    hand: HandView::of(hand),
                    delta,
                });
                io.pause();
            }

            settlements.push(PlayerSettlement {
                name,
                hands,
                insurance_wager,
                net,
                money_after: 0,
                evicted: false,
            });
        }

        for (player, settlement) in self.players.iter_mut().zip(&mut settlements) {
            player.add_money(settlement.net);
            settlement.money_after = player.money();
            settlement.evicted = player.is_broke();
        }

        let mut index = 0;
        while index < self.players.len() {
            if self.players[index].is_broke() {
                let player = self.players.remove(index);
                info!("{} is out of money and leaves the game", player.name());
                io.event(&RoundEvent::PlayerEvicted {
                    player: player.name().to_owned(),
                });
                io.pause();
            } else {
                index += 1;
            }
        }

        RoundSummary {
            players: settlements,
            dealer_total: dealer.total,
            dealer_natural: dealer.natural,
            dealer_bust: dealer.total > 21,
            reshuffled: false,
        }
    }
}
