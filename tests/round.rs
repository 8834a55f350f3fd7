//! Full-round integration tests driven through a scripted frontend.

use std::collections::VecDeque;

use ventuno::{
    Card, Chips, Frontend, HandView, PlayerView, RoundError, RoundEvent, RoundPhase, Suit, Table,
    TableRules, TurnInput, WagerError, WagerInput, WagerLimits,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Loads the shoe so that `draws` come out in order.
fn stack_shoe(table: &mut Table, draws: &[Card]) {
    let mut cards = draws.to_vec();
    cards.reverse();
    table.load_shoe(cards);
}

/// A frontend that replays queued answers and records every event.
///
/// Queues are popped per prompt; an unexpected prompt panics, and each test
/// asserts the queues it cares about are fully drained.
#[derive(Default)]
struct Script {
    wagers: VecDeque<WagerInput>,
    insurance_offers: VecDeque<bool>,
    insurance_wagers: VecDeque<WagerInput>,
    doubles: VecDeque<bool>,
    splits: VecDeque<bool>,
    actions: VecDeque<TurnInput>,
    events: Vec<RoundEvent>,
}

impl Frontend for Script {
    fn wager(&mut self, _player: &PlayerView, _limits: WagerLimits) -> WagerInput {
        self.wagers.pop_front().expect("unexpected wager prompt")
    }

    fn insurance_offer(&mut self, _player: &PlayerView) -> bool {
        self.insurance_offers
            .pop_front()
            .expect("unexpected insurance offer")
    }

    fn insurance_wager(&mut self, _player: &PlayerView, _max: Chips) -> WagerInput {
        self.insurance_wagers
            .pop_front()
            .expect("unexpected insurance wager prompt")
    }

    fn double_down_offer(&mut self, _player: &PlayerView, _hand: &HandView) -> bool {
        self.doubles
            .pop_front()
            .expect("unexpected double-down offer")
    }

    fn split_offer(&mut self, _player: &PlayerView, _hand: &HandView) -> bool {
        self.splits.pop_front().expect("unexpected split offer")
    }

    fn turn_action(
        &mut self,
        _player: &PlayerView,
        _hand_index: usize,
        _hand: &HandView,
    ) -> TurnInput {
        self.actions.pop_front().expect("unexpected turn prompt")
    }

    fn event(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}

fn table_with(players: &[(&str, Chips)]) -> Table {
    let mut table = Table::new(TableRules::default(), 7);
    for &(name, money) in players {
        table.add_player(name, money).expect("table is idle");
    }
    table
}

#[test]
fn round_requires_players() {
    let mut table = Table::new(TableRules::default(), 1);
    let mut io = Script::default();
    assert_eq!(table.play_round(&mut io), Err(RoundError::NoPlayers));
}

#[test]
fn basic_round_hit_and_stand() {
    let mut table = table_with(&[("ada", 100)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 8),    // ada first card
            card(Suit::Clubs, 6),     // dealer up card
            card(Suit::Diamonds, 7),  // ada second card (15)
            card(Suit::Spades, 10),   // dealer hole card (16)
            card(Suit::Hearts, 4),    // ada hit (19)
            card(Suit::Clubs, 5),     // dealer draw (21)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(50)]),
        doubles: VecDeque::from([false]),
        actions: VecDeque::from([TurnInput::Hit, TurnInput::Stand]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert_eq!(summary.dealer_total, 21);
    assert!(!summary.dealer_natural);
    assert_eq!(summary.players.len(), 1);
    assert_eq!(summary.players[0].net, -50);
    assert_eq!(summary.players[0].money_after, 50);
    assert!(summary.winners().is_empty());

    let ada = &table.players()[0];
    assert_eq!(ada.money(), 50);
    assert!(ada.hands().is_empty());
    assert!(!ada.is_turn());
    assert_eq!(table.phase(), RoundPhase::Idle);

    assert!(io.actions.is_empty());
    assert!(io.wagers.is_empty());
}

#[test]
fn wager_validation_reprompts_until_valid() {
    let mut table = table_with(&[("ada", 100)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // ada
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 8), // ada (18); no offers, wager committed twice over
            card(Suit::Spades, 7),   // dealer hole (16)
            card(Suit::Clubs, 2),    // dealer draw (18)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([
            WagerInput::Invalid,
            WagerInput::Amount(10),
            WagerInput::Amount(600),
            WagerInput::Amount(150),
            WagerInput::Amount(100),
        ]),
        actions: VecDeque::from([TurnInput::Stand]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    let reasons: Vec<WagerError> = io
        .events
        .iter()
        .filter_map(|event| match event {
            RoundEvent::WagerRejected { reason, .. } => Some(*reason),
            _ => None,
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            WagerError::NotANumber,
            WagerError::BelowMinimum { min: 20 },
            WagerError::AboveMaximum { max: 500 },
            WagerError::InsufficientFunds,
        ]
    );

    // 18 against 18 pushes.
    assert_eq!(summary.players[0].net, 0);
    assert_eq!(table.players()[0].money(), 100);
    assert!(io.wagers.is_empty());
}

#[test]
fn short_stack_is_forced_all_in_and_evicted_on_loss() {
    let mut table = table_with(&[("ada", 15)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // ada
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 5), // ada (15); offers skipped, cannot re-wager
            card(Suit::Spades, 8),   // dealer hole (17)
        ],
    );

    let mut io = Script {
        actions: VecDeque::from([TurnInput::Stand]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert!(io.events.iter().any(|event| matches!(
        event,
        RoundEvent::ForcedAllIn { wager: 15, .. }
    )));
    assert_eq!(summary.players[0].net, -15);
    assert_eq!(summary.players[0].money_after, 0);
    assert!(summary.players[0].evicted);
    assert!(io.events.iter().any(|event| matches!(
        event,
        RoundEvent::PlayerEvicted { .. }
    )));
    assert_eq!(table.player_count(), 0);

    // With nobody left the next round cannot start.
    assert_eq!(table.play_round(&mut io), Err(RoundError::NoPlayers));
}

#[test]
fn natural_pays_three_to_two() {
    let mut table = table_with(&[("ada", 100)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 1),   // ada
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 13), // ada (natural 21)
            card(Suit::Spades, 7),   // dealer hole (17)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(100)]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert!(io.events.iter().any(|event| matches!(event, RoundEvent::Natural { .. })));
    assert_eq!(summary.players[0].hands[0].delta, 150);
    assert!(summary.players[0].hands[0].natural);
    assert_eq!(summary.players[0].net, 150);
    assert_eq!(table.players()[0].money(), 250);
    assert_eq!(summary.winners(), vec!["ada"]);
}

#[test]
fn insurance_and_split_against_dealer_natural() {
    let mut table = table_with(&[("ada", 1_000)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 8),   // ada
            card(Suit::Spades, 1),   // dealer up (Ace -> insurance window)
            card(Suit::Diamonds, 8), // ada (8,8 -> split)
            card(Suit::Clubs, 8),    // first split hand (8,8 again; offer declined)
            card(Suit::Clubs, 13),   // second split hand (18)
            card(Suit::Spades, 13),  // dealer hole (natural)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(100)]),
        insurance_offers: VecDeque::from([true]),
        // 60 exceeds half the wager and is re-prompted.
        insurance_wagers: VecDeque::from([WagerInput::Amount(60), WagerInput::Amount(50)]),
        doubles: VecDeque::from([false, false, false]),
        splits: VecDeque::from([true, false]),
        actions: VecDeque::from([TurnInput::Stand, TurnInput::Stand]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert!(io.events.iter().any(|event| matches!(
        event,
        RoundEvent::InsuranceRejected {
            reason: ventuno::InsuranceError::AboveHalfWager { max: 50 },
            ..
        }
    )));

    assert!(summary.dealer_natural);
    let ada = &summary.players[0];
    assert_eq!(ada.insurance_wager, 50);
    assert_eq!(ada.hands.len(), 2);
    // Insurance rides on the first hand only: -100 + 2 * 50, then -100.
    assert_eq!(ada.hands[0].delta, 0);
    assert_eq!(ada.hands[1].delta, -100);
    assert_eq!(ada.net, -100);
    assert_eq!(table.players()[0].money(), 900);

    assert!(io.insurance_wagers.is_empty());
    assert!(io.splits.is_empty());
    assert!(io.doubles.is_empty());
}

#[test]
fn insurance_not_offered_without_headroom() {
    let mut table = table_with(&[("ada", 100)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 9),   // ada
            card(Suit::Spades, 1),   // dealer up (Ace)
            card(Suit::Diamonds, 9), // ada (18); pair, but no funds for offers
            card(Suit::Spades, 9),   // dealer hole (20, no natural)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(100)]),
        actions: VecDeque::from([TurnInput::Stand]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert!(io.events.iter().any(|event| matches!(
        event,
        RoundEvent::InsuranceSkipped { .. }
    )));
    assert_eq!(summary.players[0].insurance_wager, 0);
    assert_eq!(summary.players[0].net, -100);
    assert!(summary.players[0].evicted);
    assert_eq!(table.player_count(), 0);
}

#[test]
fn double_down_takes_exactly_one_card() {
    let mut table = table_with(&[("ada", 500)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 5),   // ada
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 6), // ada (11)
            card(Suit::Spades, 8),   // dealer hole (17)
            card(Suit::Hearts, 10),  // the one double-down card (21)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(100)]),
        doubles: VecDeque::from([true]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert!(io.events.iter().any(|event| matches!(
        event,
        RoundEvent::DoubledDown { wager: 200, .. }
    )));
    let hand = &summary.players[0].hands[0];
    assert_eq!(hand.wager, 200);
    assert_eq!(hand.total, 21);
    // Three cards, so no blackjack bonus: a plain win at the doubled wager.
    assert!(!hand.natural);
    assert_eq!(summary.players[0].net, 200);
    assert_eq!(table.players()[0].money(), 700);
    assert!(io.actions.is_empty());
}

#[test]
fn splitting_stops_at_four_hands() {
    let mut table = table_with(&[("ada", 1_000)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 8),   // ada
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 8), // pair -> split (2 hands)
            card(Suit::Clubs, 8),    // pair again -> split (3 hands)
            card(Suit::Spades, 8),   // pair again -> split (4 hands)
            card(Suit::Hearts, 8),   // pair again, but the cap blocks the offer
            card(Suit::Diamonds, 13), // second card for hand 2 (18)
            card(Suit::Clubs, 13),   // second card for hand 3 (18)
            card(Suit::Spades, 13),  // second card for hand 4 (18)
            card(Suit::Spades, 7),   // dealer hole (16)
            card(Suit::Hearts, 5),   // dealer draw (21)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(50)]),
        doubles: VecDeque::from([false; 7]),
        splits: VecDeque::from([true, true, true]),
        actions: VecDeque::from([
            TurnInput::Stand,
            TurnInput::Stand,
            TurnInput::Stand,
            TurnInput::Stand,
        ]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    // No fourth split offer was consumed.
    assert!(io.splits.is_empty());
    assert!(io.doubles.is_empty());

    let ada = &summary.players[0];
    assert_eq!(ada.hands.len(), 4);
    for hand in &ada.hands {
        assert_eq!(hand.wager, 50);
    }
    assert_eq!(ada.net, -200);
    assert_eq!(table.players()[0].money(), 800);
}

#[test]
fn leaving_mid_turn_forfeits_the_wager() {
    let mut table = table_with(&[("ada", 200), ("bob", 200)]);
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // ada
            card(Suit::Hearts, 9),   // bob
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Diamonds, 7), // ada (17)
            card(Suit::Diamonds, 8), // bob (17)
            card(Suit::Spades, 10),  // dealer hole (15)
            card(Suit::Hearts, 6),   // dealer draw (21)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(100), WagerInput::Amount(50)]),
        doubles: VecDeque::from([false, false]),
        actions: VecDeque::from([TurnInput::Leave, TurnInput::Stand]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert!(io.events.iter().any(|event| matches!(
        event,
        RoundEvent::LeftTable { forfeited: 100, .. }
    )));

    // Only bob reaches settlement.
    assert_eq!(summary.players.len(), 1);
    assert_eq!(summary.players[0].name, "bob");
    assert_eq!(summary.players[0].net, -50);

    assert_eq!(table.player_count(), 1);
    let bob = &table.players()[0];
    assert_eq!(bob.name(), "bob");
    assert_eq!(bob.money(), 150);
    assert!(bob.hands().is_empty());
    assert!(!bob.is_turn());
}

#[test]
fn depleted_shoe_reshuffles_at_round_end() {
    let mut table = table_with(&[("ada", 200)]);
    // Exactly the four cards the round needs; the empty shoe is well under
    // the third-of-the-shoe threshold afterwards.
    stack_shoe(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // ada
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 9), // ada (19)
            card(Suit::Spades, 9),   // dealer hole (19)
        ],
    );

    let mut io = Script {
        wagers: VecDeque::from([WagerInput::Amount(100)]),
        doubles: VecDeque::from([false]),
        actions: VecDeque::from([TurnInput::Stand]),
        ..Script::default()
    };

    let summary = table.play_round(&mut io).expect("round completes");

    assert!(summary.reshuffled);
    assert!(io.events.iter().any(|event| matches!(
        event,
        RoundEvent::Reshuffled { cards_remaining: 104 }
    )));
    assert_eq!(table.shoe().remaining(), 104);
    // 19 against 19 pushes.
    assert_eq!(summary.players[0].net, 0);
}

#[test]
fn players_join_and_leave_between_rounds() {
    let mut table = table_with(&[("ada", 100)]);
    assert!(table.add_player("bob", 100).is_ok());
    assert_eq!(table.player_count(), 2);
    assert!(table.remove_player("bob"));
    assert!(!table.remove_player("bob"));
}
