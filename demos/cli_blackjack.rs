//! Interactive terminal blackjack on top of the round engine.
//!
//! This is the presentation layer the library deliberately excludes: it
//! renders [`RoundEvent`]s, reads raw decisions from stdin, and loops rounds
//! until the table is empty.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ventuno::{
    Card, Chips, DealerView, Frontend, HandView, PlayerView, RoundError, RoundEvent, Suit, Table,
    TableRules, TurnInput, WagerInput, WagerLimits,
};

fn main() {
    println!("Blackjack (type 'q' at any prompt to leave the table)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let rules = TableRules::default();
    let mut table = Table::new(rules, seed);

    loop {
        let name = prompt_line("Player name (blank to stop adding): ");
        if name.is_empty() {
            break;
        }
        if table.add_player(name.as_str(), 1_000).is_ok() {
            println!("{name} sits down with $1000.");
        }
    }

    if table.player_count() == 0 {
        println!("Nobody sat down. Goodbye.");
        return;
    }

    let mut console = Console;

    while table.player_count() > 0 {
        match table.play_round(&mut console) {
            Ok(summary) => {
                println!("\n~~~ Everyone's Total Money ~~~");
                for player in table.players() {
                    println!("{}: ${}", player.name(), player.money());
                }
                let winners = summary.winners();
                if !winners.is_empty() {
                    println!("Winners this round: {}", winners.join(", "));
                }
            }
            Err(RoundError::NoPlayers) => break,
            Err(err) => {
                println!("Round aborted: {err}");
                break;
            }
        }
    }

    println!("The table is empty. Good game everyone!");
}

/// Stdin/stdout frontend.
struct Console;

impl Frontend for Console {
    fn wager(&mut self, player: &PlayerView, limits: WagerLimits) -> WagerInput {
        println!("\n{} has ${}.", player.name, player.money);
        let input = prompt_line(&format!(
            "{}: wager (${}-${}): ",
            player.name, limits.min, limits.max
        ));
        parse_amount(&input)
    }

    fn insurance_offer(&mut self, player: &PlayerView) -> bool {
        prompt_yes_no(&format!("{}: take insurance? (y/n) ", player.name))
    }

    fn insurance_wager(&mut self, player: &PlayerView, max: Chips) -> WagerInput {
        let input = prompt_line(&format!("{}: insurance ($1-${max}): ", player.name));
        parse_amount(&input)
    }

    fn double_down_offer(&mut self, player: &PlayerView, hand: &HandView) -> bool {
        println!("{}: {} (total {})", player.name, format_cards(&hand.cards), hand.total);
        prompt_yes_no("Double down? (y/n) ")
    }

    fn split_offer(&mut self, _player: &PlayerView, _hand: &HandView) -> bool {
        prompt_yes_no("Split? (y/n) ")
    }

    fn turn_action(&mut self, player: &PlayerView, hand_index: usize, hand: &HandView) -> TurnInput {
        println!(
            "{} hand #{}: {} (total {})",
            player.name,
            hand_index + 1,
            format_cards(&hand.cards),
            hand.total
        );
        match prompt_line("Hit or stand? ").as_str() {
            "h" | "hit" => TurnInput::Hit,
            "s" | "stand" => TurnInput::Stand,
            "q" | "quit" | "leave" => TurnInput::Leave,
            _ => TurnInput::Invalid,
        }
    }

    fn event(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::RoundStarted {
                players,
                decks,
                cards_remaining,
            } => {
                println!("\n~~~ New round: {players} players, {decks} decks, {cards_remaining} cards left ~~~");
            }
            RoundEvent::WagerRejected { reason, .. } => println!("Sorry: {reason}."),
            RoundEvent::WagerPlaced { player, wager } => println!("{player} wagers ${wager}."),
            RoundEvent::ForcedAllIn { player, wager } => {
                println!("{player} has less than the minimum bet and goes all in with ${wager}!");
            }
            RoundEvent::PlayerCard {
                player,
                hand_index,
                hand,
            } => {
                println!(
                    "<{player}> hand #{}: {} === {} points",
                    hand_index + 1,
                    format_cards(&hand.cards),
                    hand.total
                );
            }
            RoundEvent::DealerCard { dealer } | RoundEvent::DealerHit { dealer } => {
                print_dealer(dealer);
            }
            RoundEvent::InsuranceSkipped { player } => {
                println!("{player} has no money left for an insurance bet.");
            }
            RoundEvent::InsuranceRejected { reason, .. } => println!("Sorry: {reason}."),
            RoundEvent::InsurancePlaced { player, wager } => {
                println!("{player} insures for ${wager}.");
            }
            RoundEvent::DoubledDown { player, wager, .. } => {
                println!("{player} doubles down; the wager is now ${wager}.");
            }
            RoundEvent::Split {
                player, hand_count, ..
            } => println!("{player} splits and now plays {hand_count} hands."),
            RoundEvent::TurnStarted { player } => println!("\n~~~ {player}'s turn ~~~"),
            RoundEvent::Natural { player, .. } => println!("Blackjack! Congrats, {player}!"),
            RoundEvent::Busted { player, total, .. } => {
                println!("{player} busts at {total}.");
            }
            RoundEvent::Stood { player, total, .. } => println!("{player} stands at {total}."),
            RoundEvent::InvalidTurnInput { .. } => println!("Must choose hit or stand."),
            RoundEvent::LeftTable { player, forfeited } => {
                if *forfeited > 0 {
                    println!("{player} leaves the table, forfeiting ${forfeited}.");
                } else {
                    println!("{player} leaves the table.");
                }
            }
            RoundEvent::DealerTurn { dealer } => {
                println!("\n~~~ Dealer's turn ~~~");
                print_dealer(dealer);
            }
            RoundEvent::DealerNatural => println!("The dealer has a blackjack!"),
            RoundEvent::DealerStood { total } => println!("The dealer stands at {total}."),
            RoundEvent::DealerBusted { total } => println!("The dealer busts at {total}!"),
            RoundEvent::HandSettled {
                player,
                hand_index,
                hand,
                delta,
            } => {
                println!(
                    "<{player}> hand #{}: {} === {} points | winnings: {delta}",
                    hand_index + 1,
                    format_cards(&hand.cards),
                    hand.total
                );
            }
            RoundEvent::PlayerEvicted { player } => {
                println!("Sorry, {player}! You're out of money. Thanks for playing!");
            }
            RoundEvent::Reshuffled { cards_remaining } => {
                println!("Shuffling cards... ({cards_remaining} in the shoe)");
            }
            RoundEvent::RoundEnded => println!("The round is over!"),
        }
    }

    fn pause(&mut self) {
        let _ = prompt_line("");
    }
}

fn parse_amount(input: &str) -> WagerInput {
    if input == "q" || input == "quit" || input == "leave" {
        return WagerInput::Leave;
    }
    match input.parse::<Chips>() {
        Ok(amount) => WagerInput::Amount(amount),
        Err(_) => WagerInput::Invalid,
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => {}
        }
    }
}

fn print_dealer(dealer: &DealerView) {
    if dealer.hole_revealed {
        println!(
            "Dealer's hand: {} === {} points",
            format_cards(&dealer.cards),
            dealer.total
        );
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card {
            parts.push(format_card(&card));
        }
        if dealer.cards.len() > 1 {
            parts.push("??".to_string());
        }
        println!(
            "Dealer's hand: {} <= {} points",
            parts.join(" "),
            dealer.visible_total
        );
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
