//! CLI blackjack table example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Hand, HandOutcome, HandStatus, PlayerAction, Rank, Table, TableEvent, TableIo, TableOptions,
};

struct ConsoleIo;

impl TableIo for ConsoleIo {
    fn player_count(&mut self) -> usize {
        prompt_usize("Please enter the number of players: ")
    }

    fn initial_bet(&mut self, position: usize, bankroll: usize) -> usize {
        prompt_usize(&format!(
            "Player {position}. You have money = {bankroll}. Please enter your bet for this round: "
        ))
    }

    fn action(&mut self, position: usize) -> Option<PlayerAction> {
        let input = prompt_line(&format!(
            "Player {position}, please enter your option - hit, stand, split or double: "
        ));
        match input.as_str() {
            "h" | "hit" => Some(PlayerAction::Hit),
            "s" | "stand" => Some(PlayerAction::Stand),
            "d" | "double" => Some(PlayerAction::Double),
            "p" | "split" => Some(PlayerAction::Split),
            _ => None,
        }
    }

    fn double_amount(&mut self, position: usize) -> usize {
        prompt_usize(&format!(
            "Player {position}: please enter your additional bet: "
        ))
    }

    fn continue_playing(&mut self) -> bool {
        prompt_line("Enter quit to end the game. Press enter to play the next round: ") != "quit"
    }

    fn notify(&mut self, event: TableEvent<'_>) {
        match event {
            TableEvent::RoundStarted => println!("\n*** Get ready for a new round ***\n"),
            TableEvent::PlayerHands {
                position,
                hands,
                cursor,
            } => {
                println!("--- Player {position} ---");
                for (index, hand) in hands.iter().enumerate() {
                    let marker = if index == cursor { "*" } else { " " };
                    println!("{marker} {}", format_hand(hand));
                }
            }
            TableEvent::PlayerBlackjack { position, payout } => {
                println!("Player {position} has a blackjack. You win 3:2 ({payout})!");
            }
            TableEvent::CardDealt { rank, .. } => println!("New card received - {rank}"),
            TableEvent::PlayerBust { position } => println!("Player {position} busts!"),
            TableEvent::ActionRejected { action, .. } => match action {
                Some(PlayerAction::Double) => println!("You don't have money to double down!"),
                Some(PlayerAction::Split) => {
                    println!("Split is not possible! Check cards and/or money available");
                }
                _ => println!("Please enter a valid option."),
            },
            TableEvent::DealerUpCard { rank } => println!("Dealer shows {rank}"),
            TableEvent::DealerReveal { hand } => {
                println!("Dealer original cards are {}", format_cards(hand.cards()));
            }
            TableEvent::DealerBlackjack => println!("Dealer has a blackjack!"),
            TableEvent::DealerDraws { hand, .. } => {
                println!("Dealer hits");
                println!("Dealer current cards are {}", format_cards(hand.cards()));
            }
            TableEvent::DealerFinal { value } => println!("Dealer final hand value = {value}"),
            TableEvent::HandSettled {
                position, outcome, ..
            } => match outcome {
                HandOutcome::Win => println!("Player {position} wins against the dealer"),
                HandOutcome::Lose => println!("Player {position} loses to the dealer"),
                HandOutcome::Push => println!("Player {position} gets a push"),
                HandOutcome::Blackjack => {}
            },
            TableEvent::PlayerRemoved { position } => {
                println!("**** Player {position} has run out of money and is leaving the table. ****");
            }
            TableEvent::GameOver => println!("The game has finished. Thanks for playing!"),
        }
    }
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut table = match Table::new(TableOptions::default(), seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Table setup failed: {err}");
            return;
        }
    };

    let mut console = ConsoleIo;
    if let Err(err) = table.run(&mut console) {
        println!("The round could not be finished: {err}");
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

fn prompt_usize(prompt: &str) -> usize {
    loop {
        match prompt_line(prompt).parse::<usize>() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_cards(cards: &[Rank]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn format_hand(hand: &Hand) -> String {
    let status = match hand.status() {
        HandStatus::Active => "Active",
        HandStatus::Stand => "Stood",
        HandStatus::Doubled => "Doubled",
        HandStatus::Bust => "Lost",
        HandStatus::Blackjack => "Blackjack",
    };
    format!(
        "Hand -> {}. Hand value -> {}. Bet value -> {}. Status -> {status}.",
        format_cards(hand.cards()),
        hand.value(),
        hand.bet()
    )
}
