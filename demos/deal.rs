//! CLI deck example.
//!
//! Draws cards from either end of a clock-seeded deck into a hand, shuffles,
//! and splits the deck into piles. Ends when stdin is closed or on `q`.
//!
//! Run with `RUST_LOG=debug` to see the library's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardeck::{Card, Deck, DeckError, Suit};

fn main() {
    env_logger::init();

    println!("Deck CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::seeded(seed);
    let mut hand = Deck::from_cards(Vec::<Card>::new(), seed);

    loop {
        println!("\nDeck: {} cards | Hand: {} cards", deck.len(), hand.len());
        if let Some(card) = deck.top() {
            println!("Top card: {}", format_card(card));
        }

        let Some(action) =
            prompt_line("[s]huffle, draw [t]op, draw [b]ottom, s[p]lit, [r]eturn hand, [v]iew: ")
        else {
            break;
        };

        match action.as_str() {
            "s" | "shuffle" => {
                deck.shuffle();
                println!("Shuffled.");
            }
            "t" | "top" => draw(&mut deck, &mut hand, Deck::remove_top),
            "b" | "bottom" => draw(&mut deck, &mut hand, Deck::remove_bottom),
            "p" | "split" => {
                let Some(portions) = prompt_portions() else {
                    break;
                };
                match deck.split(portions) {
                    Ok(piles) => {
                        for (index, pile) in piles.iter().enumerate() {
                            let top = pile.top().map_or_else(|| "--".to_string(), format_card);
                            println!("Pile {index}: {} cards, top {top}", pile.len());
                        }
                        for pile in &piles {
                            deck.add_deck(pile);
                        }
                    }
                    Err(err) => println!("Split error: {err}"),
                }
            }
            "r" | "return" => {
                deck.add_deck(&hand);
                hand = Deck::from_cards(Vec::<Card>::new(), seed);
                println!("Hand returned to the deck.");
            }
            "v" | "view" => print!("{hand}"),
            "q" | "quit" => break,
            _ => println!("Unknown action."),
        }
    }

    println!("Goodbye.");
}

fn draw(deck: &mut Deck, hand: &mut Deck, remove: fn(&mut Deck) -> Result<Card, DeckError>) {
    match remove(deck) {
        Ok(card) => {
            print!("{card}");
            hand.add(card);
        }
        Err(err) => println!("Draw error: {err}"),
    }
}

/// Reads one trimmed, lowercased line. `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_portions() -> Option<usize> {
    loop {
        let input = prompt_line("Portions: ")?;
        match input.parse() {
            Ok(portions) => return Some(portions),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_card(card: &Card) -> String {
    let color = match card.suit() {
        Suit::Hearts | Suit::Diamonds => 31,
        Suit::Clubs => 32,
        Suit::Spades => 34,
    };
    format!("\u{1b}[{color}m{}{}\u{1b}[0m", card.rank(), card.suit())
}
