//! Deal command handler: one hand dealt from a seeded deck.

use crate::error::CliError;
use crate::formatters::{format_card, format_cards};
use serde::Serialize;
use std::io::Write;
use texasduel_engine::cards::Card;
use texasduel_engine::deck::Deck;
use texasduel_engine::hand::{evaluate_best, rank_name};
use texasduel_engine::rules::BOARD_SIZE;

#[derive(Debug, Serialize)]
struct DealtSeat {
    hole: Vec<String>,
    rank: String,
}

#[derive(Debug, Serialize)]
struct DealtHand {
    seed: u64,
    player: DealtSeat,
    computer: DealtSeat,
    board: Vec<String>,
}

/// Deals two hole cards to each side and the full board, in the same order
/// a session deals, and shows what each side ends up holding.
pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    let player = deck.draw(2)?;
    let computer = deck.draw(2)?;
    let board = deck.draw(BOARD_SIZE)?;

    let seat = |hole: &[Card]| -> Result<DealtSeat, CliError> {
        let mut seven = board.clone();
        seven.extend_from_slice(hole);
        Ok(DealtSeat {
            hole: hole.iter().map(Card::to_string).collect(),
            rank: rank_name(&evaluate_best(&seven)?),
        })
    };
    let dealt = DealtHand {
        seed,
        player: seat(&player[..])?,
        computer: seat(&computer[..])?,
        board: board.iter().map(Card::to_string).collect(),
    };

    if json {
        let s = serde_json::to_string_pretty(&dealt).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player 1: {} ({})", format_cards(&player), dealt.player.rank)?;
    writeln!(out, "Computer: {} ({})", format_cards(&computer), dealt.computer.rank)?;
    let b: Vec<String> = board.iter().map(format_card).collect();
    writeln!(out, "Board: {}", b.join(" "))?;
    Ok(())
}
