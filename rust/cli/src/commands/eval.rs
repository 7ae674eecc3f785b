//! Eval command handler: scores 5 to 7 cards given on the command line.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_cards;
use serde::Serialize;
use std::io::Write;
use texasduel_engine::hand::{HandStrength, evaluate_best, rank_name};

#[derive(Debug, Serialize)]
struct Evaluation<'a> {
    cards: Vec<String>,
    #[serde(flatten)]
    strength: &'a HandStrength,
    score: u8,
    rank: String,
}

pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(CliError::InvalidInput)?;
    let strength = evaluate_best(&cards)?;
    let rank = rank_name(&strength);

    if json {
        let eval = Evaluation {
            cards: cards.iter().map(ToString::to_string).collect(),
            strength: &strength,
            score: strength.category.score(),
            rank,
        };
        let s = serde_json::to_string_pretty(&eval).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    let tiebreak: Vec<String> = strength.tiebreak.iter().map(u8::to_string).collect();
    writeln!(out, "Cards: {}", format_cards(&cards))?;
    writeln!(out, "Category: {}", strength.category.name())?;
    writeln!(out, "Tiebreak: {}", tiebreak.join(" "))?;
    writeln!(out, "Rank: {}", rank)?;
    Ok(())
}
