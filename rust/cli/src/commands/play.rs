//! # Play Command
//!
//! Interactive duel against the computer on the terminal.
//!
//! Each hand starts with a dice roll (re-rolled on ties) that decides who
//! acts first. The human then enters `check`, `call`, `raise N`, `fold` or
//! `q` at the prompt until the hand resolves. Rejected commands print an
//! error and prompt again without changing the game.

use crate::config::{self, CliOverrides};
use crate::error::CliError;
use crate::formatters::{format_board, format_hole};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{HumanCommand, ParseResult, parse_player_command};
use std::io::{BufRead, Write};
use texasduel_ai::create_policy;
use texasduel_engine::errors::GameError;
use texasduel_engine::player::Seat;
use texasduel_engine::rules::{BOARD_SIZE, to_call};
use texasduel_engine::session::{Phase, Session};
use tracing::debug;

const PROMPT: &str = "Enter action (check/call/raise N/fold/q): ";

/// Handle the play command: resolve configuration, build the session and
/// play up to `hands` hands.
pub fn handle_play_command(
    hands: u32,
    overrides: &CliOverrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = config::load_with_overrides(overrides)?.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut table = cfg.table_config();
    table.seed = Some(seed);

    let policy = create_policy(&cfg.policy)
        .ok_or_else(|| CliError::Config(format!("unknown policy '{}'", cfg.policy)))?;
    let mut session = Session::new(table, policy);

    writeln!(out, "Welcome to Texas Duel!")?;
    writeln!(
        out,
        "play: hands={} seed={} policy={}",
        hands,
        seed,
        session.policy_name()
    )?;
    play_session(&mut session, hands, out, err, stdin)
}

/// Plays hands on an already built session until `hands` are done or the
/// user quits.
pub(crate) fn play_session(
    session: &mut Session,
    hands: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut played = 0u32;

    for i in 1..=hands {
        roll_for_first(session, out)?;
        ui::write_separator(out)?;
        writeln!(out, "Hand {}", i)?;
        session.new_hand()?;

        if play_hand(session, out, err, stdin)? == HandEnd::Quit {
            debug!(hand = i, "quit requested");
            break;
        }
        played += 1;
        write_result(session, out)?;

        if session.continue_to_next_hand()? {
            writeln!(
                out,
                "A stack ran low. Chips reset to {}.",
                session.table().starting_chips
            )?;
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    writeln!(
        out,
        "Chips: Player 1 {} | Computer {}",
        session.player(Seat::Human).chips(),
        session.player(Seat::Computer).chips()
    )?;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum HandEnd {
    Resolved,
    Quit,
}

fn roll_for_first(session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
    session.start_dice_roll()?;
    loop {
        let decided = session.roll_dice()?;
        let dice = session.dice();
        writeln!(
            out,
            "Dice: Player 1 rolls {} | Computer rolls {}",
            dice.human, dice.computer
        )?;
        if decided {
            return Ok(());
        }
        writeln!(out, "Tie! Rolling again.")?;
    }
}

fn play_hand(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<HandEnd, CliError> {
    let mut seen = 0;
    loop {
        seen = write_new_log_entries(session, seen, out)?;
        if session.phase() != Phase::Playing {
            return Ok(HandEnd::Resolved);
        }
        write_table(session, out)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(HandEnd::Quit);
        };
        match parse_player_command(&line) {
            ParseResult::Quit => return Ok(HandEnd::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(cmd) => {
                if let Err(e) = apply_command(session, cmd) {
                    ui::write_error(err, &format!("Invalid action: {}", e))?;
                }
            }
        }
    }
}

fn apply_command(session: &mut Session, cmd: HumanCommand) -> Result<(), GameError> {
    match cmd {
        HumanCommand::Check => session.check(),
        HumanCommand::Call => session.call(),
        HumanCommand::Raise(amount) => session.raise(amount),
        HumanCommand::Fold => session.fold(),
    }
}

/// Prints log entries pushed since the cursor `seen`; returns the new cursor.
fn write_new_log_entries(
    session: &Session,
    seen: usize,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let log = session.log();
    for entry in log.entries_since(seen) {
        writeln!(out, "> {}", entry)?;
    }
    Ok(log.total_pushed())
}

fn write_table(session: &Session, out: &mut dyn Write) -> Result<(), CliError> {
    let human = session.player(Seat::Human);
    let computer = session.player(Seat::Computer);
    writeln!(
        out,
        "Board: {}",
        format_board(session.visible_board(), BOARD_SIZE)
    )?;
    writeln!(
        out,
        "Your cards: {} | Computer: {}",
        format_hole(human.hole_cards()),
        format_hole(session.shown_hole_cards(Seat::Computer))
    )?;
    writeln!(
        out,
        "Pot: {} | To call: {} | Chips: Player 1 {} | Computer {}",
        session.pot(),
        to_call(session.current_bet(), human.bet()),
        human.chips(),
        computer.chips()
    )?;
    Ok(())
}

fn write_result(session: &Session, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(outcome) = session.outcome() else {
        return Ok(());
    };
    writeln!(
        out,
        "Board: {}",
        format_board(session.visible_board(), BOARD_SIZE)
    )?;
    writeln!(
        out,
        "Computer shows: {}",
        format_hole(session.shown_hole_cards(Seat::Computer))
    )?;
    if !outcome.by_fold {
        writeln!(out, "Player 1: {}", outcome.human_rank)?;
        writeln!(out, "Computer: {}", outcome.computer_rank)?;
    }
    writeln!(out, "{}", outcome.message)?;
    if let Some(name) = &outcome.winner_name {
        writeln!(out, "{} nets {} from a pot of {}", name, outcome.net_gain, outcome.pot)?;
    }
    Ok(())
}
