//! Input parsing and validation for interactive commands.
//!
//! Handles the `play` prompt (check, call, raise, fold, quit) and the card
//! notation accepted by `eval` (`As`, `Kd`, `10h`, `Tc`, `Q♥`).

use texasduel_engine::cards::{Card, Rank, Suit};

/// A command typed at the `play` prompt. Call carries no amount; the session
/// works out what is owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanCommand {
    Check,
    Call,
    Raise(u32),
    Fold,
}

/// Result of parsing one line of `play` input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid command parsed from input
    Command(HumanCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a [`HumanCommand`] or quit.
///
/// Accepts (case-insensitive): `check`/`k`, `call`/`c`, `raise N`/`r N`,
/// `fold`/`f`, `q`/`quit`.
///
/// # Example
///
/// ```rust
/// # use texasduel_cli::validation::{parse_player_command, HumanCommand, ParseResult};
/// assert_eq!(
///     parse_player_command("raise 30"),
///     ParseResult::Command(HumanCommand::Raise(30))
/// );
/// assert_eq!(parse_player_command("q"), ParseResult::Quit);
/// ```
pub fn parse_player_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Command(HumanCommand::Fold),
        "check" | "k" => ParseResult::Command(HumanCommand::Check),
        "call" | "c" => ParseResult::Command(HumanCommand::Call),
        "raise" | "r" => match parts.get(1).map(|p| p.parse::<u32>()) {
            None => ParseResult::Invalid("Raise requires an amount (e.g., 'raise 20')".to_string()),
            Some(Ok(amount)) if amount > 0 => ParseResult::Command(HumanCommand::Raise(amount)),
            Some(Ok(_)) => ParseResult::Invalid("Raise amount must be positive".to_string()),
            Some(Err(_)) => ParseResult::Invalid("Invalid raise amount".to_string()),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, call, raise <amount>, fold, q",
            other
        )),
    }
}

/// Parse one card such as `As`, `10h`, `Td` or `K♣`.
pub fn parse_card(token: &str) -> Result<Card, String> {
    let token = token.trim();
    let mut chars = token.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| "Empty card".to_string())?;
    let rank_part = chars.as_str();

    let suit = match suit_char.to_ascii_lowercase() {
        's' | '♠' => Suit::Spades,
        'h' | '♥' => Suit::Hearts,
        'd' | '♦' => Suit::Diamonds,
        'c' | '♣' => Suit::Clubs,
        _ => return Err(format!("Invalid suit in card '{}'", token)),
    };
    let rank = match rank_part.to_ascii_uppercase().as_str() {
        "A" => Rank::Ace,
        "K" => Rank::King,
        "Q" => Rank::Queen,
        "J" => Rank::Jack,
        "T" | "10" => Rank::Ten,
        digit => digit
            .parse::<u8>()
            .ok()
            .filter(|v| (2..=9).contains(v))
            .and_then(Rank::from_value)
            .ok_or_else(|| format!("Invalid rank in card '{}'", token))?,
    };
    Ok(Card::new(rank, suit))
}

/// Parse a list of card tokens; tokens may also be comma-separated.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, String> {
    tokens
        .iter()
        .flat_map(|t| {
            t.as_ref()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|t| parse_card(&t))
        .collect()
}
