//! Card and board formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal supports Unicode and as
//! h d c s otherwise. Face-down cards render as `??`.
//!
//! ## Example
//!
//! ```rust
//! use texasduel_engine::cards::{Card, Rank, Suit};
//! use texasduel_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = format_board(&[ace_spades], 5);
//! assert!(board.starts_with("[A"));
//! assert!(board.ends_with("?? ?? ?? ??]"));
//! ```

use texasduel_engine::cards::{Card, Suit};

/// Placeholder for a card the viewer may not see.
pub const HIDDEN_CARD: &str = "??";

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII); tens render as "10".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(card.suit))
}

pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Board in bracket notation: the visible cards followed by face-down
/// placeholders up to `total` slots.
pub fn format_board(visible: &[Card], total: usize) -> String {
    let mut slots: Vec<String> = visible.iter().map(format_card).collect();
    slots.extend(std::iter::repeat_n(
        HIDDEN_CARD.to_string(),
        total.saturating_sub(visible.len()),
    ));
    format!("[{}]", slots.join(" "))
}

/// Two hole cards, or two placeholders while they are hidden.
pub fn format_hole(hole: Option<[Card; 2]>) -> String {
    match hole {
        Some(cards) => format_cards(&cards),
        None => format!("{HIDDEN_CARD} {HIDDEN_CARD}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texasduel_engine::cards::Rank;

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");

        let spades = format_suit(Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_card_ten() {
        let ten = format_card(&Card::new(Rank::Ten, Suit::Clubs));
        assert!(ten == "10♣" || ten == "10c");
    }

    #[test]
    fn test_format_board_pads_hidden_slots() {
        assert_eq!(format_board(&[], 5), "[?? ?? ?? ?? ??]");
        assert_eq!(format_board(&[], 0), "[]");
        let board = format_board(&[Card::new(Rank::King, Suit::Hearts)], 3);
        assert!(board.starts_with("[K"));
        assert!(board.ends_with(" ?? ??]"));
    }

    #[test]
    fn test_format_hole_hidden() {
        assert_eq!(format_hole(None), "?? ??");
        let shown = format_hole(Some([
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Diamonds),
        ]));
        assert!(shown.starts_with('A'));
        assert!(shown.contains(" 2"));
    }
}
