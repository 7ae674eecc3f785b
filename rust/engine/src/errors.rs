use thiserror::Error;

use crate::cards::Card;
use crate::session::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Hand must contain 5 to 7 cards, got {count}")]
    InvalidHandSize { count: usize },
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    ExhaustedDeck { requested: usize, remaining: usize },
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),
}

/// A rejected move. Rejection never mutates the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("not allowed during the {phase:?} phase")]
    WrongPhase { phase: Phase },
    #[error("cannot check while facing a bet of {to_call}")]
    CheckFacingBet { to_call: u32 },
    #[error("call is disabled on the opening turn")]
    CallOnOpeningTurn,
    #[error("cannot afford call of {need} with {chips} chips")]
    CannotAffordCall { need: u32, chips: u32 },
    #[error("raise of {amount} outside allowed range {min}..={max}")]
    RaiseOutOfRange { amount: u32, min: u32, max: u32 },
    #[error("dice have not produced a first player yet")]
    DiceNotSettled,
    #[error("die value {0} outside 1..=6")]
    InvalidDie(u8),
}
