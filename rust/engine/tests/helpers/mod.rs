#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::RngCore;
use texasduel_engine::cards::{Card, Rank, Suit};
use texasduel_engine::deck::Deck;
use texasduel_engine::player::{PlayerAction, Seat};
use texasduel_engine::policy::{Decision, DecisionPolicy, PolicyView};
use texasduel_engine::rules::TableConfig;
use texasduel_engine::session::Session;

pub fn c(r: Rank, s: Suit) -> Card {
    Card::new(r, s)
}

/// Plays back queued actions, then checks forever.
#[derive(Default)]
pub struct ScriptedPolicy {
    script: Mutex<VecDeque<PlayerAction>>,
}

impl ScriptedPolicy {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            script: Mutex::new(actions.into_iter().collect()),
        }
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn decide(&self, _view: &PolicyView, _rng: &mut dyn RngCore) -> Decision {
        let action = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PlayerAction::Check);
        let rationale = match action {
            PlayerAction::Check => "Computer checks".to_string(),
            PlayerAction::Call(n) => format!("Computer calls {n}"),
            PlayerAction::Raise(n) => format!("Computer raises {n}"),
            PlayerAction::Fold => "Computer folds".to_string(),
        };
        Decision::new(action, rationale)
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

/// Session sitting in the dice phase with `first` already decided.
pub fn session_with(script: Vec<PlayerAction>, first: Seat) -> Session {
    let mut s = Session::new(TableConfig::with_seed(11), Box::new(ScriptedPolicy::new(script)));
    s.start_dice_roll().unwrap();
    let decided = match first {
        Seat::Human => s.settle_dice(6, 1).unwrap(),
        Seat::Computer => s.settle_dice(1, 6).unwrap(),
    };
    assert!(decided);
    s
}

/// Deck that deals the given hole cards and board in order.
pub fn stacked(human: [Card; 2], computer: [Card; 2], board: [Card; 5]) -> Deck {
    let mut cards = human.to_vec();
    cards.extend_from_slice(&computer);
    cards.extend_from_slice(&board);
    Deck::from_cards(cards).unwrap()
}

/// Human A♥ A♦ against computer 7♣ 2♦ on A♠ K♣ 9♦ 4♥ 3♠: the human holds trips.
pub fn human_wins_deck() -> Deck {
    stacked(
        [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Diamonds)],
        [c(Rank::Seven, Suit::Clubs), c(Rank::Two, Suit::Diamonds)],
        [
            c(Rank::Ace, Suit::Spades),
            c(Rank::King, Suit::Clubs),
            c(Rank::Nine, Suit::Diamonds),
            c(Rank::Four, Suit::Hearts),
            c(Rank::Three, Suit::Spades),
        ],
    )
}

/// Royal flush on the board; both seats play the board.
pub fn royal_board_deck() -> Deck {
    stacked(
        [c(Rank::Two, Suit::Hearts), c(Rank::Three, Suit::Diamonds)],
        [c(Rank::Seven, Suit::Clubs), c(Rank::Eight, Suit::Diamonds)],
        [
            c(Rank::Ace, Suit::Spades),
            c(Rank::King, Suit::Spades),
            c(Rank::Queen, Suit::Spades),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Ten, Suit::Spades),
        ],
    )
}

pub fn pot_matches_contributions(s: &Session) -> bool {
    s.pot()
        == s.player(Seat::Human).total_bet_hand() + s.player(Seat::Computer).total_bet_hand()
}
