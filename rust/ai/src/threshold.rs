//! Strength-threshold policy for the computer seat.
//!
//! Scores the visible cards as `category + highest hole card / 14` and picks
//! an action from one of three strength bands with a single random roll:
//!
//! | strength      | roll        | action                                   |
//! |---------------|-------------|------------------------------------------|
//! | `>= 5.5`      | `< 0.50`    | raise 20, 30 or 40                       |
//! |               | otherwise   | call what is owed if affordable, else check |
//! | `2.5 .. 5.5`  | `< 0.75`    | call what is owed, or raise 10 or 20     |
//! |               | otherwise   | fold                                     |
//! | `< 2.5`       | `< 0.15`    | bluff raise 10                           |
//! |               | `< 0.60`    | call what is owed if affordable, else check |
//! |               | otherwise   | fold                                     |
//!
//! Until five cards are visible the set is padded to seven with copies of the
//! 2♠, which puts every round-one decision in the strong band.
//!
//! A stack below 10 chips always folds.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use texasduel_engine::cards::{Card, Rank, Suit};
use texasduel_engine::hand::{evaluate_five, Category};
use texasduel_engine::player::PlayerAction;
use texasduel_engine::policy::{Decision, DecisionPolicy, PolicyView};

use crate::POLICY_THRESHOLD;

/// Below this many chips the policy folds without looking at its cards.
pub const LOW_CHIPS: u32 = 10;

const STRONG: f64 = 5.5;
const MEDIUM: f64 = 2.5;
const STRONG_RAISE_ODDS: f64 = 0.5;
const MEDIUM_PLAY_ODDS: f64 = 0.75;
const BLUFF_ODDS: f64 = 0.15;
const CAUTIOUS_ODDS: f64 = 0.6;

const STRONG_RAISES: [u32; 3] = [20, 30, 40];
const MEDIUM_RAISES: [u32; 2] = [10, 20];
const BLUFF_RAISE: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct ThresholdPolicy;

impl ThresholdPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Continuous strength: made-hand category of the visible cards plus a
    /// fractional bonus for the highest hole card.
    pub fn strength(view: &PolicyView) -> f64 {
        let category = visible_category(&view.visible_cards());
        let high = view.hole.iter().map(Card::value).max().unwrap_or(0);
        f64::from(category.score()) + f64::from(high) / 14.0
    }
}

/// Stand-in for unseen cards while fewer than five are visible.
const FILLER: Card = Card::new(Rank::Two, Suit::Spades);

/// Category of the visible cards. With fewer than five visible the set is
/// topped up to seven with copies of the 2♠, so the fillers count toward
/// pairs, trips, quads and spade flushes like any other card.
fn visible_category(visible: &[Card]) -> Category {
    best_category(&padded(visible))
}

fn padded(visible: &[Card]) -> Vec<Card> {
    let mut cards = visible.to_vec();
    if cards.len() < 5 {
        cards.resize(7, FILLER);
    }
    cards
}

/// Highest category over every five-card subset. Repeated fillers are legal
/// here, unlike in `evaluate_best`.
fn best_category(cards: &[Card]) -> Category {
    let n = cards.len();
    let mut best = Category::HighCard;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate_five(&five).category);
                    }
                }
            }
        }
    }
    best
}

fn pick_raise(choices: &[u32], chips: u32, rng: &mut dyn RngCore) -> Option<u32> {
    let affordable: Vec<u32> = choices.iter().copied().filter(|&a| a <= chips).collect();
    affordable.choose(rng).copied()
}

fn call_or_check(view: &PolicyView, verb: &str) -> Decision {
    let need = view.to_call();
    if need > 0 && view.own_chips >= need {
        Decision::new(PlayerAction::Call(need), format!("Computer {verb} {need}"))
    } else {
        Decision::new(PlayerAction::Check, "Computer checks")
    }
}

fn raise(amount: u32, verb: &str) -> Decision {
    Decision::new(PlayerAction::Raise(amount), format!("Computer {verb} {amount}"))
}

fn fold() -> Decision {
    Decision::new(PlayerAction::Fold, "Computer folds")
}

impl DecisionPolicy for ThresholdPolicy {
    fn decide(&self, view: &PolicyView, rng: &mut dyn RngCore) -> Decision {
        if view.own_chips < LOW_CHIPS {
            return Decision::new(PlayerAction::Fold, "Computer folds (low chips)");
        }
        let strength = Self::strength(view);
        let roll: f64 = rng.random();

        if strength >= STRONG {
            if roll < STRONG_RAISE_ODDS {
                if let Some(amount) = pick_raise(&STRONG_RAISES, view.own_chips, rng) {
                    return raise(amount, "raises");
                }
            }
            call_or_check(view, "calls")
        } else if strength >= MEDIUM {
            if roll >= MEDIUM_PLAY_ODDS {
                return fold();
            }
            let need = view.to_call();
            if need > 0 && view.own_chips >= need {
                return call_or_check(view, "calls");
            }
            match pick_raise(&MEDIUM_RAISES, view.own_chips, rng) {
                Some(amount) => raise(amount, "raises"),
                None => Decision::new(PlayerAction::Check, "Computer checks"),
            }
        } else if roll < BLUFF_ODDS {
            raise(BLUFF_RAISE, "bluff raises")
        } else if roll < CAUTIOUS_ODDS {
            call_or_check(view, "cautiously calls")
        } else {
            fold()
        }
    }

    fn name(&self) -> &str {
        POLICY_THRESHOLD
    }
}
