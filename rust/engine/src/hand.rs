use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Strength of a five-card hand.
///
/// The derived ordering compares `category` first and then `tiebreak`
/// lexicographically, which is the total order used for showdowns. Only the
/// values listed per category take part in tie-breaking: Three of a Kind and
/// One Pair carry no kickers, so equal trips or equal pairs draw.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // rank values, most significant first
    pub tiebreak: Vec<u8>,
}

impl HandStrength {
    fn new(category: Category, tiebreak: Vec<u8>) -> Self {
        Self { category, tiebreak }
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rank_name(self))
    }
}

/// Evaluates exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }
    // (multiplicity, value), strongest group first
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_top(&values, groups.len());

    match (is_flush, straight) {
        (true, Some(top)) => return HandStrength::new(Category::StraightFlush, vec![top]),
        _ if groups[0].0 == 4 => {
            return HandStrength::new(Category::FourOfAKind, vec![groups[0].1]);
        }
        _ if groups[0].0 == 3 && groups[1].0 == 2 => {
            return HandStrength::new(Category::FullHouse, vec![groups[0].1, groups[1].1]);
        }
        (true, None) => return HandStrength::new(Category::Flush, values),
        (false, Some(top)) => return HandStrength::new(Category::Straight, vec![top]),
        _ => {}
    }

    match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (3, _) => HandStrength::new(Category::ThreeOfAKind, vec![groups[0].1]),
        (2, Some(2)) => HandStrength::new(Category::TwoPair, vec![groups[0].1, groups[1].1]),
        (2, _) => HandStrength::new(Category::OnePair, vec![groups[0].1]),
        _ => HandStrength::new(Category::HighCard, values),
    }
}

/// Top card of a straight, if the descending `values` form one.
/// The wheel A-2-3-4-5 tops out at 5.
fn straight_top(values: &[u8], distinct: usize) -> Option<u8> {
    if distinct != 5 {
        return None;
    }
    if values == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    if values[0] - values[4] == 4 {
        Some(values[0])
    } else {
        None
    }
}

/// Best five-card strength among 5 to 7 distinct cards.
pub fn evaluate_best(cards: &[Card]) -> Result<HandStrength, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidHandSize { count: cards.len() });
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(GameError::DuplicateCard(c));
        }
    }

    let n = cards.len();
    let mut best: Option<HandStrength> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let strength = evaluate_five(&five);
                        if best.as_ref().is_none_or(|cur| strength > *cur) {
                            best = Some(strength);
                        }
                    }
                }
            }
        }
    }
    // n >= 5 guarantees at least one subset
    best.ok_or(GameError::InvalidHandSize { count: n })
}

/// Display name such as "Full House (K-high)", keyed on the leading tiebreak value.
pub fn rank_name(strength: &HandStrength) -> String {
    let main = strength
        .tiebreak
        .first()
        .and_then(|&v| Rank::from_value(v))
        .unwrap_or(Rank::Two);
    format!("{} ({}-high)", strength.category.name(), main.label())
}
