use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::{GameError, IllegalAction};

/// One of the two seats at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human-controlled side ("Player 1")
    Human,
    /// The policy-controlled side ("Computer")
    Computer,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }
}

/// A betting decision. Amounts are the chips put in by this action.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    Check,
    Call(u32),
    Raise(u32),
    Fold,
}

/// Player state for one seat: chip stack, hole cards, and this hand's contributions.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    is_human: bool,
    chips: u32,
    hole: Option<[Card; 2]>,
    folded: bool,
    /// Contribution in the current betting round
    bet: u32,
    /// Contribution over the whole hand
    total_bet_hand: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, is_human: bool, chips: u32) -> Self {
        Self {
            name: name.into(),
            is_human,
            chips,
            hole: None,
            folded: false,
            bet: 0,
            total_bet_hand: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn total_bet_hand(&self) -> u32 {
        self.total_bet_hand
    }

    pub(crate) fn start_hand(&mut self, hole: [Card; 2]) {
        self.hole = Some(hole);
        self.folded = false;
        self.bet = 0;
        self.total_bet_hand = 0;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn reset_round(&mut self) {
        self.bet = 0;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub(crate) fn set_chips(&mut self, chips: u32) {
        self.chips = chips;
    }

    /// Moves `amount` from the stack into this round's and this hand's
    /// contribution. Refuses, leaving the player untouched, when the stack is short.
    pub(crate) fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(IllegalAction::CannotAffordCall {
                need: amount,
                chips: self.chips,
            }
            .into());
        }
        self.chips -= amount;
        self.bet += amount;
        self.total_bet_hand += amount;
        Ok(())
    }
}

/// Both players, addressed by [`Seat`].
#[derive(Debug, Clone)]
pub struct Seats([Player; 2]);

impl Seats {
    pub fn new(human: Player, computer: Player) -> Self {
        Self([human, computer])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.0.iter_mut()
    }
}

impl Index<Seat> for Seats {
    type Output = Player;

    fn index(&self, seat: Seat) -> &Player {
        &self.0[seat.index()]
    }
}

impl IndexMut<Seat> for Seats {
    fn index_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.0[seat.index()]
    }
}
