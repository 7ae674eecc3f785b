use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerAction;

/// What the policy-controlled seat can see when it acts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyView {
    pub hole: [Card; 2],
    /// Revealed community cards only
    pub board: Vec<Card>,
    pub current_bet: u32,
    pub own_bet: u32,
    pub own_chips: u32,
}

impl PolicyView {
    /// Hole cards followed by the revealed board.
    pub fn visible_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(2 + self.board.len());
        cards.extend_from_slice(&self.hole);
        cards.extend_from_slice(&self.board);
        cards
    }

    pub fn to_call(&self) -> u32 {
        crate::rules::to_call(self.current_bet, self.own_bet)
    }
}

/// An action together with the log line explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: PlayerAction,
    pub rationale: String,
}

impl Decision {
    pub fn new(action: PlayerAction, rationale: impl Into<String>) -> Self {
        Self {
            action,
            rationale: rationale.into(),
        }
    }
}

/// Chooses the computer's action. Implementations must only return actions
/// the view can afford; the session applies them without further checks
/// beyond refusing to overdraw the stack.
///
/// # Example Implementation
///
/// ```rust
/// use rand::RngCore;
/// use texasduel_engine::player::PlayerAction;
/// use texasduel_engine::policy::{Decision, DecisionPolicy, PolicyView};
///
/// struct AlwaysCheck;
///
/// impl DecisionPolicy for AlwaysCheck {
///     fn decide(&self, _view: &PolicyView, _rng: &mut dyn RngCore) -> Decision {
///         Decision::new(PlayerAction::Check, "Computer checks")
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCheck"
///     }
/// }
/// ```
pub trait DecisionPolicy: Send + Sync {
    fn decide(&self, view: &PolicyView, rng: &mut dyn RngCore) -> Decision;

    fn name(&self) -> &str;
}
