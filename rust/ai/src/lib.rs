//! # texasduel-ai: Computer Opponent Policies
//!
//! Implementations of [`DecisionPolicy`] for the computer seat of a
//! [`texasduel_engine::session::Session`].
//!
//! ## Core Components
//!
//! - [`threshold`] - Strength-band policy with randomized raises and bluffs
//! - [`create_policy`] - Factory resolving a policy by name
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use texasduel_ai::create_policy;
//! use texasduel_engine::cards::{Card, Rank, Suit};
//! use texasduel_engine::policy::PolicyView;
//!
//! let policy = create_policy("threshold").expect("known policy");
//! let view = PolicyView {
//!     hole: [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)],
//!     board: vec![Card::new(Rank::Ace, Suit::Clubs)],
//!     current_bet: 0,
//!     own_bet: 0,
//!     own_chips: 100,
//! };
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let decision = policy.decide(&view, &mut rng);
//! println!("{}", decision.rationale);
//! ```
//!
//! ## Policies
//!
//! - `"threshold"` - the default computer opponent

pub use texasduel_engine::policy::{Decision, DecisionPolicy, PolicyView};

pub mod threshold;

pub use threshold::ThresholdPolicy;

/// Name accepted by [`create_policy`] for [`ThresholdPolicy`].
pub const POLICY_THRESHOLD: &str = "threshold";

/// Names of every policy [`create_policy`] can build.
pub const POLICY_NAMES: &[&str] = &[POLICY_THRESHOLD];

/// Builds a policy by name, case-insensitively. Returns `None` for names
/// not in [`POLICY_NAMES`].
pub fn create_policy(name: &str) -> Option<Box<dyn DecisionPolicy>> {
    match name.to_ascii_lowercase().as_str() {
        POLICY_THRESHOLD => Some(Box::new(ThresholdPolicy::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_resolves_known_names() {
        for name in POLICY_NAMES {
            let policy = create_policy(name).expect("listed policy");
            assert_eq!(policy.name(), *name);
        }
        assert!(create_policy("THRESHOLD").is_some());
    }

    #[test]
    fn factory_rejects_unknown_names() {
        assert!(create_policy("baseline").is_none());
        assert!(create_policy("").is_none());
    }
}
