//! # texasduel-engine: Heads-Up Duel Core
//!
//! Card model, poker hand evaluation, and the betting state machine for a
//! two-seat duel between a human and a policy-controlled computer. The crate
//! has no presentation code: a front end drives a [`session::Session`] with
//! discrete commands and reads its state back to render.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shuffled or stacked decks with draws without replacement
//! - [`hand`] - Five-card evaluation and best-of-seven search
//! - [`player`] - Seats, player stacks, and betting actions
//! - [`policy`] - The seam through which the computer seat decides
//! - [`rules`] - Table constants and raise validation
//! - [`session`] - The dice / deal / bet / resolve state machine
//! - [`logger`] - Bounded per-hand action log
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use texasduel_engine::cards::{Card, Rank, Suit};
//! use texasduel_engine::hand::{evaluate_best, Category};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Three, Suit::Diamonds),
//! ];
//!
//! let strength = evaluate_best(&cards).unwrap();
//! assert_eq!(strength.category, Category::StraightFlush);
//! assert_eq!(strength.tiebreak, vec![14]);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! A seeded [`rules::TableConfig`] makes deals, dice and policy rolls reproducible:
//!
//! ```rust
//! use texasduel_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! assert_eq!(a.draw(9).unwrap(), b.draw(9).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;
pub mod session;
