use serde::{Deserialize, Serialize};

use crate::errors::IllegalAction;
use crate::logger::LOG_CAPACITY;

/// Chips each seat starts with, and is reset to on a rebuy.
pub const STARTING_CHIPS: u32 = 100;
pub const MIN_RAISE: u32 = 10;
pub const MAX_RAISE: u32 = 100;
/// A stack below this triggers the rebuy on continue, and makes the computer fold.
pub const REBUY_THRESHOLD: u32 = 10;
/// Betting rounds per hand; the hand goes to showdown after the last one.
pub const ROUNDS_PER_HAND: u8 = 5;
pub const BOARD_SIZE: usize = 5;

/// Table constants for a session. The defaults are the standard duel table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_chips: u32,
    pub min_raise: u32,
    pub max_raise: u32,
    pub rebuy_threshold: u32,
    pub log_capacity: usize,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            min_raise: MIN_RAISE,
            max_raise: MAX_RAISE,
            rebuy_threshold: REBUY_THRESHOLD,
            log_capacity: LOG_CAPACITY,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Chips still owed to match the current bet.
pub fn to_call(current_bet: u32, own_bet: u32) -> u32 {
    current_bet.saturating_sub(own_bet)
}

/// Checks a raise amount against the table bounds and the raiser's stack.
///
/// The upper bound is the smaller of `max_raise` and `chips`.
///
/// # Examples
///
/// ```
/// use texasduel_engine::rules::{validate_raise, TableConfig};
/// use texasduel_engine::errors::IllegalAction;
///
/// let table = TableConfig::default();
/// assert_eq!(validate_raise(&table, 40, 100), Ok(40));
/// assert_eq!(
///     validate_raise(&table, 40, 30),
///     Err(IllegalAction::RaiseOutOfRange { amount: 40, min: 10, max: 30 })
/// );
/// ```
pub fn validate_raise(table: &TableConfig, amount: u32, chips: u32) -> Result<u32, IllegalAction> {
    let max = table.max_raise.min(chips);
    if amount < table.min_raise || amount > max {
        return Err(IllegalAction::RaiseOutOfRange {
            amount,
            min: table.min_raise,
            max,
        });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_bounds_are_inclusive() {
        let t = TableConfig::default();
        assert!(validate_raise(&t, 10, 100).is_ok());
        assert!(validate_raise(&t, 100, 100).is_ok());
        assert!(validate_raise(&t, 9, 100).is_err());
        assert!(validate_raise(&t, 101, 200).is_err());
    }

    #[test]
    fn short_stack_below_min_raise_cannot_raise() {
        let t = TableConfig::default();
        assert!(matches!(
            validate_raise(&t, 10, 5),
            Err(IllegalAction::RaiseOutOfRange { max: 5, .. })
        ));
    }

    #[test]
    fn to_call_never_underflows() {
        assert_eq!(to_call(30, 10), 20);
        assert_eq!(to_call(10, 30), 0);
    }
}
