//! Configuration command handler.
//!
//! Prints every resolved setting with its source (`default`, `file`, `env`,
//! or `cli`) as pretty JSON.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_chips": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "min_raise": {
            "value": config.min_raise,
            "source": sources.min_raise,
        },
        "max_raise": {
            "value": config.max_raise,
            "source": sources.max_raise,
        },
        "rebuy_threshold": {
            "value": config.rebuy_threshold,
            "source": sources.rebuy_threshold,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "policy": {
            "value": config.policy,
            "source": sources.policy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
