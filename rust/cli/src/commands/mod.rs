//! Command handler modules for the texasduel CLI.
//!
//! Each subcommand lives in its own module with a public
//! `handle_<command>_command` function. Output streams are passed in as
//! `&mut dyn Write` (and stdin as `&mut dyn BufRead`) so handlers can be
//! driven from tests with in-memory buffers.

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
