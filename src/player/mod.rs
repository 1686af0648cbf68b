//! Stepping through a saved code list one code at a time

mod session;
mod state;

pub use session::run_player;
pub use state::CodePlayer;
