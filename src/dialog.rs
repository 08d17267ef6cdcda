//! Dialog stage machine
//!
//! Pure state transitions over the per-session stage counter. All I/O,
//! randomness and attribute persistence live in the dispatcher; the
//! transition function here is a pure function of its inputs.

mod intent;
mod script;
mod stage;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use intent::{classify_builtin, DialogIntent};
pub use script::{DialogContent, DialogScript};
pub use stage::DialogStage;
pub use transition::{transition, Turn};
