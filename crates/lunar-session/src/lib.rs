//! Lunar Session — orchestration on top of the answer and event engines.
//!
//! Holds the in-memory library of uploaded materials, composes displayable
//! chat replies, wraps detected events as suggestions with their source
//! material, and models the focus timer. Persistence, rendering, and
//! networking stay with the surrounding app shell.

pub mod materials;
pub mod responder;
pub mod session;
pub mod timer;
pub mod types;

pub use materials::{content_hash, Material, MaterialLibrary};
pub use responder::name_from_email;
pub use session::StudySession;
pub use timer::{FocusTimer, TimerPreset, TIMER_PRESETS};
pub use types::{ChatReply, EventSuggestion};
