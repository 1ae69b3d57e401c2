//! Hint dispatch and device control engine
//!
//! `controller` owns the state, `hint` maps events to actions, `boost` and
//! `interactive` hold the actions themselves.

mod boost;
mod controller;
mod hint;
mod interactive;

pub use controller::{FrequencyTables, PowerController};
pub use hint::{dispatch, BoostAction, HintEvent, HintKind};
