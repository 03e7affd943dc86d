//! Core state machine types and the fire engine.
//!
//! This module contains:
//! - Transition records and the end-of-table marker
//! - Guard and action callbacks
//! - The `Fsm` instance and its single-pass evaluator

mod error;
mod guard;
mod machine;
mod transition;

pub use error::FsmError;
pub use guard::{Action, ActionFn, Guard, GuardFn};
pub use machine::{FireResult, Fsm};
pub use transition::{StateId, Transition, SENTINEL_STATE};
