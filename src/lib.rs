//! fsm-table: table-driven finite state machines built by composition
//!
//! A machine is bound to a caller-owned, ordered table of transition
//! records. Each call to [`Fsm::fire`] scans the table once and applies at
//! most one transition: the first record for the current state whose guard
//! passes. Machines carry a caller-defined context instead of being
//! subclassed, so they embed directly into larger objects.
//!
//! # Core Concepts
//!
//! - **Transition**: `origin => dest`, gated by an optional guard and
//!   followed by an optional action
//! - **Table**: a slice of transitions closed by [`Transition::SENTINEL`]
//! - **Fire**: one evaluation pass, reported as a [`FireResult`]
//! - **Lifecycle**: heap instances come from an [`FsmManager`] and its
//!   injected [`FsmAllocator`]; embedded instances use [`Fsm::new`]
//!
//! # Example
//!
//! ```rust
//! use fsm_table::core::{FireResult, Fsm, Transition};
//! use fsm_table::transition_table;
//!
//! #[derive(Default)]
//! struct Button {
//!     pressed: bool,
//!     clicks: u32,
//! }
//!
//! fn is_pressed(fsm: &Fsm<'_, Button>) -> bool {
//!     fsm.context().pressed
//! }
//!
//! fn is_released(fsm: &Fsm<'_, Button>) -> bool {
//!     !fsm.context().pressed
//! }
//!
//! fn count_click(fsm: &mut Fsm<'_, Button>) {
//!     fsm.context_mut().clicks += 1;
//! }
//!
//! static BUTTON: [Transition<Button>; 3] = transition_table![
//!     0 => 1, when is_pressed;
//!     1 => 0, when is_released, then count_click;
//! ];
//!
//! let mut fsm = Fsm::new(&BUTTON, Button::default()).unwrap();
//! assert_eq!(fsm.fire(), FireResult::Blocked);
//!
//! fsm.context_mut().pressed = true;
//! assert_eq!(fsm.fire(), FireResult::Fired);
//!
//! fsm.context_mut().pressed = false;
//! assert_eq!(fsm.fire(), FireResult::Fired);
//! assert_eq!(fsm.context().clicks, 1);
//! ```

pub mod builder;
pub mod core;
pub mod lifecycle;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Action, FireResult, Fsm, FsmError, Guard, StateId, Transition};
pub use crate::lifecycle::{initialize, FsmAllocator, FsmBox, FsmManager, SystemAllocator};
pub use crate::table::MAX_TRANSITIONS;
