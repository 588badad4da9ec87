pub mod keymap;
pub mod queue;

pub use keymap::{action_for_key, wheel_event, KeyAction, HELP_LINES};
pub use queue::{Direction, InputQueue, PanState, SimEvent};
