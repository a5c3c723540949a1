pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, wire_hatch_input};
pub use pointer::{wire_pointer_handlers, PointerWiring};
