pub mod pointer;

pub use pointer::{on_tick, wire_input_handlers, GameWiring};
