//! Classic grid Snake with a deterministic game core.
//!
//! The simulation lives in [`game::GameState`] and advances one discrete
//! step per tick, independent of the timing source. Rendering, input, and
//! score persistence are collaborators that read the state and react to the
//! events a step returns. The driver loop in `main.rs` wires them together.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
