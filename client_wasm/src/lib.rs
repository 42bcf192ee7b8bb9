//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu for WebGPU API. The simulation itself
//! lives in `game_core`; this crate sizes the page, routes pointer, touch
//! and keyboard input into it, re-arms the tick timer and draws each frame.
//!
//! Screen state, input mapping, frame building, camera and mesh generation
//! are plain Rust and tested natively. The DOM and GPU glue only builds for
//! wasm32.

pub mod camera;
pub mod frame;
pub mod fsm;
pub mod input;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::{init_game, stop_game};
