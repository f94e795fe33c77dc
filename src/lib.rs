//=========================================================================
// Orrery: Library Root
//
// An animated orbital scene drawn with a vector-graphics canvas on an
// OpenGL window.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the platform-agnostic systems (input, clock, scenes) and the
//   `Painter` drawing seam
// - Keep winit and GL context handling (`platform`) private
//
// Typical usage:
// ```no_run
// use orrery::EngineBuilder;
//
// fn main() -> Result<(), orrery::error::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the input pipeline, the animation clock and the scenes.
// `render` holds the `Painter` trait, its femtovg backend and the draw
// helpers the scenes share.
//
pub mod config;
pub mod core;
pub mod error;
pub mod prelude;
pub mod render;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit event loop, the window and the GL context.
// `engine` wires the channel, the core and the platform together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
