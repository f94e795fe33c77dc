//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the winit platform layer and the platform-agnostic
// core. The platform only ever talks to the core through `PlatformEvent`
// messages on a bounded channel.
//
// Components:
// - `interface`: the message types
// - `event_collector`: core-side draining of the channel each frame
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
