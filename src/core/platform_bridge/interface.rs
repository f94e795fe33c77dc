//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core message types.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the core over the bridge channel.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for one frame.
    ///
    /// - `discrete`: key/button events, order significant
    /// - `continuous`: cursor motion, already coalesced
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=========================================================================
// Unit Tests
//=========================================================================
