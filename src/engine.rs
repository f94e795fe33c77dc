//=========================================================================
// Orrery Engine
//
// Main entry point and coordinator for the demo.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [event loop]
//         │                          │
//         ├─ with_config()           ├─ validates the config
//         └─ with_channel_capacity() ├─ wires channel, core and platform
//                                    └─ blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::config::Config;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::CoreSystems;
use crate::error::EngineError;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Config**: [`Config::default()`]
/// - **Channel capacity**: 128 batches
///
/// # Examples
///
/// ```no_run
/// use orrery::config::Config;
/// use orrery::EngineBuilder;
///
/// let mut config = Config::default();
/// config.window.title = "planets".into();
///
/// EngineBuilder::new()
///     .with_config(config)
///     .with_channel_capacity(256)
///     .build()
///     .run()?;
/// # Ok::<(), orrery::error::EngineError>(())
/// ```
pub struct EngineBuilder {
    config: Config,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            channel_capacity: 128,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the capacity of the platform → core channel, in input batches.
    ///
    /// One batch is sent per frame at most, and the core drains the channel
    /// every frame, so small values suffice.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn build(self) -> Engine {
        info!(
            "Building engine (window: {}x{}, channel: {})",
            self.config.window.width, self.config.window.height, self.channel_capacity
        );
        Engine {
            config: self.config,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Demo runtime.
///
/// # Architecture
///
/// ```text
/// Engine (event-loop thread)
///   └─► Platform (winit event loop, GL window)
///         └─► CoreSystems (input, clock, scenes) once per frame
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    config: Config,
    channel_capacity: usize,
}

impl Engine {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the demo and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Validates the config
    /// 2. Creates the bounded channel for platform → core communication
    /// 3. Builds the core systems and registers the scenes
    /// 4. Runs the platform event loop (blocks here)
    ///
    /// # Errors
    ///
    /// Invalid configuration, or a window, GL context or event loop
    /// failure.
    pub fn run(self) -> Result<(), EngineError> {
        self.config.validate()?;
        info!("Starting engine runtime");

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        info!("Bridge channel created (capacity: {})", self.channel_capacity);

        //--- 2. Build core systems ----------------------------------------
        let core = CoreSystems::new(rx, &self.config);

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, core, self.config.window);
        info!("Platform initialized, entering event loop");

        platform.run()?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
