//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) and the GL surface with the core
// systems through the bridge channel.
//
// Architecture:
// ```text
//  Event-loop thread
//  ┌───────────────────────────────────────────────────────────────┐
//  │  winit event loop                                             │
//  │   ↓                                                           │
//  │  InputProcessor  (winit → InputEvent, sticky modifiers)       │
//  │   ↓                                                           │
//  │  InputBuffer     (discrete: ordered / continuous: coalesced)  │
//  │   ↓                                                           │
//  │  RedrawRequested ── flush ──► channel ──► CoreSystems::tick   │
//  │                                          CoreSystems::draw    │
//  │                                             ↓                 │
//  │                                          GlWindow::present    │
//  └───────────────────────────────────────────────────────────────┘
// ```
//
// Frame boundary: RedrawRequested
//   → buffered input is sent as one `PlatformEvent::Inputs`
//   → the core ticks with the wall-clock time since the last frame
//   → the frame is drawn and presented, the next redraw requested
//   → empty buffers are not sent
//
// Responsibilities:
// - Create the window and GL context lazily in `resumed()`
// - Convert and buffer input until the frame boundary
// - Keep the GL surface in step with window resizes
// - Report fatal setup errors from `run()` after the loop exits
//
//=========================================================================

//=== Submodules ==========================================================

mod gl_window;
mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

//=== Internal Imports ====================================================

use crate::config::WindowConfig;
use crate::core::platform_bridge::{PlatformEvent, TickControl};
use crate::core::CoreSystems;
use crate::error::PlatformError;
use gl_window::GlWindow;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, core, config)`
/// 2. **Execution**: `run()` blocks in the winit event loop
/// 3. **Setup**: `resumed()` creates the window, context and canvas and
///    loads scene resources
/// 4. **Shutdown**: close request, quit action or fatal error exits the
///    loop; `run()` then returns the stored error, if any
pub(crate) struct Platform {
    config: WindowConfig,

    /// Window, GL context and painter (None until `resumed()`).
    gl: Option<GlWindow>,

    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,

    core: CoreSystems,
    last_frame: Option<Instant>,
    title: String,

    /// First fatal error; returned from `run()`.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        core: CoreSystems,
        config: WindowConfig,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            title: config.title.clone(),
            config,
            gl: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            core,
            last_frame: None,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a fatal error occurs.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends this frame's buffered input to the core.
    ///
    /// The core drains the channel on this same thread, so a full channel
    /// cannot clear by waiting: the batch is dropped with a warning.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };
        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        match self.event_sender.try_send(PlatformEvent::Inputs { discrete, continuous }) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => warn!(
                target: "platform::input",
                "Channel full, dropping {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            ),
            Err(TrySendError::Disconnected(_)) => warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                discrete_count + continuous_count
            ),
        }
    }

    fn notify_closed(&self) {
        if self.event_sender.try_send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Core already gone, close not delivered");
        }
    }

    /// Records a fatal error and leaves the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        self.notify_closed();
        event_loop.exit();
    }

    /// Wall-clock time since the previous frame (zero for the first one).
    fn frame_delta(&mut self) -> Duration {
        let now = Instant::now();
        match self.last_frame.replace(now) {
            Some(previous) => now - previous,
            None => Duration::ZERO,
        }
    }

    /// One frame: input flush, core tick, draw, present.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();
        let dt = self.frame_delta();

        let Some(gl) = self.gl.as_mut() else {
            return;
        };
        let viewport = gl.viewport();

        if self.core.tick(dt, viewport) == TickControl::Exit {
            info!(target: "platform", "Core requested exit");
            event_loop.exit();
            return;
        }

        self.core.draw(gl.painter_mut(), viewport);
        if let Err(e) = gl.present() {
            self.fail(event_loop, e);
            return;
        }

        let title = format!("{} [{}]", self.config.title, self.core.status());
        if title != self.title {
            gl.window().set_title(&title);
            self.title = title;
        }

        gl.window().request_redraw();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn has_window(&self) -> bool {
        self.gl.is_some()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window, GL context and canvas on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        match GlWindow::create(event_loop, &self.config) {
            Ok(mut gl) => {
                self.core.load_resources(gl.painter_mut());
                gl.window().request_redraw();
                self.gl = Some(gl);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.notify_closed();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Resized to {}x{}", size.width, size.height);
                if let Some(gl) = &self.gl {
                    gl.resize(size);
                }
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.gl.as_ref().map_or(1.0, |gl| gl.window().scale_factor());
                let event = self.input_processor.process_cursor(position, scale);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(&key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::input::{InputEvent, KeyCode, Modifiers};
    use crossbeam_channel::{bounded, unbounded, Receiver};

    fn platform_with(
        (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>),
    ) -> (Platform, Receiver<PlatformEvent>) {
        let config = Config::default();
        let core = CoreSystems::new(rx.clone(), &config);
        (Platform::new(tx, core, config.window), rx)
    }

    fn platform() -> (Platform, Receiver<PlatformEvent>) {
        platform_with(unbounded())
    }

    fn space() -> InputEvent {
        InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn window_is_created_lazily() {
        let (platform, _rx) = platform();
        assert!(!platform.has_window());
        assert_eq!(platform.title, "orrery");
    }

    #[test]
    fn first_frame_has_zero_delta() {
        let (mut platform, _rx) = platform();
        assert_eq!(platform.frame_delta(), Duration::ZERO);
        assert!(platform.last_frame.is_some());
    }

    //=====================================================================
    // Flush Tests
    //=====================================================================

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_split_batch() {
        let (mut platform, rx) = platform();
        platform.buffer.push_discrete(space());
        platform.buffer.push_continuous(InputEvent::MouseMoved { x: 1.0, y: 2.0 });
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, vec![space()]);
                assert_eq!(continuous.len(), 1);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn flush_drops_batch_when_channel_full() {
        let (mut platform, rx) = platform_with(bounded(1));

        platform.buffer.push_discrete(space());
        platform.flush_input_buffer();
        platform.buffer.push_discrete(space());
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn close_notification_reaches_core() {
        let (platform, rx) = platform();
        platform.notify_closed();
        assert!(matches!(rx.try_recv(), Ok(PlatformEvent::WindowClosed)));
    }
}
