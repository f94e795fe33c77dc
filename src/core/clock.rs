//=========================================================================
// Animation Clock
//=========================================================================
//
// Scene time with a running/paused switch and an adjustable rate.
//
//   scene_time += wall_dt * rate     (only while running)
//
// This running ↔ paused pair is the demo's only state machine.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::info;

//=== Internal Dependencies ===============================================

use crate::config::AnimationConfig;

//=== AnimationClock ======================================================

/// Drives scene time from wall-clock frame deltas.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    elapsed: f64,
    frames: u64,
    paused: bool,
    rate: f64,
    base_rate: f64,
    rate_factor: f64,
    min_rate: f64,
    max_rate: f64,
}

impl AnimationClock {
    /// Creates a clock from a validated animation config.
    pub fn new(config: &AnimationConfig) -> Self {
        let rate = config.rate.clamp(config.min_rate, config.max_rate);
        Self {
            elapsed: 0.0,
            frames: 0,
            paused: config.start_paused,
            rate,
            base_rate: rate,
            rate_factor: config.rate_factor,
            min_rate: config.min_rate,
            max_rate: config.max_rate,
        }
    }

    //--- Time -------------------------------------------------------------

    /// Advances scene time by `dt` scaled by the rate. No-op while paused.
    pub fn advance(&mut self, dt: Duration) {
        if self.paused {
            return;
        }
        self.elapsed += dt.as_secs_f64() * self.rate;
        self.frames += 1;
    }

    /// Scene time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames that advanced the clock.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    //--- Controls ---------------------------------------------------------

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!(target: "core", "{}", if self.paused { "Paused" } else { "Running" });
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn faster(&mut self) {
        self.set_rate(self.rate * self.rate_factor);
    }

    pub fn slower(&mut self) {
        self.set_rate(self.rate / self.rate_factor);
    }

    pub fn reset_rate(&mut self) {
        self.set_rate(self.base_rate);
    }

    fn set_rate(&mut self, rate: f64) {
        let rate = rate.clamp(self.min_rate, self.max_rate);
        if rate != self.rate {
            self.rate = rate;
            info!(target: "core", "Rate: {}x", self.rate);
        }
    }

    /// One-line summary for the window title.
    pub fn status(&self) -> String {
        let state = if self.paused { "paused" } else { "running" };
        format!("{} @ {}x, t={:.1}s", state, self.rate, self.elapsed)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> AnimationClock {
        AnimationClock::new(&AnimationConfig::default())
    }

    fn frame() -> Duration {
        Duration::from_millis(500)
    }

    //=====================================================================
    // Time Tests
    //=====================================================================

    #[test]
    fn advance_scales_by_rate() {
        let mut clock = clock();
        clock.advance(frame());
        assert_eq!(clock.elapsed(), 0.5);

        clock.faster();
        clock.advance(frame());
        assert_eq!(clock.elapsed(), 1.5);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut clock = clock();
        clock.toggle_pause();
        clock.advance(frame());
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frames(), 0);

        clock.toggle_pause();
        clock.advance(frame());
        assert_eq!(clock.elapsed(), 0.5);
    }

    #[test]
    fn start_paused_is_honored() {
        let config = AnimationConfig { start_paused: true, ..AnimationConfig::default() };
        assert!(AnimationClock::new(&config).is_paused());
    }

    //=====================================================================
    // Rate Tests
    //=====================================================================

    #[test]
    fn rate_steps_by_factor() {
        let mut clock = clock();
        clock.faster();
        assert_eq!(clock.rate(), 2.0);
        clock.slower();
        clock.slower();
        assert_eq!(clock.rate(), 0.5);
    }

    #[test]
    fn rate_is_clamped() {
        let config = AnimationConfig {
            rate: 1.0,
            rate_factor: 2.0,
            min_rate: 0.5,
            max_rate: 4.0,
            start_paused: false,
        };
        let mut clock = AnimationClock::new(&config);

        for _ in 0..10 {
            clock.faster();
        }
        assert_eq!(clock.rate(), 4.0);

        for _ in 0..10 {
            clock.slower();
        }
        assert_eq!(clock.rate(), 0.5);
    }

    #[test]
    fn reset_restores_configured_rate() {
        let mut clock = clock();
        clock.faster();
        clock.faster();
        clock.reset_rate();
        assert_eq!(clock.rate(), 1.0);
    }

    #[test]
    fn status_reports_state() {
        let mut clock = clock();
        assert!(clock.status().starts_with("running @ 1x"));
        clock.toggle_pause();
        assert!(clock.status().starts_with("paused"));
    }
}
