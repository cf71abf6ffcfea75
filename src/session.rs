//! Scroll session core
//!
//! The per-tick stepping algorithm lives in [`advance`], a pure function of
//! (config, elapsed time, geometry, offset). Both consumers go through it:
//! the in-app session drives the terminal viewport with it, and the
//! bookmarklet generator emits a script whose tick body mirrors it term for
//! term, so the two deployments cannot drift apart.

use clap::ValueEnum;
use serde::Deserialize;

/// Accepted speed range in pixels per second.
///
/// A single validation boundary applied in `ScrollConfig::new`, the one
/// point where configuration is accepted (config file, CLI flags and
/// interactive adjustments all pass through it).
pub const SPEED_MIN: f64 = 10.0;
pub const SPEED_MAX: f64 = 3000.0;

/// Increment used by the interactive speed controls.
pub const SPEED_STEP: f64 = 50.0;

/// Offset changes smaller than this count as no movement.
pub const MOVEMENT_EPSILON: f64 = 0.1;

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Down,
    Up,
}

impl Direction {
    /// Sign of the per-tick delta: down advances the offset, up rewinds it.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Down => 1.0,
            Direction::Up => -1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

/// Validated scroll configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub speed: f64,
    pub direction: Direction,
    pub loop_at_end: bool,
}

impl ScrollConfig {
    /// Accept a configuration, clamping speed into `[SPEED_MIN, SPEED_MAX]`.
    pub fn new(speed: f64, direction: Direction, loop_at_end: bool) -> Self {
        Self {
            speed: clamp_speed(speed),
            direction,
            loop_at_end,
        }
    }

    /// Adjust speed by `delta` px/s, staying within the accepted range.
    pub fn adjust_speed(&mut self, delta: f64) {
        self.speed = clamp_speed(self.speed + delta);
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::new(250.0, Direction::Down, true)
    }
}

fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return SPEED_MIN;
    }
    speed.clamp(SPEED_MIN, SPEED_MAX)
}

/// Document geometry in pixels, re-read by the caller before every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub content_height: f64,
    pub viewport_height: f64,
}

impl Geometry {
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            content_height,
            viewport_height,
        }
    }

    /// Maximum scrollable offset. Zero when content fits the viewport.
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Result of one pure stepping computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub offset: f64,
    /// Offset was repositioned to the opposite boundary.
    pub wrapped: bool,
    /// The session must stop after this tick.
    pub terminal: bool,
}

/// One tick of the stepping algorithm.
///
/// `dt` is in seconds, `offset` the pre-tick scroll offset in pixels. A tick
/// with `dt <= 0` (first tick, duplicate timestamp) leaves the offset alone
/// and triggers no boundary transition.
///
/// Boundary rules: reaching the edge matching the direction either wraps to
/// the opposite boundary (loop enabled, document actually scrollable) or
/// ends the session with the offset parked on that edge. A tick that fails to move the offset by more than
/// `MOVEMENT_EPSILON` ends the session regardless of the loop flag - looping
/// over a document that cannot scroll would tick forever without converging.
pub fn advance(config: &ScrollConfig, dt: f64, offset: f64, geometry: Geometry) -> Advance {
    if dt <= 0.0 {
        return Advance {
            offset,
            wrapped: false,
            terminal: false,
        };
    }

    let max = geometry.max_offset();
    let delta = config.speed * dt * config.direction.sign();
    let applied = (offset + delta).clamp(0.0, max);

    let at_top = applied <= 0.0;
    let at_bottom = (applied + geometry.viewport_height).ceil() >= geometry.content_height;
    let heading_down = config.direction == Direction::Down;

    if (heading_down && at_bottom) || (!heading_down && at_top) {
        if config.loop_at_end && max > MOVEMENT_EPSILON {
            return Advance {
                offset: if heading_down { 0.0 } else { max },
                wrapped: true,
                terminal: false,
            };
        }
        // The bottom check rounds up, so `applied` can sit just short of the
        // edge; a terminal stop parks exactly on it.
        return Advance {
            offset: if heading_down { max } else { 0.0 },
            wrapped: false,
            terminal: true,
        };
    }

    if (applied - offset).abs() < MOVEMENT_EPSILON {
        return Advance {
            offset: applied,
            wrapped: false,
            terminal: true,
        };
    }

    Advance {
        offset: applied,
        wrapped: false,
        terminal: false,
    }
}

/// Outcome of a driven tick, consumed by the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub wrapped: bool,
}

/// One running instance of the stepping algorithm with a fixed configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub config: ScrollConfig,
    running: bool,
    last_timestamp_ms: Option<f64>,
}

impl Session {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            running: false,
            last_timestamp_ms: None,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Begin advancing. No-op while already running; the single event loop
    /// is the only scheduler, so there is never more than one pending tick.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
    }

    /// Halt and reset timing state. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_timestamp_ms = None;
    }

    /// Drive one tick at `now_ms` against the current geometry.
    ///
    /// Returns the offset the caller should apply. Stops the session itself
    /// when the step is terminal.
    pub fn tick(&mut self, now_ms: f64, offset: f64, geometry: Geometry) -> Tick {
        if !self.running {
            return Tick {
                offset,
                wrapped: false,
            };
        }

        let last = self.last_timestamp_ms.unwrap_or(now_ms);
        let dt = ((now_ms - last) / 1000.0).max(0.0);
        self.last_timestamp_ms = Some(now_ms);

        let step = advance(&self.config, dt, offset, geometry);
        if step.terminal {
            self.stop();
        }
        Tick {
            offset: step.offset,
            wrapped: step.wrapped,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}
