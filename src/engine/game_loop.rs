/// Game loop timing and control
///
/// Fixed timestep updates with variable rendering: the simulation always
/// advances in steps of the same length while frames render as fast as the
/// window allows.
use log::{info, warn};
use std::time::{Duration, Instant};

/// Default update rate (60 updates per second)
pub const DEFAULT_TICK_RATE: f32 = 60.0;

/// Maximum number of updates per frame to prevent a spiral of death
const MAX_UPDATES_PER_FRAME: u32 = 5;

/// Weight of the newest frame in the smoothed FPS estimate
const FPS_SMOOTHING: f32 = 0.1;

/// Game loop timing state
pub struct GameLoop {
    /// Length of one simulation step
    timestep: Duration,
    /// Time not yet consumed by updates
    accumulator: Duration,
    last_frame_time: Instant,
    paused: bool,
    frame_count: u64,
    /// Exponentially smoothed frames per second
    fps: f32,
}

impl GameLoop {
    /// Create a game loop running `tick_rate` updates per second
    pub fn new(tick_rate: f32) -> Self {
        Self {
            timestep: Duration::from_secs_f32(1.0 / tick_rate),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall time, returns the number of updates to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        let secs = frame_time.as_secs_f32();
        if secs > 0.0 {
            let instant_fps = 1.0 / secs;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                self.fps + (instant_fps - self.fps) * FPS_SMOOTHING
            };
        }

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= self.timestep && updates < MAX_UPDATES_PER_FRAME {
            self.accumulator -= self.timestep;
            updates += 1;
        }

        if updates == MAX_UPDATES_PER_FRAME && self.accumulator >= self.timestep {
            warn!(
                "Falling behind: dropping {:.1} ms of simulation time",
                self.accumulator.as_secs_f32() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }

        updates
    }

    /// Length of one update step in seconds
    pub fn timestep(&self) -> f32 {
        self.timestep.as_secs_f32()
    }

    /// Fraction of a step accumulated since the last update, for interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator.as_secs_f32() / self.timestep()).clamp(0.0, 1.0)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Don't burst through the time spent paused
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}
