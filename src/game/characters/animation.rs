// Character animation clips and playback

use super::state::Facing;
use crate::engine::renderer::{SpriteFrame, SpriteSheet};

/// Errors building an animation clip
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClipError {
    #[error("Animation clip has no frames")]
    Empty,

    #[error("Invalid frame duration: {0}")]
    InvalidFrameDuration(f32),

    #[error("Frame {index} out of range for {sheet} ({count} frames)")]
    FrameOutOfRange {
        sheet: &'static str,
        index: usize,
        count: usize,
    },
}

/// The six clips the giraffe cat can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    RunningRight,
    RunningLeft,
    JumpingRight,
    JumpingLeft,
    StandingRight,
    StandingLeft,
}

impl ClipId {
    pub fn running(facing: Facing) -> Self {
        match facing {
            Facing::Left => Self::RunningLeft,
            Facing::Right => Self::RunningRight,
        }
    }

    pub fn jumping(facing: Facing) -> Self {
        match facing {
            Facing::Left => Self::JumpingLeft,
            Facing::Right => Self::JumpingRight,
        }
    }

    pub fn standing(facing: Facing) -> Self {
        match facing {
            Facing::Left => Self::StandingLeft,
            Facing::Right => Self::StandingRight,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A sequence of frames and where playback currently is within it.
///
/// Clips keep their own playback position, so switching away from a clip
/// and back resumes where it left off.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    frames: Vec<SpriteFrame>,
    /// Seconds each frame is shown
    frame_duration: f32,
    looping: bool,
    current_frame: usize,
    frame_timer: f32,
}

impl AnimationClip {
    pub fn new(frames: Vec<SpriteFrame>, frame_duration: f32) -> Result<Self, ClipError> {
        if frames.is_empty() {
            return Err(ClipError::Empty);
        }
        if !(frame_duration > 0.0) {
            return Err(ClipError::InvalidFrameDuration(frame_duration));
        }
        Ok(Self {
            frames,
            frame_duration,
            looping: false,
            current_frame: 0,
            frame_timer: 0.0,
        })
    }

    /// Every frame of a sprite sheet strip
    pub fn from_sheet(sheet: &SpriteSheet, frame_duration: f32) -> Result<Self, ClipError> {
        Self::new(sheet.frames(), frame_duration)
    }

    /// A still clip showing one frame borrowed from a sheet
    pub fn still(sheet: &SpriteSheet, index: usize) -> Result<Self, ClipError> {
        let frame = sheet.frame(index).ok_or(ClipError::FrameOutOfRange {
            sheet: sheet.path,
            index,
            count: sheet.frame_count,
        })?;
        Self::new(vec![frame], 1.0)
    }

    /// Make the clip wrap around instead of holding its last frame
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn current_frame(&self) -> &SpriteFrame {
        &self.frames[self.current_frame]
    }

    /// Back to the first frame
    pub fn restart(&mut self) {
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    /// Jump to the start of `frame`, clamped to the clip
    pub fn seek(&mut self, frame: usize) {
        self.current_frame = frame.min(self.frames.len() - 1);
        self.frame_timer = 0.0;
    }

    /// Advance playback by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.frame_timer += dt;

        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;

            if self.current_frame + 1 < self.frames.len() {
                self.current_frame += 1;
            } else if self.looping {
                self.current_frame = 0;
            } else {
                // Hold the last frame
                self.frame_timer = 0.0;
                break;
            }
        }
    }
}

/// The six clips plus which one is on screen
#[derive(Debug, Clone)]
pub struct AnimationSet {
    clips: [AnimationClip; 6],
    active: ClipId,
}

impl AnimationSet {
    /// Build from clips listed in `ClipId` declaration order
    pub fn new(clips: [AnimationClip; 6], active: ClipId) -> Self {
        Self { clips, active }
    }

    #[cfg(test)]
    pub fn active(&self) -> ClipId {
        self.active
    }

    /// Put `id` on screen without touching its playback position
    pub fn play(&mut self, id: ClipId) {
        self.active = id;
    }

    pub fn clip(&self, id: ClipId) -> &AnimationClip {
        &self.clips[id.index()]
    }

    pub fn clip_mut(&mut self, id: ClipId) -> &mut AnimationClip {
        &mut self.clips[id.index()]
    }

    pub fn active_clip(&self) -> &AnimationClip {
        self.clip(self.active)
    }

    /// Frame currently on screen
    pub fn current_frame(&self) -> &SpriteFrame {
        self.active_clip().current_frame()
    }

    /// Advance only the clip on screen
    pub fn update(&mut self, dt: f32) {
        let active = self.active;
        self.clip_mut(active).update(dt);
    }
}
