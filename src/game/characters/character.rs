// The giraffe cat: the player character

use glam::Vec2;
use log::{debug, trace};

use crate::core::math::{clamp_magnitude, sign};
use crate::engine::input::Controls;
use crate::engine::physics::{presets, Body, Ground};
use crate::engine::renderer::{Canvas, SpriteSheet};

use super::animation::{AnimationClip, AnimationSet, ClipError, ClipId};
use super::state::{Facing, JumpState, MotionState, RunState};
use super::tuning::CatTuning;

/// Sprite strips, 64x64 frames
pub const RUN_RIGHT_SHEET: SpriteSheet = SpriteSheet::new("giraffecat/run_right.png", 64, 64, 8);
pub const RUN_LEFT_SHEET: SpriteSheet = SpriteSheet::new("giraffecat/run_left.png", 64, 64, 8);
pub const JUMP_RIGHT_SHEET: SpriteSheet = SpriteSheet::new("giraffecat/jump_right.png", 64, 64, 3);
pub const JUMP_LEFT_SHEET: SpriteSheet = SpriteSheet::new("giraffecat/jump_left.png", 64, 64, 3);

/// The player character.
///
/// Each step applies gravity, lands on the ground, reacts to held keys with
/// horizontal acceleration and a height-limited jump, applies friction and a
/// horizontal speed cap, then integrates and animates.
#[derive(Debug, Clone)]
pub struct GiraffeCat {
    tuning: CatTuning,
    state: MotionState,
    body: Body,
    ground: Ground,
    /// Last force applied
    acceleration: Vec2,
    /// Unit vector along the facing
    facing_direction: Vec2,
    animations: AnimationSet,
    /// Simulation time in seconds
    clock: f64,
}

impl GiraffeCat {
    /// Create the cat at its spawn point, falling, facing right
    pub fn new(tuning: CatTuning) -> Result<Self, ClipError> {
        let clips = [
            AnimationClip::from_sheet(&RUN_RIGHT_SHEET, tuning.run_frame_duration)?.looping(),
            AnimationClip::from_sheet(&RUN_LEFT_SHEET, tuning.run_frame_duration)?.looping(),
            AnimationClip::from_sheet(&JUMP_RIGHT_SHEET, tuning.jump_frame_duration)?,
            AnimationClip::from_sheet(&JUMP_LEFT_SHEET, tuning.jump_frame_duration)?,
            AnimationClip::still(&RUN_RIGHT_SHEET, tuning.standing_frame)?,
            AnimationClip::still(&RUN_LEFT_SHEET, tuning.standing_frame)?,
        ];

        let mut cat = Self {
            ground: Ground::new(tuning.ground_y),
            tuning,
            state: MotionState::new(),
            body: presets::cat_body(),
            acceleration: Vec2::ZERO,
            facing_direction: Vec2::X,
            animations: AnimationSet::new(clips, ClipId::JumpingRight),
            clock: 0.0,
        };
        cat.init();
        Ok(cat)
    }

    /// Zero the forces and velocity and face right. Position and states are kept.
    pub fn init(&mut self) {
        self.acceleration = Vec2::ZERO;
        self.facing_direction = Vec2::X;
        self.body.set_velocity(0.0, 0.0);
    }

    /// Advance one simulation step of `delta` seconds
    pub fn update(&mut self, delta: f32, controls: Controls) {
        self.add_force(0.0, self.tuning.gravity * delta);

        let was_grounded = self.state.jump() == JumpState::Grounded;
        self.state.begin_step();

        // Resting exactly on the line counts as contact, see `Ground::is_touching`
        if self.ground.clamp(&mut self.body) {
            self.state.land();
            if !was_grounded {
                debug!("Landed at x = {:.1}", self.body.bounds().x());
            }
        }

        if controls.jump {
            match self.state.jump() {
                JumpState::Grounded => self.start_jump(delta),
                JumpState::Jumping => self.continue_jump(delta),
                JumpState::Falling => {}
            }
        } else {
            self.end_jump();
        }
        if controls.left {
            self.move_left(delta);
        }
        if controls.right {
            self.move_right(delta);
        }

        if self.state.run() == RunState::Still && self.state.jump() == JumpState::Grounded {
            self.animations.play(ClipId::standing(self.state.facing()));
        }

        self.apply_friction(delta);
        self.body.velocity.x = clamp_magnitude(self.body.velocity.x, self.tuning.max_velocity_x);

        self.body.integrate(delta);
        self.animations.update(delta);
        self.clock += delta as f64;

        trace!(
            "{:?}/{:?} pos={:?} vel={:?}",
            self.state.jump(),
            self.state.run(),
            self.body.bounds().position,
            self.body.velocity()
        );
    }

    fn start_jump(&mut self, delta: f32) {
        self.state.start_jump(self.clock);
        debug!("Jump started facing {:?}", self.state.facing());

        let clip = ClipId::jumping(self.state.facing());
        self.animations.clip_mut(clip).restart();
        self.animations.play(clip);

        // Leaving the ground: the gravity the ground clamp absorbed this step applies again
        self.add_force(0.0, self.tuning.gravity * delta);
        self.continue_jump(delta);
    }

    fn continue_jump(&mut self, delta: f32) {
        if self.state.jump() != JumpState::Jumping {
            return;
        }
        let elapsed = self.state.jump_elapsed(self.clock);
        if elapsed < self.tuning.max_jump_duration {
            // Only the part of the step inside the lift window counts
            let lift_time = delta.min(self.tuning.max_jump_duration - elapsed);
            self.add_force(0.0, -self.tuning.jump_acceleration * lift_time);
        } else {
            self.end_jump();
        }
    }

    fn end_jump(&mut self) {
        if self.state.end_jump() {
            debug!("Jump ended after {:.3}s", self.state.jump_elapsed(self.clock));
        }
    }

    pub fn move_left(&mut self, delta: f32) {
        self.move_toward(Facing::Left, delta);
    }

    pub fn move_right(&mut self, delta: f32) {
        self.move_toward(Facing::Right, delta);
    }

    fn move_toward(&mut self, direction: Facing, delta: f32) {
        match self.state.jump() {
            JumpState::Jumping => {
                // Turning mid-jump swaps to the mirrored clip on the same frame
                let facing = self.state.facing();
                if facing != direction {
                    let frame = self
                        .animations
                        .clip(ClipId::jumping(facing))
                        .current_frame_index();
                    let mirrored = ClipId::jumping(direction);
                    let clip = self.animations.clip_mut(mirrored);
                    clip.restart();
                    clip.seek(frame);
                    self.animations.play(mirrored);
                }
            }
            JumpState::Falling => {}
            JumpState::Grounded => self.animations.play(ClipId::running(direction)),
        }

        self.state.run_toward(direction);
        self.facing_direction = Vec2::new(direction.sign(), 0.0);
        self.add_force(
            self.facing_direction.x * self.tuning.run_acceleration * delta,
            0.0,
        );
    }

    /// Slow horizontal motion toward zero without reversing it
    fn apply_friction(&mut self, delta: f32) {
        let vx = self.body.velocity.x;
        if vx == 0.0 {
            return;
        }
        let step = self.tuning.friction * delta;
        if step > vx.abs() {
            self.body.velocity.x = 0.0;
        } else {
            self.add_force(-sign(vx) * step, 0.0);
        }
    }

    /// Apply a velocity delta, remembering it as the current acceleration
    pub fn add_force(&mut self, x: f32, y: f32) {
        self.acceleration = Vec2::new(x, y);
        self.body.add_force(self.acceleration);
    }

    /// Draw the active frame centred on the collision box.
    ///
    /// `alpha` interpolates between the last two simulated positions.
    pub fn render<C: Canvas>(&self, canvas: &mut C, alpha: f32) {
        let frame = self.animations.current_frame();
        let offset = Vec2::new(frame.width() / 4.0, frame.height() / 4.0);
        canvas.draw_frame(frame, self.body.render_position(alpha) - offset);
    }

    /// Debug overlay: whether right is held, in the top-left corner
    pub fn render_debug<C: Canvas>(&self, canvas: &mut C, controls: Controls) {
        canvas.draw_text(&controls.right.to_string(), Vec2::ZERO);
    }
}
