// Character motion states
//
// Jump phase and run state are independent axes; facing is remembered across
// both.

/// Last horizontal direction pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1 for left, 1 for right
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Phase of vertical motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpState {
    /// Rising while the jump key is held
    Jumping,
    /// In the air without lift
    Falling,
    /// Resting on the ground
    Grounded,
}

/// Whether horizontal input drove movement this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Running,
    Still,
}

/// The character's discrete motion state
#[derive(Debug, Clone)]
pub struct MotionState {
    facing: Facing,
    jump: JumpState,
    run: RunState,
    /// Game-clock time the current jump started at
    jump_started_at: f64,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionState {
    /// Spawn state: facing right, falling, still
    pub fn new() -> Self {
        Self {
            facing: Facing::Right,
            jump: JumpState::Falling,
            run: RunState::Still,
            jump_started_at: 0.0,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn jump(&self) -> JumpState {
        self.jump
    }

    pub fn run(&self) -> RunState {
        self.run
    }

    #[cfg(test)]
    pub fn jump_started_at(&self) -> f64 {
        self.jump_started_at
    }

    /// Start of a step: anything but a live jump is presumed airborne until
    /// the ground says otherwise, and nobody is running until input says so.
    pub fn begin_step(&mut self) {
        if self.jump != JumpState::Jumping {
            self.jump = JumpState::Falling;
        }
        self.run = RunState::Still;
    }

    /// Touching the ground
    pub fn land(&mut self) {
        self.jump = JumpState::Grounded;
    }

    /// Begin a jump at game-clock time `now`
    pub fn start_jump(&mut self, now: f64) {
        self.jump = JumpState::Jumping;
        self.jump_started_at = now;
    }

    /// Seconds since the current jump started
    pub fn jump_elapsed(&self, now: f64) -> f32 {
        (now - self.jump_started_at) as f32
    }

    /// Stop rising. Returns true if a jump was actually cut short.
    pub fn end_jump(&mut self) -> bool {
        if self.jump == JumpState::Jumping {
            self.jump = JumpState::Falling;
            true
        } else {
            false
        }
    }

    /// Horizontal input in `direction` this step
    pub fn run_toward(&mut self, direction: Facing) {
        self.facing = direction;
        self.run = RunState::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MotionState::new();
        assert_eq!(state.facing(), Facing::Right);
        assert_eq!(state.jump(), JumpState::Falling);
        assert_eq!(state.run(), RunState::Still);
    }

    #[test]
    fn test_begin_step_keeps_jump() {
        let mut state = MotionState::new();
        state.start_jump(1.0);
        state.run_toward(Facing::Left);
        state.begin_step();
        assert_eq!(state.jump(), JumpState::Jumping);
        assert_eq!(state.run(), RunState::Still);
        // Facing survives
        assert_eq!(state.facing(), Facing::Left);
    }

    #[test]
    fn test_begin_step_drops_ground() {
        let mut state = MotionState::new();
        state.land();
        state.begin_step();
        assert_eq!(state.jump(), JumpState::Falling);
    }

    #[test]
    fn test_end_jump_only_from_jumping() {
        let mut state = MotionState::new();
        assert!(!state.end_jump());
        assert_eq!(state.jump(), JumpState::Falling);

        state.land();
        assert!(!state.end_jump());
        assert_eq!(state.jump(), JumpState::Grounded);

        state.start_jump(0.0);
        assert!(state.end_jump());
        assert_eq!(state.jump(), JumpState::Falling);
    }

    #[test]
    fn test_jump_elapsed() {
        let mut state = MotionState::new();
        state.start_jump(2.0);
        assert_eq!(state.jump_started_at(), 2.0);
        assert_eq!(state.jump_elapsed(2.5), 0.5);
    }

    #[test]
    fn test_facing_helpers() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
    }
}
