use glam::Vec2;

/// Length of one reference tick. Velocities are expressed per reference tick.
pub const REFERENCE_TICK: f32 = 1.0 / 60.0;

/// Axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl CollisionBox {
    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }
}

/// Builder for character bodies
pub struct BodyBuilder {
    position: Vec2,
    size: Vec2,
}

impl BodyBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    /// Set the top-left corner of the collision box
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn build(self) -> Body {
        let bounds = CollisionBox {
            position: self.position,
            size: self.size,
        };
        Body {
            bounds,
            previous_position: self.position,
            velocity: Vec2::ZERO,
        }
    }
}

/// A kinematic body: a collision box moved by an explicitly integrated velocity.
///
/// Forces are velocity deltas; callers scale them by the frame delta themselves.
#[derive(Debug, Clone)]
pub struct Body {
    bounds: CollisionBox,
    previous_position: Vec2,
    /// Velocity in pixels per reference tick
    pub velocity: Vec2,
}

impl Body {
    pub fn bounds(&self) -> &CollisionBox {
        &self.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut CollisionBox {
        &mut self.bounds
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.velocity = Vec2::new(x, y);
    }

    pub fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }

    /// Add a velocity delta
    pub fn add_force(&mut self, force: Vec2) {
        self.velocity += force;
    }

    /// Advance the box by `delta` seconds of the current velocity
    pub fn integrate(&mut self, delta: f32) {
        self.previous_position = self.bounds.position;
        self.bounds.position += self.velocity * (delta / REFERENCE_TICK);
    }

    /// Position to draw at, interpolated between the last two integrated positions
    pub fn render_position(&self, alpha: f32) -> Vec2 {
        self.previous_position
            .lerp(self.bounds.position, alpha.clamp(0.0, 1.0))
    }
}

pub mod presets {
    use super::*;

    /// Spawn corner of the giraffe cat
    pub const CAT_SPAWN: Vec2 = Vec2::new(120.0, 80.0);
    /// Edge length of the giraffe cat's square collision box
    pub const CAT_BOX_SIZE: f32 = 36.0;

    /// Create the giraffe cat's body at its spawn point
    pub fn cat_body() -> Body {
        BodyBuilder::new(CAT_BOX_SIZE, CAT_BOX_SIZE)
            .position(CAT_SPAWN.x, CAT_SPAWN.y)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_sets_box() {
        let body = BodyBuilder::new(10.0, 20.0).position(1.0, 2.0).build();
        assert_eq!(body.bounds().position, Vec2::new(1.0, 2.0));
        assert_eq!(body.bounds().bottom(), 22.0);
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_cat_preset() {
        let body = presets::cat_body();
        assert_eq!(
            *body.bounds(),
            CollisionBox {
                position: Vec2::new(120.0, 80.0),
                size: Vec2::splat(36.0),
            }
        );
    }

    #[test]
    fn test_add_force_accumulates() {
        let mut body = BodyBuilder::new(1.0, 1.0).build();
        body.add_force(Vec2::new(1.0, 0.5));
        body.add_force(Vec2::new(-0.25, 0.5));
        assert_relative_eq!(body.velocity().x, 0.75);
        assert_relative_eq!(body.velocity().y, 1.0);
    }

    #[test]
    fn test_integrate_per_reference_tick() {
        let mut body = BodyBuilder::new(1.0, 1.0).build();
        body.set_velocity(2.0, -1.0);
        body.integrate(REFERENCE_TICK);
        assert_relative_eq!(body.bounds().x(), 2.0, epsilon = 1e-5);
        assert_relative_eq!(body.bounds().position.y, -1.0, epsilon = 1e-5);

        // Half a tick moves half as far
        body.integrate(REFERENCE_TICK / 2.0);
        assert_relative_eq!(body.bounds().x(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_render_position_interpolates() {
        let mut body = BodyBuilder::new(1.0, 1.0).build();
        body.set_velocity(4.0, 0.0);
        body.integrate(REFERENCE_TICK);
        assert_relative_eq!(body.render_position(0.0).x, 0.0);
        assert_relative_eq!(body.render_position(0.5).x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(body.render_position(1.0).x, 4.0, epsilon = 1e-5);
        // Alpha outside [0, 1] is clamped
        assert_relative_eq!(body.render_position(3.0).x, 4.0, epsilon = 1e-5);
    }
}
