use super::body::Body;

/// A flat floor spanning the whole level at a fixed y (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    y: f32,
}

impl Ground {
    pub fn new(y: f32) -> Self {
        Self { y }
    }

    /// Check if the body's bottom edge touches or has sunk below the floor
    pub fn is_touching(&self, body: &Body) -> bool {
        // Deliberately `>=`: a body resting exactly on the line stays grounded
        body.bounds().bottom() >= self.y
    }

    /// Snap a body resting on or below the floor back on top of it and stop
    /// its vertical motion. Returns true if the body was in contact.
    pub fn clamp(&self, body: &mut Body) -> bool {
        if !self.is_touching(body) {
            return false;
        }
        let height = body.bounds().height();
        body.bounds_mut().set_y(self.y - height);
        body.set_velocity_y(0.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::BodyBuilder;

    #[test]
    fn test_airborne_body_untouched() {
        let ground = Ground::new(100.0);
        let mut body = BodyBuilder::new(10.0, 10.0).position(0.0, 50.0).build();
        body.set_velocity(0.0, 2.0);
        assert!(!ground.clamp(&mut body));
        assert_eq!(body.bounds().position.y, 50.0);
        assert_eq!(body.velocity().y, 2.0);
    }

    #[test]
    fn test_sunken_body_snapped() {
        let ground = Ground::new(100.0);
        let mut body = BodyBuilder::new(10.0, 10.0).position(3.0, 95.0).build();
        body.set_velocity(1.0, 4.0);
        assert!(ground.clamp(&mut body));
        assert_eq!(body.bounds().position.y, 90.0);
        assert_eq!(body.bounds().x(), 3.0);
        assert_eq!(body.velocity().y, 0.0);
        // Horizontal motion is kept
        assert_eq!(body.velocity().x, 1.0);
    }

    #[test]
    fn test_resting_body_counts_as_touching() {
        let ground = Ground::new(100.0);
        let mut body = BodyBuilder::new(10.0, 10.0).position(0.0, 90.0).build();
        assert!(ground.is_touching(&body));

        // Clamping a resting body leaves it where it is, still in contact
        assert!(ground.clamp(&mut body));
        assert_eq!(body.bounds().position.y, 90.0);
        assert!(ground.is_touching(&body));
    }
}
