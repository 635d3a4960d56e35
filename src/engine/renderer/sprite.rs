// Sprite sheets and the frames cut out of them

use glam::Vec2;

/// A horizontal strip of equally sized animation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Image path, resolved by whoever draws the frame
    pub path: &'static str,
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
    /// Number of frames in the strip
    pub frame_count: usize,
}

impl SpriteSheet {
    pub const fn new(
        path: &'static str,
        frame_width: u32,
        frame_height: u32,
        frame_count: usize,
    ) -> Self {
        Self {
            path,
            frame_width,
            frame_height,
            frame_count,
        }
    }

    /// Cut frame `index` out of the strip, or None if the strip is shorter
    pub fn frame(&self, index: usize) -> Option<SpriteFrame> {
        if index >= self.frame_count {
            return None;
        }
        Some(SpriteFrame {
            sheet: self.path,
            index,
            origin: Vec2::new((index as u32 * self.frame_width) as f32, 0.0),
            size: Vec2::new(self.frame_width as f32, self.frame_height as f32),
        })
    }

    /// Every frame of the strip in order
    pub fn frames(&self) -> Vec<SpriteFrame> {
        (0..self.frame_count).filter_map(|i| self.frame(i)).collect()
    }
}

/// One drawable frame: a source rectangle inside a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    pub sheet: &'static str,
    /// Index of the frame within its sheet
    pub index: usize,
    /// Top-left corner of the source rectangle in pixels
    pub origin: Vec2,
    pub size: Vec2,
}

impl SpriteFrame {
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}
