// Drawing seam between the game and whatever puts pixels on screen

mod sprite;

pub use sprite::{SpriteFrame, SpriteSheet};

use glam::Vec2;
use log::trace;

/// A single draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Frame { frame: SpriteFrame, position: Vec2 },
    Text { text: String, position: Vec2 },
}

/// Drawing surface the game renders into
pub trait Canvas {
    /// Draw a sprite frame with its top-left corner at `position`
    fn draw_frame(&mut self, frame: &SpriteFrame, position: Vec2);

    /// Draw a line of debug text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2);
}

/// Canvas that records draw calls for a frame instead of rasterising them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last `clear`
    #[cfg(test)]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Log the recorded frame at trace level and start a new one
    pub fn flush(&mut self) {
        for command in &self.commands {
            match command {
                DrawCommand::Frame { frame, position } => trace!(
                    "draw {}#{} src={:?} size={:?} at {:?}",
                    frame.sheet,
                    frame.index,
                    frame.origin,
                    frame.size,
                    position
                ),
                DrawCommand::Text { text, position } => {
                    trace!("text {:?} at {:?}", text, position)
                }
            }
        }
        self.clear();
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_frame(&mut self, frame: &SpriteFrame, position: Vec2) {
        self.commands.push(DrawCommand::Frame {
            frame: *frame,
            position,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_keeps_order() {
        let sheet = SpriteSheet::new("a.png", 8, 8, 1);
        let frame = sheet.frame(0).unwrap();
        let mut canvas = RecordingCanvas::new();

        canvas.draw_frame(&frame, Vec2::new(1.0, 2.0));
        canvas.draw_text("hi", Vec2::ZERO);

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Frame {
                    frame,
                    position: Vec2::new(1.0, 2.0)
                },
                DrawCommand::Text {
                    text: "hi".to_string(),
                    position: Vec2::ZERO
                },
            ]
        );
    }

    #[test]
    fn test_flush_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("x", Vec2::ZERO);
        canvas.flush();
        assert!(canvas.commands().is_empty());
    }
}
