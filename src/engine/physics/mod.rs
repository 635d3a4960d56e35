// Kinematic physics for the player character

pub mod body;
mod ground;

pub use body::{presets, Body};
pub use ground::Ground;
