// Character system
//
// - The giraffe cat and its per-step update
// - Movement tuning
// - Jump / run / facing states
// - Animation clips and playback

pub mod animation;
pub mod character;
pub mod state;
pub mod tuning;

pub use character::GiraffeCat;
pub use tuning::{CatTuning, TuningError};
