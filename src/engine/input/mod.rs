// Input handling system
//
// Keyboard events come in through `InputManager`, get mapped to `Action`s by
// the bindings in `InputConfig`, and come out as a per-step `Controls`
// snapshot the character reads.
//
// - `action`: game actions and default key bindings
// - `config`: binding table and remapping
// - `player`: pressed / just-pressed state and `Controls`
// - `manager`: winit event handling

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::Action;
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::Controls;
