// Game logic built on the engine

pub mod characters;
