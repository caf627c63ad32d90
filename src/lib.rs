pub mod clock;
pub mod collision;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod score;
pub mod spawner;
pub mod surface;
