pub mod backend;
pub mod button;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod scoreboard;
pub mod settings;
pub mod stats;
