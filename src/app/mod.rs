// src/app/mod.rs
//! Application module - contains the picker screen state and logic.

pub mod state;

// Re-export the App struct
pub use state::App;
