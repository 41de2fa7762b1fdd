//! Core module - Application state, configuration, and events

pub mod config;
pub mod events;
pub mod state;
