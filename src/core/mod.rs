//! Core module - Configuration, events, and unread state

pub mod config;
pub mod events;
pub mod state;
