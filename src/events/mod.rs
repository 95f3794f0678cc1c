//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Session events: authentication flows and the session token slot
//! - Terminal events: user input and terminal interactions

pub mod session;
pub mod terminal;
