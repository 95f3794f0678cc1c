//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (View, DrawerItem, Focus, HiveFilter)
//! - Form presentation types (ActiveModal)
//! - State error handling

mod error;
mod form;
mod navigation;
mod store;

pub use error::StateError;
pub use form::ActiveModal;
pub use navigation::{DrawerItem, Focus, HiveFilter, View};
pub use store::State;
