#![warn(clippy::all, missing_docs)]

//! Core domain logic for the Perday terminal dashboard.
//!
//! This crate hosts the sample catalog data, the dashboard state machines
//! (focus shelf, door navigator, placeholder rotator, chat, modals),
//! configuration handling and report export used by the terminal UI.

pub mod campaign;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod detail;
pub mod doors;
pub mod focus;
pub mod models;
pub mod report;
pub mod rotator;
pub mod state;
pub mod view;

pub use config::AppConfig;
pub use doors::{Door, DoorNavigator, InvalidDoor};
pub use focus::{AddOutcome, FocusQueue};
pub use models::FocusTrack;
pub use state::{Dashboard, Overlay};
pub use view::View;
