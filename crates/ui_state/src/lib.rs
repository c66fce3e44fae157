//! View state for the G-Easy home page.
//!
//! This crate holds the framework-free pieces of UI state — the carousel
//! cursor, the popup lifecycle, the password draft, and the command
//! vocabulary the components dispatch through. The Yew layer in the
//! `frontend` crate owns rendering; everything with a testable contract
//! lives here.

mod carousel;
mod command;
mod home;
mod password;

pub use carousel::Carousel;
pub use command::{Command, Panel, Target};
pub use home::HomeState;
pub use password::PasswordDraft;
