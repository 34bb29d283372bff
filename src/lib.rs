//! Reference image board core.
//!
//! Images live on an infinite canvas as [`board::BoardItem`]s held by a
//! [`board::Board`]. Every move, scale, rotation, flip, normalize and reset
//! is a [`board::BoardCommand`] recorded in a [`board::History`] so it can be
//! undone and redone exactly.

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod paths;

pub use error::{BoardError, Result};
