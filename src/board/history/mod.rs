//! Undo/Redo system for board transforms.
//!
//! Every reversible board operation (insertion, deletion, move, scale,
//! rotate, flip, normalize and the resets) is a [`BoardCommand`] run through
//! [`History`], which keeps a single cursor between undoable and redoable
//! commands.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//!
//! ## Module Structure
//!
//! - [`commands`] - BoardCommand and its constructors
//! - [`data_types`] - Captured state for undo
//! - [`command_history`] - History resource for tracking state
//! - [`execute`] - Redo/undo for each command kind
//! - [`systems`] - Bevy systems for keyboard shortcuts

mod command_history;
mod commands;
mod data_types;
mod execute;
mod systems;


// Re-exports
pub use command_history::History;
pub use commands::{BoardCommand, CommandKind};
pub use data_types::TransformBaseline;
pub use systems::{handle_redo, handle_undo};
