//! Command history resource for tracking undo/redo state.

use bevy::prelude::*;

use crate::board::Scene;
use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::error::Result;

use super::commands::BoardCommand;

/// Resource tracking command history for undo/redo
///
/// Commands before `cursor` are undoable, commands from `cursor` on are
/// redoable.
#[derive(Resource, Debug)]
pub struct History {
    commands: Vec<BoardCommand>,
    cursor: usize,
    /// Maximum number of undoable commands kept
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            commands: Vec::new(),
            cursor: 0,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.trim();
    }

    /// Run a command and record it, dropping anything that could be redone.
    ///
    /// A command whose redo fails is not recorded.
    pub fn execute<S: Scene + ?Sized>(
        &mut self,
        mut command: BoardCommand,
        scene: &mut S,
    ) -> Result<()> {
        command.redo(scene)?;
        info!("Executed '{}' on {} item(s)", command.label(), command.items().len());

        // Clear redo tail when a new action is performed
        self.commands.truncate(self.cursor);
        self.commands.push(command);
        self.cursor = self.commands.len();
        self.trim();
        Ok(())
    }

    /// Undo the last command; does nothing when there is none.
    pub fn undo<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Result<()> {
        let Some(index) = self.cursor.checked_sub(1) else {
            return Ok(());
        };

        let command = &mut self.commands[index];
        command.undo(scene)?;
        debug!("Undid '{}'", command.label());
        self.cursor = index;
        Ok(())
    }

    /// Redo the last undone command; does nothing when there is none.
    pub fn redo<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Result<()> {
        let Some(command) = self.commands.get_mut(self.cursor) else {
            return Ok(());
        };

        command.redo(scene)?;
        debug!("Redid '{}'", command.label());
        self.cursor += 1;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Label of the command `undo` would revert
    pub fn undo_label(&self) -> Option<&'static str> {
        self.cursor
            .checked_sub(1)
            .map(|index| self.commands[index].label())
    }

    /// Label of the command `redo` would re-apply
    pub fn redo_label(&self) -> Option<&'static str> {
        self.commands.get(self.cursor).map(BoardCommand::label)
    }

    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    pub fn redo_count(&self) -> usize {
        self.commands.len() - self.cursor
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }

    // Trim history if it exceeds max size
    fn trim(&mut self) {
        if self.cursor <= self.limit {
            return;
        }
        let excess = self.cursor - self.limit;
        self.commands.drain(..excess);
        self.cursor -= excess;
        debug!("Evicted {} command(s) from history", excess);
    }
}
