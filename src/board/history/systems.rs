//! Bevy systems for handling undo/redo keyboard shortcuts.

use bevy::prelude::*;

use crate::board::Board;

use super::command_history::History;

/// System to handle undo keyboard shortcut (Ctrl+Z)
pub fn handle_undo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut history: ResMut<History>,
    mut board: ResMut<Board>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Z (without shift) = undo
    if ctrl
        && !shift
        && keyboard.just_pressed(KeyCode::KeyZ)
        && history.can_undo()
        && let Err(e) = history.undo(&mut *board)
    {
        error!("Undo failed: {}", e);
    }
}

/// System to handle redo keyboard shortcut (Ctrl+Y or Ctrl+Shift+Z)
pub fn handle_redo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut history: ResMut<History>,
    mut board: ResMut<Board>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Y or Ctrl+Shift+Z = redo
    let redo_pressed = (ctrl && keyboard.just_pressed(KeyCode::KeyY))
        || (ctrl && shift && keyboard.just_pressed(KeyCode::KeyZ));

    if redo_pressed
        && history.can_redo()
        && let Err(e) = history.redo(&mut *board)
    {
        error!("Redo failed: {}", e);
    }
}
