//! Redo and undo for every command kind.

use bevy::prelude::*;

use crate::board::{ItemId, Scene};
use crate::error::Result;

use super::commands::{BoardCommand, CommandKind};
use super::data_types::TransformBaseline;

impl BoardCommand {
    /// Applies the command to the scene.
    ///
    /// Redoing a command that is already applied does nothing: reset and
    /// normalize commands would otherwise overwrite their captured baseline.
    pub fn redo<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Result<()> {
        if self.applied {
            warn!("Ignoring redo of '{}': already applied", self.label());
            return Ok(());
        }

        if self.ignore_first_redo {
            self.ignore_first_redo = false;
            self.applied = true;
            debug!("Recorded live '{}' without re-applying", self.label());
            return Ok(());
        }

        execute_redo(&self.items, &mut self.kind, scene)?;
        self.applied = true;
        Ok(())
    }

    /// Reverts the command. Does nothing unless the command is applied.
    pub fn undo<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Result<()> {
        if !self.applied {
            warn!("Ignoring undo of '{}': not applied", self.label());
            return Ok(());
        }

        execute_undo(&self.items, &mut self.kind, scene)?;
        self.applied = false;
        Ok(())
    }
}

/// Execute a command forward, capturing baselines where the kind needs them
fn execute_redo<S: Scene + ?Sized>(
    items: &[ItemId],
    kind: &mut CommandKind,
    scene: &mut S,
) -> Result<()> {
    match kind {
        CommandKind::InsertItems => {
            scene.clear_selection();
            for &id in items {
                scene.add_item(id)?;
                scene.select(id)?;
            }
        }
        CommandKind::DeleteItems => {
            for &id in items {
                scene.remove_item(id)?;
            }
        }
        CommandKind::MoveItemsBy { delta } => {
            for &id in items {
                scene.item_mut(id)?.move_by(*delta);
            }
        }
        CommandKind::ScaleItemsBy {
            factor,
            anchor,
            original_positions,
        } => {
            let mut positions = Vec::with_capacity(items.len());
            for &id in items {
                let item = scene.item_mut(id)?;
                positions.push(item.pos());
                item.set_scale(item.scale() * *factor, *anchor)?;
            }
            *original_positions = Some(positions);
        }
        CommandKind::RotateItemsBy { delta, anchor } => {
            for &id in items {
                let item = scene.item_mut(id)?;
                // A mirrored item turns the other way for the same angle change
                item.set_rotation(item.rotation() + *delta * item.flip(), *anchor)?;
            }
            scene.selection_geometry_changed();
        }
        CommandKind::NormalizeItems {
            factors,
            old_scales,
        } => {
            let mut scales = Vec::with_capacity(items.len());
            for (&id, &factor) in items.iter().zip(factors.iter()) {
                let item = scene.item_mut(id)?;
                scales.push(item.scale());
                let anchor = item.center();
                item.set_scale(item.scale() * factor, anchor)?;
            }
            *old_scales = Some(scales);
        }
        CommandKind::FlipItems { anchor, vertical } => {
            for &id in items {
                scene.item_mut(id)?.do_flip(*anchor, *vertical)?;
            }
        }
        CommandKind::ResetScale { old_scales } => {
            let mut scales = Vec::with_capacity(items.len());
            for &id in items {
                let item = scene.item_mut(id)?;
                scales.push(item.scale());
                let anchor = item.center();
                item.set_scale(1.0, anchor)?;
            }
            *old_scales = Some(scales);
        }
        CommandKind::ResetRotation { old_rotations } => {
            let mut rotations = Vec::with_capacity(items.len());
            for &id in items {
                let item = scene.item_mut(id)?;
                rotations.push(item.rotation());
                let anchor = item.center();
                item.set_rotation(0.0, anchor)?;
            }
            *old_rotations = Some(rotations);
        }
        CommandKind::ResetFlip { old_flips } => {
            let mut flips = Vec::with_capacity(items.len());
            for &id in items {
                let item = scene.item_mut(id)?;
                flips.push(item.flip());
                if item.is_flipped() {
                    let anchor = item.center();
                    item.do_flip(anchor, false)?;
                }
            }
            *old_flips = Some(flips);
        }
        CommandKind::ResetTransforms { old_values } => {
            let mut values = Vec::with_capacity(items.len());
            for &id in items {
                let item = scene.item_mut(id)?;
                values.push(TransformBaseline::from(&*item));
                // The center is a fixed point of every step below
                let anchor = item.center();
                item.set_scale(1.0, anchor)?;
                item.set_rotation(0.0, anchor)?;
                if item.is_flipped() {
                    item.do_flip(anchor, false)?;
                }
            }
            *old_values = Some(values);
        }
    }
    Ok(())
}

/// Execute the inverse of a command, clearing its baseline once every item is restored
fn execute_undo<S: Scene + ?Sized>(
    items: &[ItemId],
    kind: &mut CommandKind,
    scene: &mut S,
) -> Result<()> {
    match kind {
        CommandKind::InsertItems => {
            scene.clear_selection();
            for &id in items {
                scene.remove_item(id)?;
            }
        }
        CommandKind::DeleteItems => {
            scene.clear_selection();
            for &id in items {
                scene.add_item(id)?;
                scene.select(id)?;
            }
        }
        CommandKind::MoveItemsBy { delta } => {
            for &id in items {
                scene.item_mut(id)?.move_by(-*delta);
            }
        }
        CommandKind::ScaleItemsBy {
            factor,
            anchor,
            original_positions,
        } => {
            // No baseline when the first redo was a live gesture
            let positions = original_positions.as_deref().unwrap_or_default();
            for (index, &id) in items.iter().enumerate() {
                let item = scene.item_mut(id)?;
                item.set_scale(item.scale() / *factor, *anchor)?;
                if let Some(pos) = positions.get(index) {
                    item.set_pos(*pos)?;
                }
            }
            *original_positions = None;
        }
        CommandKind::RotateItemsBy { delta, anchor } => {
            for &id in items {
                let item = scene.item_mut(id)?;
                item.set_rotation(item.rotation() - *delta * item.flip(), *anchor)?;
            }
            scene.selection_geometry_changed();
        }
        CommandKind::NormalizeItems { old_scales, .. } => {
            for (&id, &scale) in items.iter().zip(captured(old_scales, "Normalize items")) {
                let item = scene.item_mut(id)?;
                let anchor = item.center();
                item.set_scale(scale, anchor)?;
            }
            *old_scales = None;
        }
        CommandKind::FlipItems { anchor, vertical } => {
            // Flipping is its own inverse
            for &id in items {
                scene.item_mut(id)?.do_flip(*anchor, *vertical)?;
            }
        }
        CommandKind::ResetScale { old_scales } => {
            for (&id, &scale) in items.iter().zip(captured(old_scales, "Reset Scale")) {
                let item = scene.item_mut(id)?;
                let anchor = item.center();
                item.set_scale(scale, anchor)?;
            }
            *old_scales = None;
        }
        CommandKind::ResetRotation { old_rotations } => {
            for (&id, &rotation) in items
                .iter()
                .zip(captured(old_rotations, "Reset Rotation"))
            {
                let item = scene.item_mut(id)?;
                let anchor = item.center();
                item.set_rotation(rotation, anchor)?;
            }
            *old_rotations = None;
        }
        CommandKind::ResetFlip { old_flips } => {
            for (&id, &flip) in items.iter().zip(captured(old_flips, "Reset Flip")) {
                if flip < 0.0 {
                    let item = scene.item_mut(id)?;
                    let anchor = item.center();
                    item.do_flip(anchor, false)?;
                }
            }
            *old_flips = None;
        }
        CommandKind::ResetTransforms { old_values } => {
            for (&id, old) in items
                .iter()
                .zip(captured(old_values, "Reset All Transformations"))
            {
                let item = scene.item_mut(id)?;
                let anchor = item.center();
                item.set_scale(old.scale, anchor)?;
                item.set_rotation(old.rotation, anchor)?;
                if old.flip < 0.0 {
                    item.do_flip(anchor, false)?;
                }
            }
            *old_values = None;
        }
    }
    Ok(())
}

/// Captured baseline of an applied command. It is cleared by the caller only
/// once every item was restored, so a failed undo can be retried.
fn captured<'a, T>(baseline: &'a Option<Vec<T>>, label: &str) -> &'a [T] {
    match baseline {
        Some(values) => values,
        None => {
            warn!("'{}' has no captured state to restore", label);
            &[]
        }
    }
}
