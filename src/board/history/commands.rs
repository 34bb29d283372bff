//! Board command type and its constructors.

use bevy::math::DVec2;

use crate::board::ItemId;
use crate::error::{BoardError, Result};

use super::data_types::TransformBaseline;

/// What a command does, plus whatever it captured on its last redo.
///
/// `Option` baselines are `None` until the command is applied and are
/// taken back out by undo.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandKind {
    /// Put items on the board and make them the selection
    InsertItems,
    /// Take items off the board
    DeleteItems,
    MoveItemsBy {
        delta: DVec2,
    },
    /// Multiply each item's scale by `factor` around a scene anchor
    ScaleItemsBy {
        factor: f64,
        anchor: DVec2,
        original_positions: Option<Vec<DVec2>>,
    },
    /// Turn each item by `delta` degrees around a scene anchor
    RotateItemsBy {
        delta: f64,
        anchor: DVec2,
    },
    /// Multiply each item's scale by its own factor, anchored at its center
    NormalizeItems {
        factors: Vec<f64>,
        old_scales: Option<Vec<f64>>,
    },
    FlipItems {
        anchor: DVec2,
        vertical: bool,
    },
    ResetScale {
        old_scales: Option<Vec<f64>>,
    },
    ResetRotation {
        old_rotations: Option<Vec<f64>>,
    },
    ResetFlip {
        old_flips: Option<Vec<f64>>,
    },
    ResetTransforms {
        old_values: Option<Vec<TransformBaseline>>,
    },
}

impl CommandKind {
    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::InsertItems => "Insert items",
            CommandKind::DeleteItems => "Delete items",
            CommandKind::MoveItemsBy { .. } => "Move items",
            CommandKind::ScaleItemsBy { .. } => "Scale items",
            CommandKind::RotateItemsBy { .. } => "Rotate items",
            CommandKind::NormalizeItems { .. } => "Normalize items",
            CommandKind::FlipItems { .. } => "Flip items",
            CommandKind::ResetScale { .. } => "Reset Scale",
            CommandKind::ResetRotation { .. } => "Reset Rotation",
            CommandKind::ResetFlip { .. } => "Reset Flip",
            CommandKind::ResetTransforms { .. } => "Reset All Transformations",
        }
    }
}

/// A reversible operation over a fixed batch of items
#[derive(Clone, Debug, PartialEq)]
pub struct BoardCommand {
    pub(super) items: Vec<ItemId>,
    pub(super) kind: CommandKind,
    /// Set when the effect was already applied live (e.g. during a drag);
    /// the first redo only records the command
    pub(super) ignore_first_redo: bool,
    /// Whether the command's effect is currently in the scene
    pub(super) applied: bool,
}

fn check_anchor(anchor: DVec2) -> Result<()> {
    if anchor.is_finite() {
        Ok(())
    } else {
        Err(BoardError::InvalidParameter(format!(
            "anchor must be finite, got {anchor}"
        )))
    }
}

fn check_factor(factor: f64) -> Result<()> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(BoardError::InvalidParameter(format!(
            "scale factor must be positive, got {factor}"
        )))
    }
}

impl BoardCommand {
    fn new(items: Vec<ItemId>, kind: CommandKind, ignore_first_redo: bool) -> Self {
        Self {
            items,
            kind,
            ignore_first_redo,
            applied: false,
        }
    }

    pub fn insert_items(items: Vec<ItemId>, ignore_first_redo: bool) -> Self {
        Self::new(items, CommandKind::InsertItems, ignore_first_redo)
    }

    pub fn delete_items(items: Vec<ItemId>) -> Self {
        Self::new(items, CommandKind::DeleteItems, false)
    }

    pub fn move_items_by(items: Vec<ItemId>, delta: DVec2, ignore_first_redo: bool) -> Result<Self> {
        if !delta.is_finite() {
            return Err(BoardError::InvalidParameter(format!(
                "move delta must be finite, got {delta}"
            )));
        }
        Ok(Self::new(items, CommandKind::MoveItemsBy { delta }, ignore_first_redo))
    }

    pub fn scale_items_by(
        items: Vec<ItemId>,
        factor: f64,
        anchor: DVec2,
        ignore_first_redo: bool,
    ) -> Result<Self> {
        check_factor(factor)?;
        check_anchor(anchor)?;
        Ok(Self::new(
            items,
            CommandKind::ScaleItemsBy {
                factor,
                anchor,
                original_positions: None,
            },
            ignore_first_redo,
        ))
    }

    pub fn rotate_items_by(
        items: Vec<ItemId>,
        delta: f64,
        anchor: DVec2,
        ignore_first_redo: bool,
    ) -> Result<Self> {
        if !delta.is_finite() {
            return Err(BoardError::InvalidParameter(format!(
                "rotation delta must be finite, got {delta}"
            )));
        }
        check_anchor(anchor)?;
        Ok(Self::new(
            items,
            CommandKind::RotateItemsBy { delta, anchor },
            ignore_first_redo,
        ))
    }

    /// One factor per item, in the same order as `items`.
    pub fn normalize_items(items: Vec<ItemId>, factors: Vec<f64>) -> Result<Self> {
        if items.len() != factors.len() {
            return Err(BoardError::InvalidParameter(format!(
                "normalize needs one factor per item, got {} items and {} factors",
                items.len(),
                factors.len()
            )));
        }
        factors.iter().copied().try_for_each(check_factor)?;
        Ok(Self::new(
            items,
            CommandKind::NormalizeItems {
                factors,
                old_scales: None,
            },
            false,
        ))
    }

    pub fn flip_items(items: Vec<ItemId>, anchor: DVec2, vertical: bool) -> Result<Self> {
        check_anchor(anchor)?;
        Ok(Self::new(
            items,
            CommandKind::FlipItems { anchor, vertical },
            false,
        ))
    }

    pub fn reset_scale(items: Vec<ItemId>) -> Self {
        Self::new(items, CommandKind::ResetScale { old_scales: None }, false)
    }

    pub fn reset_rotation(items: Vec<ItemId>) -> Self {
        Self::new(
            items,
            CommandKind::ResetRotation {
                old_rotations: None,
            },
            false,
        )
    }

    pub fn reset_flip(items: Vec<ItemId>) -> Self {
        Self::new(items, CommandKind::ResetFlip { old_flips: None }, false)
    }

    pub fn reset_transforms(items: Vec<ItemId>) -> Self {
        Self::new(
            items,
            CommandKind::ResetTransforms { old_values: None },
            false,
        )
    }

    /// Human-readable name for menus ("Undo Move items").
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }
}
