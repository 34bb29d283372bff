//! Captured item state restored by undo.

use super::super::item::BoardItem;

/// Scale, rotation and flip of one item before a full transform reset
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct TransformBaseline {
    pub scale: f64,
    pub rotation: f64,
    pub flip: f64,
}

impl From<&BoardItem> for TransformBaseline {
    fn from(item: &BoardItem) -> Self {
        Self {
            scale: item.scale(),
            rotation: item.rotation(),
            flip: item.flip(),
        }
    }
}
