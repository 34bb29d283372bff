//! Item values as stored in a board file.
//!
//! Encoding the pixmap is up to the codec layer; the record only carries its
//! payload as an opaque string next to the transform values.

use bevy::math::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

use super::item::BoardItem;

/// Class name written for image items
pub const PIXMAP_ITEM_CLASS: &str = "PixmapItem";

fn default_scale() -> f64 {
    1.0
}

fn default_flip() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub cls: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub pixmap: String,
    #[serde(default)]
    pub pos: [f64; 2],
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_flip")]
    pub flip: f64,
}

impl ItemRecord {
    pub fn from_item(item: &BoardItem, pixmap: String) -> Self {
        Self {
            cls: PIXMAP_ITEM_CLASS.to_string(),
            scale: item.scale(),
            pixmap,
            pos: item.pos().to_array(),
            z: item.z(),
            filename: item.filename.clone(),
            rotation: item.rotation(),
            flip: item.flip(),
        }
    }

    /// Rebuilds the item; `width` and `height` come from the decoded pixmap.
    pub fn to_item(&self, width: f64, height: f64) -> Result<BoardItem> {
        if self.cls != PIXMAP_ITEM_CLASS {
            return Err(BoardError::InvalidParameter(format!(
                "unsupported item class '{}'",
                self.cls
            )));
        }

        let mut item = BoardItem::new(width, height, self.filename.clone())?;
        item.set_scale(self.scale, DVec2::ZERO)?;
        item.set_rotation(self.rotation, DVec2::ZERO)?;
        if self.flip < 0.0 {
            item.do_flip(DVec2::ZERO, false)?;
        }
        // Position last so the anchors above don't matter
        item.set_pos(DVec2::from_array(self.pos))?;
        item.set_z(self.z);
        Ok(item)
    }
}
