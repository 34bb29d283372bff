//! The board scene: owns every item, tracks which are placed and selected.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use bevy::math::DVec2;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

use super::item::BoardItem;

/// Stable handle for an item, valid for the lifetime of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What commands need from a scene.
///
/// Items stay addressable after `remove_item`; removal only takes them off
/// the board so that undoing a delete can put the very same item back.
pub trait Scene {
    fn item(&self, id: ItemId) -> Result<&BoardItem>;
    fn item_mut(&mut self, id: ItemId) -> Result<&mut BoardItem>;
    fn add_item(&mut self, id: ItemId) -> Result<()>;
    fn remove_item(&mut self, id: ItemId) -> Result<()>;
    fn clear_selection(&mut self);
    fn select(&mut self, id: ItemId) -> Result<()>;
    /// Called after a command moved the selection outline (e.g. rotation).
    fn selection_geometry_changed(&mut self) {}
}

#[derive(Resource, Default, Debug)]
pub struct Board {
    items: HashMap<ItemId, BoardItem>,
    /// Items currently on the board, in insertion order
    placed: Vec<ItemId>,
    selection: BTreeSet<ItemId>,
    next_id: u64,
    geometry_revision: u64,
}

impl Board {
    /// Allocates a new item that is not yet on the board.
    ///
    /// Run an `InsertItems` command to place it.
    pub fn create_item(
        &mut self,
        width: f64,
        height: f64,
        filename: Option<String>,
    ) -> Result<ItemId> {
        let mut item = BoardItem::new(width, height, filename)?;
        let id = ItemId(self.next_id);
        self.next_id += 1;
        item.set_z(self.next_z());
        debug!(
            "Created item {} ({:?}) with dimensions {} x {}",
            id, item.filename, width, height
        );
        self.items.insert(id, item);
        Ok(id)
    }

    /// Stores a fully built item (e.g. from a loaded record), off the board.
    pub fn adopt_item(&mut self, item: BoardItem) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);
        id
    }

    fn next_z(&self) -> f64 {
        self.items
            .values()
            .map(BoardItem::z)
            .fold(None, |max: Option<f64>, z| Some(max.map_or(z, |m| m.max(z))))
            .map_or(0.0, |max| max + 1.0)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.placed.contains(&id)
    }

    /// Items on the board, in insertion order.
    pub fn placed_items(&self) -> &[ItemId] {
        &self.placed
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(&id)
    }

    /// Selected items in id order.
    pub fn selected_items(&self) -> Vec<ItemId> {
        self.selection.iter().copied().collect()
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Scene bounds enclosing every selected item as `(min, max)`.
    pub fn selection_bounds(&self) -> Option<(DVec2, DVec2)> {
        self.selection
            .iter()
            .filter_map(|id| self.items.get(id))
            .map(BoardItem::scene_bounds)
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }

    /// Anchor for selection-wide scale, rotate and flip.
    pub fn selection_center(&self) -> Option<DVec2> {
        self.selection_bounds().map(|(min, max)| (min + max) / 2.0)
    }

    /// Bumped every time a command reports a selection geometry change.
    pub fn geometry_revision(&self) -> u64 {
        self.geometry_revision
    }
}

impl Scene for Board {
    fn item(&self, id: ItemId) -> Result<&BoardItem> {
        self.items.get(&id).ok_or(BoardError::UnknownItem(id))
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut BoardItem> {
        self.items.get_mut(&id).ok_or(BoardError::UnknownItem(id))
    }

    fn add_item(&mut self, id: ItemId) -> Result<()> {
        if !self.items.contains_key(&id) {
            return Err(BoardError::UnknownItem(id));
        }
        if !self.placed.contains(&id) {
            self.placed.push(id);
        }
        Ok(())
    }

    fn remove_item(&mut self, id: ItemId) -> Result<()> {
        if !self.items.contains_key(&id) {
            return Err(BoardError::UnknownItem(id));
        }
        self.placed.retain(|placed| *placed != id);
        self.selection.remove(&id);
        Ok(())
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn select(&mut self, id: ItemId) -> Result<()> {
        if !self.items.contains_key(&id) {
            return Err(BoardError::UnknownItem(id));
        }
        // Selection must stay a subset of the placed items
        if self.placed.contains(&id) {
            self.selection.insert(id);
        } else {
            warn!("Ignoring selection of item {} which is not on the board", id);
        }
        Ok(())
    }

    fn selection_geometry_changed(&mut self) {
        self.geometry_revision += 1;
    }
}
