//! The board: items, the scene that holds them, and the command history
//! that transforms them.

pub mod history;
mod item;
mod normalize;
mod record;
mod scene;
mod sync;

pub use history::{BoardCommand, CommandKind, History, TransformBaseline};
pub use item::{BoardItem, anchored_position, local_to_scene_matrix};
pub use normalize::{NormalizeMode, normalize_factors};
pub use record::{ItemRecord, PIXMAP_ITEM_CLASS};
pub use scene::{Board, ItemId, Scene};
pub use sync::{ItemSprite, sync_item_transforms};

use bevy::prelude::*;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        // History may already be seeded with the configured limit
        app.init_resource::<Board>()
            .init_resource::<History>()
            .add_systems(
                Update,
                (
                    history::handle_undo,
                    history::handle_redo,
                    sync_item_transforms,
                )
                    .chain(),
            );
    }
}
