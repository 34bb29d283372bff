//! Mirrors board state onto Bevy transforms of the entities that draw items.

use bevy::prelude::*;

use super::{Board, ItemId, Scene};

/// Links an entity to the board item it displays.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSprite(pub ItemId);

/// Copy item geometry into `Transform`s and hide items that are off the board.
///
/// The board is y-down with the origin at an item's top-left corner; Bevy
/// sprites are centered and y-up, so the center is mirrored on y and the
/// turn direction reverses. A flipped item is drawn with negative x scale.
pub fn sync_item_transforms(
    board: Res<Board>,
    mut sprites: Query<(&ItemSprite, &mut Transform, &mut Visibility)>,
) {
    for (sprite, mut transform, mut visibility) in sprites.iter_mut() {
        let Ok(item) = board.item(sprite.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let center = item.center();
        transform.translation = Vec3::new(center.x as f32, -center.y as f32, item.z() as f32);
        transform.rotation =
            Quat::from_rotation_z((-item.rotation() * item.flip()).to_radians() as f32);
        let scale = item.scale() as f32;
        transform.scale = Vec3::new(scale * item.flip() as f32, scale, 1.0);

        let new_visibility = if board.contains(sprite.0) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != new_visibility {
            *visibility = new_visibility;
        }
    }
}
