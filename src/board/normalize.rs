//! Per-item factors that bring a selection to a common apparent size.
//!
//! The factors feed [`BoardCommand::normalize_items`]; each item is scaled
//! so its apparent height, width or area matches the selection's mean.
//!
//! [`BoardCommand::normalize_items`]: super::BoardCommand::normalize_items

use crate::error::Result;

use super::item::BoardItem;
use super::{ItemId, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    Height,
    Width,
    /// Match areas, keeping each item's aspect ratio
    Size,
}

impl NormalizeMode {
    fn measure(self, item: &BoardItem) -> f64 {
        match self {
            NormalizeMode::Height => item.height() * item.scale(),
            NormalizeMode::Width => item.width() * item.scale(),
            NormalizeMode::Size => item.width() * item.height() * item.scale().powi(2),
        }
    }

    fn factor(self, target: f64, measure: f64) -> f64 {
        match self {
            NormalizeMode::Height | NormalizeMode::Width => target / measure,
            NormalizeMode::Size => (target / measure).sqrt(),
        }
    }
}

pub fn normalize_factors<S: Scene + ?Sized>(
    scene: &S,
    items: &[ItemId],
    mode: NormalizeMode,
) -> Result<Vec<f64>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let measures = items
        .iter()
        .map(|&id| scene.item(id).map(|item| mode.measure(item)))
        .collect::<Result<Vec<_>>>()?;
    let target = measures.iter().sum::<f64>() / measures.len() as f64;

    Ok(measures
        .into_iter()
        .map(|measure| mode.factor(target, measure))
        .collect())
}
