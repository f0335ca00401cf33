//! Click-to-erase.
//!
//! Erasing is a rectangle clear followed by a repaint:
//!
//! 1. Sample the identification surface under the pointer.
//! 2. Background or an unknown color: nothing to erase.
//! 3. Clear both surfaces inside the stroke's bounds. The clear is
//!    rectangular, so it also wipes parts of any neighbour inside that box.
//! 4. Remove the stroke from the store.
//! 5. Replay every remaining stroke whose bounds overlap the cleared box,
//!    in insertion order.
//!
//! Neighbours are picked by bounds alone, so some replays touch strokes the
//! clear never reached. That costs a redraw but never loses pixels.

use scribble_core::{Aabb, Error, HitColor, Result, StrokeStore, Vec2};
use scribble_render::{Renderer, hit_test};
use smallvec::SmallVec;

/// What a successful erase removed and repainted.
#[derive(Debug, Clone, PartialEq)]
pub struct Erased {
    pub hit_color: HitColor,
    /// The rectangle cleared on both surfaces.
    pub cleared: Aabb,
    /// Strokes replayed afterwards, in replay order.
    pub repainted: SmallVec<[HitColor; 4]>,
}

/// Erase the stroke under `position`, if any.
///
/// Returns `Ok(None)` when the pointer is over background. The store
/// finalizes every stroke it takes in, so a stroke without bounds means the
/// store is corrupt: that fails with [`Error::MissingBounds`] and leaves the
/// store and surfaces untouched.
pub fn erase_at<R: Renderer + ?Sized>(
    store: &mut StrokeStore,
    renderer: &mut R,
    position: Vec2,
) -> Result<Option<Erased>> {
    let Some(hit_color) = hit_test(&*renderer, store, position) else {
        return Ok(None);
    };
    let cleared = store
        .get(hit_color)
        .and_then(|s| s.bounds())
        .ok_or(Error::MissingBounds(hit_color))?;

    renderer.clear_rect(cleared);
    store.delete(hit_color);

    let mut repainted = SmallVec::new();
    for stroke in store.get_overlap(&cleared) {
        renderer.stroke_render(stroke);
        repainted.push(stroke.hit_color());
    }

    log::debug!(
        "erase: removed {hit_color} at ({}, {}), repainted {}",
        position.x,
        position.y,
        repainted.len()
    );
    Ok(Some(Erased {
        hit_color,
        cleared,
        repainted,
    }))
}
