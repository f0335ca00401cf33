//! Stroke store: every live stroke, keyed by its hit color.
//!
//! The key doubles as the identity read back from the identification
//! surface, so at most one live stroke may own a given hit color.
//! Overlap queries and iteration follow insertion order, which is also the
//! order strokes are repainted in after an erase.

use crate::color::HitColor;
use crate::consts::HIT_COLOR_SPACE;
use crate::error::{Error, Result};
use crate::geom::Aabb;
use crate::stroke::Stroke;
use rand::Rng;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry {
    /// Insertion sequence number; kept when an entry is replaced via `set`.
    seq: u64,
    stroke: Stroke,
}

#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: HashMap<HitColor, Entry>,
    next_seq: u64,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new stroke. Fails if its hit color is already live.
    pub fn add(&mut self, stroke: Stroke) -> Result<()> {
        let key = stroke.hit_color();
        if self.strokes.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        self.set(stroke);
        Ok(())
    }

    /// Insert or replace the stroke keyed by its hit color. A stroke that
    /// still lacks bounds (a draft copied out of a builder) is finalized on
    /// the way in, so every stored stroke has bounds.
    pub fn set(&mut self, mut stroke: Stroke) {
        stroke.finalize();
        let key = stroke.hit_color();
        match self.strokes.get_mut(&key) {
            Some(entry) => entry.stroke = stroke,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                log::debug!("store: insert {key} (samples: {})", stroke.len());
                self.strokes.insert(key, Entry { seq, stroke });
            }
        }
    }

    /// Remove a stroke. Deleting an absent key is a no-op.
    pub fn delete(&mut self, hit_color: HitColor) -> Option<Stroke> {
        let removed = self.strokes.remove(&hit_color).map(|e| e.stroke);
        if removed.is_some() {
            log::debug!("store: delete {hit_color}");
        }
        removed
    }

    pub fn get(&self, hit_color: HitColor) -> Option<&Stroke> {
        self.strokes.get(&hit_color).map(|e| &e.stroke)
    }

    pub fn contains(&self, hit_color: HitColor) -> bool {
        self.strokes.contains_key(&hit_color)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// All strokes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        let mut entries: Vec<&Entry> = self.strokes.values().collect();
        entries.sort_by_key(|e| e.seq);
        entries.into_iter().map(|e| &e.stroke)
    }

    /// Whether any stored stroke's bounds overlap `aabb`.
    /// Strokes without bounds are skipped.
    pub fn check_overlap(&self, aabb: &Aabb) -> bool {
        self.strokes
            .values()
            .filter_map(|e| e.stroke.bounds())
            .any(|b| b.overlap(aabb))
    }

    /// Every stroke whose bounds overlap `aabb`, in insertion order.
    pub fn get_overlap(&self, aabb: &Aabb) -> Vec<&Stroke> {
        self.iter()
            .filter(|s| s.bounds().is_some_and(|b| b.overlap(aabb)))
            .collect()
    }

    /// A hit color not owned by any live stroke, drawn from the thread RNG.
    pub fn gen_hit_color(&self) -> HitColor {
        self.gen_hit_color_with(&mut rand::thread_rng())
    }

    /// Draw uniformly from the 24-bit space, resampling on collision.
    pub fn gen_hit_color_with<R: Rng + ?Sized>(&self, rng: &mut R) -> HitColor {
        loop {
            let candidate = HitColor::new(rng.gen_range(0..HIT_COLOR_SPACE));
            if !self.strokes.contains_key(&candidate) {
                return candidate;
            }
            log::trace!("store: hit color {candidate} taken, resampling");
        }
    }
}
