//! Integration tests: builder → store lifecycle (scribble-core).
//!
//! Drives randomized add/delete sequences and checks that hit colors stay
//! unique and overlap queries agree with a brute-force scan.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scribble_core::{
    Aabb, Color, Error, HitColor, Point, StrokeBuilder, StrokeStore, StrokeStyle, StyledPoint,
};
use std::collections::HashSet;

fn build(store: &StrokeStore, rng: &mut StdRng) -> scribble_core::Stroke {
    let mut builder = StrokeBuilder::new();
    let style = StrokeStyle {
        color: Color::BLACK,
        hit_color: store.gen_hit_color_with(rng),
    };
    let origin = Point::new(rng.gen_range(0.0..600.0), rng.gen_range(0.0..400.0), 2.0);
    builder.stroke_start(StyledPoint::new(origin, style));
    for _ in 0..rng.gen_range(0..6) {
        let p = Point::new(
            origin.x + rng.gen_range(-30.0..30.0),
            origin.y + rng.gen_range(-30.0..30.0),
            rng.gen_range(1.0..6.0),
        );
        builder.stroke_continue(p).unwrap();
    }
    builder.stroke_complete().unwrap()
}

// ─── Uniqueness ─────────────────────────────────────────────────────────

#[test]
fn random_add_delete_keeps_hit_colors_unique() {
    let mut rng = StdRng::seed_from_u64(0x5c1b);
    let mut store = StrokeStore::new();
    let mut live: Vec<HitColor> = Vec::new();

    for _ in 0..500 {
        if live.is_empty() || rng.gen_bool(0.65) {
            let stroke = build(&store, &mut rng);
            let key = stroke.hit_color();
            store.add(stroke).expect("generated hit color must be free");
            live.push(key);
        } else {
            let idx = rng.gen_range(0..live.len());
            let key = live.swap_remove(idx);
            assert!(store.delete(key).is_some());
        }

        let keys: HashSet<HitColor> = store.iter().map(|s| s.hit_color()).collect();
        assert_eq!(keys.len(), store.len());
        assert_eq!(store.len(), live.len());
    }
}

#[test]
fn re_adding_a_live_key_fails() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut store = StrokeStore::new();
    let stroke = build(&store, &mut rng);
    let copy = stroke.clone();
    store.add(stroke).unwrap();
    assert!(matches!(store.add(copy), Err(Error::DuplicateKey(_))));

    // After deletion the key is free again.
    let key = store.iter().next().unwrap().hit_color();
    let copy = store.delete(key).unwrap();
    store.add(copy).unwrap();
}

// ─── Overlap ────────────────────────────────────────────────────────────

#[test]
fn get_overlap_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut store = StrokeStore::new();
    for _ in 0..60 {
        let s = build(&store, &mut rng);
        store.add(s).unwrap();
    }

    for _ in 0..40 {
        let probe = Aabb::new(
            rng.gen_range(0.0..600.0),
            rng.gen_range(0.0..400.0),
            rng.gen_range(0.0..80.0),
            rng.gen_range(0.0..80.0),
        );
        let expected: Vec<HitColor> = store
            .iter()
            .filter(|s| s.bounds().unwrap().overlap(&probe))
            .map(|s| s.hit_color())
            .collect();
        let got: Vec<HitColor> = store
            .get_overlap(&probe)
            .iter()
            .map(|s| s.hit_color())
            .collect();
        assert_eq!(got, expected);
        assert_eq!(store.check_overlap(&probe), !expected.is_empty());
    }
}

#[test]
fn completed_strokes_cover_every_sample() {
    let mut rng = StdRng::seed_from_u64(3);
    let store = StrokeStore::new();
    for _ in 0..50 {
        let s = build(&store, &mut rng);
        let bounds = s.bounds().expect("completed stroke has bounds");
        let max_r = s.radii().iter().copied().fold(0.0_f32, f32::max);
        for p in s.points() {
            let mut footprint = Aabb::new(p.x, p.y, 0.0, 0.0);
            footprint.expand(max_r);
            assert!(bounds.contains(p.position()));
            assert!(bounds.x <= footprint.x && bounds.right() >= footprint.right());
            assert!(bounds.y <= footprint.y && bounds.bottom() >= footprint.bottom());
        }
    }
}
