//! Integration tests: identification surface behaviour (scribble-render).

use pretty_assertions::assert_eq;
use scribble_core::{Aabb, Color, HitColor, Point, Stroke, StrokeStore, StrokeStyle, Vec2};
use scribble_render::{RasterRenderer, Renderer, hit_test};

fn stroke(hit: u32, color: Color, pts: &[(f32, f32, f32)]) -> Stroke {
    let style = StrokeStyle {
        color,
        hit_color: HitColor::new(hit),
    };
    let pts: Vec<Point> = pts.iter().map(|&(x, y, r)| Point::new(x, y, r)).collect();
    Stroke::from_points(style, &pts).unwrap()
}

#[test]
fn last_painted_stroke_wins_at_crossings() {
    let mut renderer = RasterRenderer::new(100, 100);
    let mut store = StrokeStore::new();
    let horizontal = stroke(0x010101, Color::BLACK, &[(10.0, 50.0, 3.0), (90.0, 50.0, 3.0)]);
    let vertical = stroke(0x020202, Color::BLACK, &[(50.0, 10.0, 3.0), (50.0, 90.0, 3.0)]);
    renderer.stroke_render(&horizontal);
    renderer.stroke_render(&vertical);
    store.add(horizontal).unwrap();
    store.add(vertical).unwrap();

    assert_eq!(
        hit_test(&renderer, &store, Vec2::new(50.0, 50.0)),
        Some(HitColor::new(0x020202))
    );
    assert_eq!(
        hit_test(&renderer, &store, Vec2::new(20.0, 50.0)),
        Some(HitColor::new(0x010101))
    );
}

#[test]
fn identification_surface_never_holds_display_colors() {
    let mut renderer = RasterRenderer::new(64, 64);
    let red = Color::rgb(255, 0, 0);
    let s = stroke(0x0a0b0c, red, &[(8.0, 8.0, 4.0), (56.0, 40.0, 6.0)]);
    renderer.stroke_render(&s);

    let surface = renderer.hit_surface();
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            if let Some(c) = surface.get(x, y) {
                assert_eq!(c, HitColor::new(0x0a0b0c));
            }
        }
    }
    assert!(surface.painted() > 0);
}

#[test]
fn bounds_cover_every_painted_pixel() {
    let mut renderer = RasterRenderer::new(120, 120);
    let s = stroke(
        0x445566,
        Color::BLACK,
        &[(30.0, 30.0, 1.0), (80.0, 35.0, 7.0), (60.0, 90.0, 0.5)],
    );
    renderer.stroke_render(&s);

    let bounds: Aabb = s.bounds().unwrap();
    let surface = renderer.hit_surface();
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            if surface.get(x, y).is_some() {
                let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                assert!(bounds.contains(centre), "pixel ({x}, {y}) outside {bounds:?}");
            }
        }
    }
}
