//! Headless software surfaces.
//!
//! `RasterRenderer` implements the render protocol on two in-memory pixel
//! grids: a visible surface holding display colors and an identification
//! surface holding hit colors. Shapes are built with `kurbo` and a pixel is
//! painted when its centre lies inside the shape, without anti-aliasing,
//! so every identification pixel carries exactly one hit color.

use crate::renderer::Renderer;
use kurbo::{BezPath, Circle, Shape};
use scribble_core::consts::MIN_HIT_RADIUS;
use scribble_core::{Aabb, Color, HitColor, Point, Segment, StyledPoint, Vec2};
use std::f64::consts::FRAC_PI_2;

/// Radius reduction of the joint dot painted at each segment end, so the
/// dot never pokes past the segment's own edges.
const JOINT_INSET: f32 = 0.1;

/// A `width × height` grid of optional pixels; `None` is transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface<P> {
    width: u32,
    height: u32,
    pixels: Vec<Option<P>>,
}

impl<P: Copy> Surface<P> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at integer coordinates, `None` when transparent or outside.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[self.index(x, y)]
    }

    /// Pixel under a canvas position.
    pub fn sample(&self, position: Vec2) -> Option<P> {
        if !(position.x >= 0.0 && position.y >= 0.0) {
            return None;
        }
        self.get(position.x.floor() as u32, position.y.floor() as u32)
    }

    /// Number of non-transparent pixels.
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Integer pixel span `[start, end)` covering `lo..hi`, clamped to `limit`.
    fn span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let start = lo.floor().clamp(0.0, limit as f64) as u32;
        let end = hi.ceil().clamp(0.0, limit as f64) as u32;
        (start, end)
    }

    /// Paint every pixel whose centre is inside `shape`.
    pub fn fill<S: Shape>(&mut self, shape: &S, value: P) {
        let bbox = shape.bounding_box();
        let (x0, x1) = Self::span(bbox.x0, bbox.x1, self.width);
        let (y0, y1) = Self::span(bbox.y0, bbox.y1, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let centre = kurbo::Point::new(px as f64 + 0.5, py as f64 + 0.5);
                if shape.contains(centre) {
                    let i = self.index(px, py);
                    self.pixels[i] = Some(value);
                }
            }
        }
    }

    /// Clear every pixel the rectangle touches.
    pub fn clear_rect(&mut self, rect: Aabb) {
        let (x0, x1) = Self::span(rect.x as f64, rect.right() as f64, self.width);
        let (y0, y1) = Self::span(rect.y as f64, rect.bottom() as f64, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.index(px, py);
                self.pixels[i] = None;
            }
        }
    }
}

fn dot(p: Point, radius: f32) -> Circle {
    Circle::new((p.x as f64, p.y as f64), radius.max(0.0) as f64)
}

/// Quad joining the two sample discs, perpendicular to the segment
/// direction at each end.
fn segment_quad(from: Point, from_r: f32, to: Point, to_r: f32) -> BezPath {
    let (fx, fy, fr) = (from.x as f64, from.y as f64, from_r as f64);
    let (tx, ty, tr) = (to.x as f64, to.y as f64, to_r as f64);
    let angle = (ty - fy).atan2(tx - fx);
    let (ny, nx) = (angle + FRAC_PI_2).sin_cos();

    let mut path = BezPath::new();
    path.move_to((fx + nx * fr, fy + ny * fr));
    path.line_to((fx - nx * fr, fy - ny * fr));
    path.line_to((tx - nx * tr, ty - ny * tr));
    path.line_to((tx + nx * tr, ty + ny * tr));
    path.close_path();
    path
}

fn paint_segment<P: Copy>(
    surface: &mut Surface<P>,
    from: Point,
    from_r: f32,
    to: Point,
    to_r: f32,
    value: P,
) {
    surface.fill(&segment_quad(from, from_r, to, to_r), value);
    surface.fill(&dot(to, to_r - JOINT_INSET), value);
}

/// Visible + identification surfaces painted in lock-step.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    visible: Surface<Color>,
    hit: Surface<HitColor>,
    min_hit_radius: f32,
}

impl RasterRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            visible: Surface::new(width, height),
            hit: Surface::new(width, height),
            min_hit_radius: MIN_HIT_RADIUS,
        }
    }

    pub fn visible(&self) -> &Surface<Color> {
        &self.visible
    }

    pub fn hit_surface(&self) -> &Surface<HitColor> {
        &self.hit
    }

    fn hit_radius(&self, radius: f32) -> f32 {
        radius.max(self.min_hit_radius)
    }
}

impl Renderer for RasterRenderer {
    fn hit_color_at(&self, position: Vec2) -> Option<HitColor> {
        let color = self.hit.sample(position);
        log::trace!("raster: sample ({}, {}) -> {color:?}", position.x, position.y);
        color
    }

    fn clear_rect(&mut self, rect: Aabb) {
        log::trace!("raster: clear {rect:?}");
        self.visible.clear_rect(rect);
        self.hit.clear_rect(rect);
    }

    fn stroke_start(&mut self, start: &StyledPoint) {
        let StyledPoint { point, style } = *start;
        let hit_r = self.hit_radius(point.radius);
        self.visible.fill(&dot(point, point.radius), style.color);
        self.hit.fill(&dot(point, hit_r), style.hit_color);
    }

    fn stroke_continue(&mut self, segment: &Segment) {
        let Segment { from, to, style } = *segment;
        let (from_hit_r, to_hit_r) = (self.hit_radius(from.radius), self.hit_radius(to.radius));
        paint_segment(&mut self.visible, from, from.radius, to, to.radius, style.color);
        paint_segment(&mut self.hit, from, from_hit_r, to, to_hit_r, style.hit_color);
    }
}
