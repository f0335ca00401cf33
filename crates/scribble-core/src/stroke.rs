//! Stroke model.
//!
//! A stroke keeps its samples as three parallel vectors (`x`, `y`, `radius`)
//! rather than a vector of points, so replay and bounds computation walk
//! flat `f32` slices.

use crate::color::{Color, HitColor};
use crate::consts::BOUNDS_PADDING;
use crate::geom::{Aabb, Point, Vec2};

/// Display color plus the identification color of one stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeStyle {
    pub color: Color,
    pub hit_color: HitColor,
}

/// A sample carrying the style of the stroke it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledPoint {
    pub point: Point,
    pub style: StrokeStyle,
}

impl StyledPoint {
    pub fn new(point: Point, style: StrokeStyle) -> Self {
        Self { point, style }
    }
}

/// Two consecutive samples of a stroke, painted as one incremental piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub style: StrokeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    x: Vec<f32>,
    y: Vec<f32>,
    radius: Vec<f32>,
    style: StrokeStyle,
    /// `None` until [`Stroke::finalize`] runs.
    bounds: Option<Aabb>,
}

impl Stroke {
    /// Start a draft with its first sample. The draft has no bounds yet.
    pub(crate) fn draft(first: StyledPoint) -> Self {
        let StyledPoint { point, style } = first;
        Self {
            x: vec![point.x],
            y: vec![point.y],
            radius: vec![point.radius],
            style,
            bounds: None,
        }
    }

    /// Build a finished stroke from a non-empty sample list.
    /// Returns `None` when `points` is empty.
    pub fn from_points(style: StrokeStyle, points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut stroke = Self::draft(StyledPoint::new(*first, style));
        for p in rest {
            stroke.push(*p);
        }
        stroke.finalize();
        Some(stroke)
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.x.push(p.x);
        self.y.push(p.y);
        self.radius.push(p.radius);
    }

    /// Compute bounds from the min/max of all samples, padded by
    /// `max(radius) + BOUNDS_PADDING`. Has no effect once bounds exist.
    pub(crate) fn finalize(&mut self) {
        if self.bounds.is_some() {
            return;
        }
        let fold_min = |v: &[f32]| v.iter().copied().fold(f32::INFINITY, f32::min);
        let fold_max = |v: &[f32]| v.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        let mut bounds = Aabb::from_corners(
            Vec2::new(fold_min(&self.x), fold_min(&self.y)),
            Vec2::new(fold_max(&self.x), fold_max(&self.y)),
        );
        bounds.expand(fold_max(&self.radius) + BOUNDS_PADDING);
        self.bounds = Some(bounds);
    }

    pub fn xs(&self) -> &[f32] {
        &self.x
    }

    pub fn ys(&self) -> &[f32] {
        &self.y
    }

    pub fn radii(&self) -> &[f32] {
        &self.radius
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn hit_color(&self) -> HitColor {
        self.style.hit_color
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    pub fn is_finalized(&self) -> bool {
        self.bounds.is_some()
    }

    /// Number of samples; always at least one.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, i: usize) -> Option<Point> {
        Some(Point::new(
            *self.x.get(i)?,
            *self.y.get(i)?,
            *self.radius.get(i)?,
        ))
    }

    pub fn first(&self) -> StyledPoint {
        StyledPoint::new(
            Point::new(self.x[0], self.y[0], self.radius[0]),
            self.style,
        )
    }

    pub fn last_point(&self) -> Point {
        let i = self.len() - 1;
        Point::new(self.x[i], self.y[i], self.radius[i])
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.radius)
            .map(|((&x, &y), &r)| Point::new(x, y, r))
    }

    /// Consecutive sample pairs in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let style = self.style;
        self.points()
            .zip(self.points().skip(1))
            .map(move |(from, to)| Segment { from, to, style })
    }
}
