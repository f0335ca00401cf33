//! Incremental stroke builder.
//!
//! Holds at most one draft. Samples are appended while the pointer moves;
//! `stroke_complete` computes the bounds and hands the finished stroke over.

use crate::error::{Error, Result};
use crate::geom::Point;
use crate::stroke::{Stroke, StrokeStyle, StyledPoint};

#[derive(Debug, Default)]
pub struct StrokeBuilder {
    draft: Option<Stroke>,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.draft.is_some()
    }

    /// The in-progress stroke, if any.
    pub fn draft(&self) -> Option<&Stroke> {
        self.draft.as_ref()
    }

    /// Begin a new draft, dropping any unfinished one.
    pub fn stroke_start(&mut self, first: StyledPoint) {
        if let Some(old) = self.draft.take() {
            log::debug!(
                "builder: discarding unfinished stroke {} ({} samples)",
                old.hit_color(),
                old.len()
            );
        }
        self.draft = Some(Stroke::draft(first));
    }

    /// Append a sample. Returns the previous last sample and the draft's
    /// style, so the caller can paint just the new segment.
    pub fn stroke_continue(&mut self, point: Point) -> Result<(Point, StrokeStyle)> {
        let draft = self
            .draft
            .as_mut()
            .ok_or(Error::IllegalState("stroke_continue called before stroke_start"))?;
        let previous = draft.last_point();
        draft.push(point);
        Ok((previous, draft.style()))
    }

    /// Finalize the draft's bounds and return it, leaving the builder idle.
    pub fn stroke_complete(&mut self) -> Result<Stroke> {
        let mut stroke = self
            .draft
            .take()
            .ok_or(Error::IllegalState("stroke_complete called before stroke_start"))?;
        stroke.finalize();
        Ok(stroke)
    }
}
