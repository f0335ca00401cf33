//! Error types for stroke storage, stroke building, and erasing.
//!
//! Every variant is a broken caller contract rather than a transient
//! failure: none of the core does I/O, so nothing here is retried.

use crate::color::HitColor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// `StrokeStore::add` with a hit color that is already live.
    #[error("stroke with hit color {0} already exists")]
    DuplicateKey(HitColor),

    /// Builder continued or completed without an active draft.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// A stored stroke has no bounding box, which only drafts may lack.
    #[error("stroke {0} has no bounding box")]
    MissingBounds(HitColor),

    /// A brush gesture started with a tool that carries no paint color.
    #[error("current tool does not have a color")]
    MissingToolColor,

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("invalid key combination: {0:?}")]
    InvalidKeyCombo(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
