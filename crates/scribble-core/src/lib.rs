pub mod builder;
pub mod color;
pub mod consts;
pub mod error;
pub mod geom;
pub mod store;
pub mod stroke;

pub use builder::StrokeBuilder;
pub use color::{Color, HitColor};
pub use error::{Error, Result};
pub use geom::{Aabb, Point, Vec2};
pub use store::StrokeStore;
pub use stroke::{Segment, Stroke, StrokeStyle, StyledPoint};
