pub mod hit;
pub mod raster;
pub mod renderer;

pub use hit::hit_test;
pub use raster::{RasterRenderer, Surface};
pub use renderer::Renderer;
