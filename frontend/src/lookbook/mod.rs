//! Album lookbook: covers grid, overlay with carousel or orbit navigation,
//! and the zoom view layered above it.

pub mod catalog;
pub mod covers;
pub mod gesture;
pub mod navigation;
pub mod overlay;
pub mod section;
pub mod state;
pub mod zoom;

pub use section::Lookbook;
