mod component;
mod error;
mod render;
mod state;
mod types;

pub use component::RingCanvas;
pub use types::RingData;
