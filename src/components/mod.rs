pub mod nav;
pub mod ring_canvas;
