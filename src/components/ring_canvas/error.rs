use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
	#[error("no browser window")]
	NoWindow,
	#[error("2d context request failed: {0}")]
	ContextRequest(String),
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("2d context has an unexpected type")]
	WrongContextType,
	#[error("animation frame request failed: {0}")]
	FrameRequest(String),
}
