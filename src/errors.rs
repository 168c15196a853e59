use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Returns a user-friendly error message with a hint on what to check
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            ViewerError::ImageLoadError { .. } => "Check that the file exists, is readable and is a supported image format.",
            ViewerError::InvalidInput { .. } => "The pixel buffer does not match the stated image dimensions.",
            ViewerError::DimensionMismatch { .. } => "The mask must have exactly the same width and height as the image.",
            ViewerError::RenderError { .. } => "The display backend failed. Check that a graphical session is available.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewerError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            ViewerError::InvalidInput { .. } => "INVALID_INPUT",
            ViewerError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            ViewerError::RenderError { .. } => "RENDER_ERROR",
        }
    }

    /// Logs the error with its code. Every error is fatal for this tool.
    pub fn log_and_report(&self) {
        log::error!("Error [{}]: {}", self.error_code(), self);
        eprintln!("{}", self.user_message());
    }
}
