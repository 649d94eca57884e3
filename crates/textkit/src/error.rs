#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("No input: pass the text as an argument, use --file, or pipe it on stdin")]
    NoInput,

    #[error("Failed to read {path}: {message}")]
    ReadFile { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFile { path: String, message: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard support is not available in this build")]
    ClipboardDisabled,

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}
