use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("theme overlay is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("theme overlay must be a JSON object, got {found}")]
    OverlayNotObject { found: &'static str },

    #[error("theme does not match the schema: {0}")]
    Schema(#[from] serde_json::Error),
}
