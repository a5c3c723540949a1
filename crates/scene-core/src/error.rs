use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene tag {0:?}")]
    UnknownTag(String),
    #[error("surface error: {0}")]
    Surface(String),
}
