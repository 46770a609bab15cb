pub type ScrollResult<T> = Result<T, ScrollError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("access error: {0}")]
    Access(String),

    #[error("model error: {0}")]
    Model(String),
}

impl ScrollError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn access(msg: impl Into<String>) -> Self {
        Self::Access(msg.into())
    }

    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }
}
