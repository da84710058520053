#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown style token: {0}")]
    UnknownToken(String),
}
