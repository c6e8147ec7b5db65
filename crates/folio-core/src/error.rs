use thiserror::Error;

/// Errors surfaced by the pure effect logic. The web layer logs these and
/// disables the affected effect; nothing here is fatal for the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FolioError {
    #[error("no views registered")]
    NoViews,
    #[error("unknown view `{0}`")]
    UnknownView(String),
    #[error("view `{0}` is declared more than once")]
    DuplicateView(String),
    #[error("unknown config key `{0}`")]
    UnknownConfigKey(String),
    #[error("invalid value `{value}` for config key `{key}`")]
    InvalidConfigValue { key: String, value: String },
    #[error("invalid timing: {0}")]
    InvalidTiming(&'static str),
}

pub type Result<T> = std::result::Result<T, FolioError>;
