use thiserror::Error;

pub type SpecflowResult<T> = Result<T, SpecflowError>;

#[derive(Error, Debug)]
pub enum SpecflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Missing sheet or marker; drops the workbook or the case.
    #[error("Structural error: {0}")]
    Structural(String),

    /// Unrecognized or inconsistent sheet content; drops the case.
    #[error("Content error: {0}")]
    Content(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
