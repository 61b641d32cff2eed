use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("station table text is missing")]
    InvalidInput,

    #[error("parsing error on line: {0}")]
    LineParse(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
