use boxoffice_catalog::MovieError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid movie in configuration: {0}")]
    InvalidMovie(#[from] MovieError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
