use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("input too large: {cells} comparison cells exceed the limit of {limit}")]
    InputTooLarge { cells: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, DiffError>;
