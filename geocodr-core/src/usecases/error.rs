use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Address is required")]
    MissingAddress,
    #[error("Batch size exceeds limit of {max} addresses")]
    BatchTooLarge { max: usize, actual: usize },
}
