use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("invalid WebID: {0:?}")]
    InvalidWebId(String),
}
