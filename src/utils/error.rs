use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Attempted to divide by zero")]
    DivisionByZero,

    #[error("Required argument is missing: {name}")]
    NullArgument { name: &'static str },

    #[error(transparent)]
    Validator(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DomainError>;
