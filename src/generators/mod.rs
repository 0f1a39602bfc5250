// src/generators/mod.rs
use thiserror::Error;

pub mod passphrase;
pub mod password;

pub use passphrase::generate_passphrase;
pub use password::PasswordGenerator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length must be at least 1 (got {0})")]
    InvalidLength(usize),

    #[error("passphrase word count must be at least 1 (got {0})")]
    InvalidWordCount(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
