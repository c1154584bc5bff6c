//! Shared error types for the vote-agreement system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid identifier: {input}")]
    InvalidIdentifier { input: String },

    #[error("Invalid vote value: {input:?}")]
    InvalidVoteValue { input: String },

    #[error("Invalid chamber: {input}")]
    InvalidChamber { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
