//! Library error type.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("node not found: {node}")]
    NodeNotFound { node: String },
}

impl Error {
    pub(crate) fn node_not_found(id: &impl fmt::Debug) -> Self {
        Self::NodeNotFound {
            node: format!("{id:?}"),
        }
    }
}
