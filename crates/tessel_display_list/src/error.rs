//! Display list error types

use tessel_core::RenderingResourceId;
use thiserror::Error;

use crate::items::ItemType;

/// Failure applying a single item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Item references a resource and was applied without a resource heap
    #[error("{0} references a resource and cannot be applied without one")]
    ResourceRequired(ItemType),

    /// Referenced resource is not in the heap
    #[error("{item_type} references missing resource {id}")]
    MissingResource {
        item_type: ItemType,
        id: RenderingResourceId,
    },
}

/// Failure replaying a display list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Replay stopped at the item with this index
    #[error("replay aborted at item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: ApplyError,
    },
}

impl ReplayError {
    /// Index of the item that failed
    pub fn index(&self) -> usize {
        match self {
            ReplayError::Item { index, .. } => *index,
        }
    }
}

/// Result type for replay operations
pub type Result<T> = std::result::Result<T, ReplayError>;
