//! Rendering resource identifiers
//!
//! Recorded commands never own images, fonts or media players. They carry a
//! `RenderingResourceId` instead, which the replaying side resolves against
//! its own resource table. Identifiers are plain integers so they survive
//! serialization and thread handoff unchanged.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable opaque handle for an image, font or media resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderingResourceId(pub u64);

impl RenderingResourceId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a process-wide unique identifier
    pub fn generate() -> Self {
        Self(NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RenderingResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display adapter for an optional identifier
pub struct OptionalResourceId(pub Option<RenderingResourceId>);

impl fmt::Display for OptionalResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("none"),
        }
    }
}
