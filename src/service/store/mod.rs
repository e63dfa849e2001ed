pub mod json_file;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{LastSeenState, Res, Void};

// Traits.

/// Generic store for the last-seen state.
///
/// The whole mapping is read at the start of a check cycle and written back
/// at the end. Cycles never run concurrently, so implementations need no locking.
#[async_trait]
pub trait GenericStateStore: Send + Sync + 'static {
    /// Load the mapping; an absent store is an empty mapping.
    async fn load(&self) -> Res<LastSeenState>;

    /// Replace the stored mapping.
    async fn save(&self, state: &LastSeenState) -> Void;
}

// Structs.

/// State store for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<dyn GenericStateStore>,
}

impl Deref for StateStore {
    type Target = dyn GenericStateStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl StateStore {
    pub fn new(inner: Arc<dyn GenericStateStore>) -> Self {
        Self { inner }
    }
}
