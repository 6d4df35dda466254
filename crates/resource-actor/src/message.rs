//! # Store Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// One-shot reply channel used by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A read-only predicate evaluated inside the actor against every stored record.
pub struct Query<T> {
    label: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Query<T> {
    /// Builds a query. `label` only shows up in logs.
    pub fn new(label: &'static str, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    /// Matches every record.
    pub fn all() -> Self {
        Self::new("all", |_| true)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Query").field(&self.label).finish()
    }
}

/// Requests understood by a [`ResourceActor`](crate::ResourceActor).
///
/// Records are never physically removed, so there is no delete request:
/// deactivation and cancellation are modelled as actions.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        query: Query<T>,
        respond_to: Response<Vec<T>>,
    },
}
