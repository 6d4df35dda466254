//! # ActorClient Trait
//!
//! Common read operations for resource-specific client wrappers, built on top of a
//! generic [`ResourceClient`]. Wrappers only provide [`ActorClient::inner`] and an
//! error type that can absorb a [`FrameworkError`].
use crate::{ActorEntity, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;

#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain error type returned by the wrapper.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetches a record, `None` when the id is unknown.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().get(id).await?)
    }

    /// Fetches a record that must exist.
    #[tracing::instrument(skip(self))]
    async fn require(&self, id: T::Id) -> Result<T, Self::Error> {
        let found = self.inner().get(id.clone()).await?;
        found.ok_or_else(|| FrameworkError::NotFound(id.to_string()).into())
    }

    /// Fetches every record accepted by `predicate`.
    async fn list_where<F>(&self, label: &'static str, predicate: F) -> Result<Vec<T>, Self::Error>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Ok(self.inner().list(Query::new(label, predicate)).await?)
    }
}
