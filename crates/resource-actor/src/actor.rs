//! # Resource Actor
//!
//! The server half of the store. A `ResourceActor<T>` owns every record of one entity
//! type and processes [`ResourceRequest`]s one at a time, so its state needs no locks.
//!
//! ## Operations
//!
//! * **Create**: draws the next id, builds the record, runs `on_create`, checks
//!   uniqueness against the stored records, inserts it and replies with the stored value.
//! * **Get**: replies with a clone of the record, or `None`.
//! * **Update** / **Action**: run the hook on a clone of the stored record, check
//!   uniqueness, then write the clone back. Any failure leaves the store untouched.
//! * **List**: replies with every record matching the query, in ascending id order.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and the client that talks to it.
    ///
    /// `buffer_size` is the channel capacity; callers wait when it is full.
    /// The actor does nothing until [`ResourceActor::run`] is spawned.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every hook, which lets an entity reach other actors
    /// that were created after this one.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, id = %self.last_id(), size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| query.matches(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, query = query.label(), matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn last_id(&self) -> T::Id {
        T::Id::from(self.next_id.saturating_sub(1))
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;
        self.check_conflicts(None, &item)?;

        // Ids of rejected creates are not consumed.
        self.next_id += 1;
        self.store.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&mut self, id: &T::Id, update: T::Update, context: &T::Context) -> Result<T, FrameworkError> {
        let mut candidate = self.working_copy(id)?;
        candidate.on_update(update, context).await.map_err(entity_error)?;
        self.check_conflicts(Some(id), &candidate)?;
        self.store.insert(id.clone(), candidate.clone());
        Ok(candidate)
    }

    async fn act(&mut self, id: &T::Id, action: T::Action, context: &T::Context) -> Result<T::ActionResult, FrameworkError> {
        let mut candidate = self.working_copy(id)?;
        let result = candidate.handle_action(action, context).await.map_err(entity_error)?;
        self.check_conflicts(Some(id), &candidate)?;
        self.store.insert(id.clone(), candidate);
        Ok(result)
    }

    fn working_copy(&self, id: &T::Id) -> Result<T, FrameworkError> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    fn check_conflicts(&self, own_id: Option<&T::Id>, candidate: &T) -> Result<(), FrameworkError> {
        let clash = self
            .store
            .iter()
            .filter(|(id, _)| Some(*id) != own_id)
            .find_map(|(_, other)| candidate.conflicts_with(other));
        match clash {
            Some(reason) => Err(FrameworkError::Conflict(reason)),
            None => Ok(()),
        }
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}
