//! # Customer Client
//!
//! Provides a high-level API for interacting with the `Customer` actor.
use crate::customer_actor::CustomerAction;
use crate::error::{DeliveryError, Result};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(&self, id: CustomerId, update: CustomerUpdate) -> Result<Customer> {
        Ok(self.inner.update(id, update).await?)
    }

    /// Flips the active flag and returns the customer as stored afterwards.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: CustomerId) -> Result<Customer> {
        Ok(self.inner.perform_action(id, CustomerAction::ToggleActive).await?)
    }

    /// Case-insensitive lookup by e-mail.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let wanted = email.trim().to_string();
        let mut found = self
            .list_where("email", move |c: &Customer| c.owns_email(&wanted))
            .await?;
        Ok(found.pop())
    }

    pub async fn list_active(&self) -> Result<Vec<Customer>> {
        self.list_where("active", |c: &Customer| c.active).await
    }

    /// Customers whose name contains `fragment`, ignoring case.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Customer>> {
        let fragment = fragment.trim().to_lowercase();
        self.list_where("name contains", move |c: &Customer| {
            c.name.to_lowercase().contains(&fragment)
        })
        .await
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = DeliveryError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }
}
