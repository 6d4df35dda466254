//! # Customer Manager
//!
//! Registration, profile management and lookups for customers. Every operation on
//! a specific customer applies the self-or-admin rule.

use crate::clients::CustomerClient;
use crate::error::{DeliveryError, Result};
use crate::model::{require_email, require_non_blank, Customer, CustomerCreate, CustomerId, CustomerUpdate};
use crate::security::{guard, Identity};
use resource_actor::ActorClient;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct CustomerService {
    customers: CustomerClient,
}

impl CustomerService {
    pub fn new(customers: CustomerClient) -> Self {
        Self { customers }
    }

    /// Registers an active customer. A duplicate e-mail is a `Business` error.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn register(&self, params: CustomerCreate) -> Result<Customer> {
        require_non_blank("name", &params.name)?;
        require_email(&params.email)?;

        let customer = self.customers.create_customer(params).await?;
        info!(customer = %customer.id, "Customer registered");
        Ok(customer)
    }

    #[instrument(skip(self, identity))]
    pub async fn get(&self, id: CustomerId, identity: &Identity) -> Result<Customer> {
        let customer = self.customers.require(id).await?;
        guard::ensure_self_or_admin(identity, &customer.email)?;
        Ok(customer)
    }

    #[instrument(skip(self, identity))]
    pub async fn update(&self, id: CustomerId, changes: CustomerUpdate, identity: &Identity) -> Result<Customer> {
        if let Some(name) = &changes.name {
            require_non_blank("name", name)?;
        }
        if let Some(email) = &changes.email {
            require_email(email)?;
        }

        let customer = self.customers.require(id).await?;
        guard::ensure_self_or_admin(identity, &customer.email)?;
        self.customers.update_customer(id, changes).await
    }

    /// Soft delete: flips the active flag.
    #[instrument(skip(self, identity))]
    pub async fn toggle_active(&self, id: CustomerId, identity: &Identity) -> Result<Customer> {
        let customer = self.customers.require(id).await?;
        guard::ensure_self_or_admin(identity, &customer.email)?;

        let toggled = self.customers.toggle_active(id).await?;
        info!(customer = %id, active = toggled.active, "Customer status toggled");
        Ok(toggled)
    }

    /// The caller must be ADMIN or the owner of `email`; checked before the lookup.
    #[instrument(skip(self, identity))]
    pub async fn find_by_email(&self, email: &str, identity: &Identity) -> Result<Customer> {
        guard::ensure_self_or_admin(identity, email)?;
        self.customers
            .find_by_email(email)
            .await?
            .ok_or_else(|| DeliveryError::NotFound(format!("customer with email {email}")))
    }

    pub async fn list_active(&self) -> Result<Vec<Customer>> {
        self.customers.list_active().await
    }

    /// Case-insensitive search on the name.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Customer>> {
        require_non_blank("name", fragment)?;
        self.customers.search_by_name(fragment).await
    }
}
