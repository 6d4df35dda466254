//! [`ActorEntity`] implementation for [`Customer`].

use super::actions::CustomerAction;
use crate::error::DeliveryError;
use crate::model::{require_email, require_non_blank, Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = Customer;
    type Context = ();
    type Error = DeliveryError;

    /// New customers start active, stamped with the registration time.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            email: params.email.trim().to_string(),
            phone: params.phone,
            address: params.address,
            active: true,
            registered_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        require_non_blank("name", &self.name)?;
        require_email(&self.email)
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            require_non_blank("name", &name)?;
            self.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            require_email(&email)?;
            self.email = email.trim().to_string();
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CustomerAction, _ctx: &()) -> Result<Customer, Self::Error> {
        match action {
            CustomerAction::ToggleActive => {
                self.active = !self.active;
                Ok(self.clone())
            }
        }
    }

    fn conflicts_with(&self, other: &Self) -> Option<String> {
        other
            .owns_email(&self.email)
            .then(|| format!("email {} already registered", self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, email: &str) -> CustomerCreate {
        CustomerCreate {
            name: name.into(),
            email: email.into(),
            phone: None,
            address: Some("Rua A, 10".into()),
        }
    }

    #[tokio::test]
    async fn test_new_customer_is_active() {
        let mut customer = Customer::from_create_params(CustomerId(1), params(" Ana ", "ana@example.com")).unwrap();
        customer.on_create(&()).await.unwrap();
        assert!(customer.active);
        assert_eq!(customer.name, "Ana");
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let mut customer = Customer::from_create_params(CustomerId(1), params(" ", "ana@example.com")).unwrap();
        let result = customer.on_create(&()).await;
        assert!(matches!(result, Err(DeliveryError::Validation(_))));
    }

    #[test]
    fn test_email_conflict_ignores_case() {
        let a = Customer::from_create_params(CustomerId(1), params("Ana", "ana@example.com")).unwrap();
        let b = Customer::from_create_params(CustomerId(2), params("Ana B", "ANA@example.com")).unwrap();
        assert!(a.conflicts_with(&b).is_some());
    }

    #[tokio::test]
    async fn test_toggle_active_returns_snapshot() {
        let mut customer = Customer::from_create_params(CustomerId(1), params("Ana", "ana@example.com")).unwrap();
        let snapshot = customer
            .handle_action(CustomerAction::ToggleActive, &())
            .await
            .unwrap();
        assert!(!snapshot.active);
        assert_eq!(snapshot, customer);
    }
}
