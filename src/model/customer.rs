use super::CustomerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered customer.
///
/// Customers are never removed: [`CustomerAction::ToggleActive`](crate::customer_actor::CustomerAction)
/// flips `active` instead. Inactive customers cannot place orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Unique across customers, compared case-insensitively.
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub active: bool,
    pub registered_at: DateTime<Utc>,
}

/// Payload for registering a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Profile changes; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    /// Whether `email` belongs to this customer, ignoring case.
    pub fn owns_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}
