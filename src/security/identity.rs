use crate::error::{DeliveryError, Result};
use crate::model::{RestaurantId, Role, User};
use serde::{Deserialize, Serialize};

/// The authenticated caller of a manager operation.
///
/// Passed explicitly into every operation that needs it; there is no ambient
/// security context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    Admin { email: String },
    Restaurant { email: String, restaurant_id: RestaurantId },
    Customer { email: String },
}

impl Identity {
    pub fn email(&self) -> &str {
        match self {
            Identity::Admin { email }
            | Identity::Restaurant { email, .. }
            | Identity::Customer { email } => email,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Identity::Admin { .. } => Role::Admin,
            Identity::Restaurant { .. } => Role::Restaurante,
            Identity::Customer { .. } => Role::Cliente,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Identity::Admin { .. })
    }
}

impl TryFrom<&User> for Identity {
    type Error = DeliveryError;

    /// Builds the caller identity of an account.
    ///
    /// Inactive accounts are refused; a restaurant account must be linked to a restaurant.
    fn try_from(user: &User) -> Result<Self> {
        if !user.active {
            return Err(DeliveryError::AccessDenied(format!(
                "account {} is inactive",
                user.email
            )));
        }
        let email = user.email.clone();
        match user.role {
            Role::Admin => Ok(Identity::Admin { email }),
            Role::Cliente => Ok(Identity::Customer { email }),
            Role::Restaurante => match user.restaurant_id {
                Some(restaurant_id) => Ok(Identity::Restaurant {
                    email,
                    restaurant_id,
                }),
                None => Err(DeliveryError::Business(format!(
                    "restaurant account {email} is not linked to a restaurant"
                ))),
            },
        }
    }
}
