//! Ownership rules shared by every manager.
//!
//! Each check is a pure function of the caller [`Identity`] and the ownership data of
//! the target record. A violation is always [`DeliveryError::AccessDenied`], never
//! `NotFound` or `Business`.

use super::Identity;
use crate::error::{DeliveryError, Result};
use crate::model::RestaurantId;
use tracing::warn;

fn deny(identity: &Identity, reason: String) -> Result<()> {
    warn!(caller = identity.email(), role = ?identity.role(), %reason, "Access denied");
    Err(DeliveryError::AccessDenied(reason))
}

fn same_email(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

pub fn ensure_admin(identity: &Identity) -> Result<()> {
    match identity {
        Identity::Admin { .. } => Ok(()),
        _ => deny(identity, "administrators only".to_string()),
    }
}

/// ADMIN, or any caller whose e-mail is the owner's.
pub fn ensure_self_or_admin(identity: &Identity, owner_email: &str) -> Result<()> {
    match identity {
        Identity::Admin { .. } => Ok(()),
        Identity::Restaurant { email, .. } | Identity::Customer { email } if same_email(email, owner_email) => Ok(()),
        _ => deny(identity, format!("{} may only access their own data", identity.email())),
    }
}

/// ADMIN, or the RESTAURANTE account linked to `restaurant_id`.
pub fn ensure_restaurant_owner(identity: &Identity, restaurant_id: RestaurantId) -> Result<()> {
    match identity {
        Identity::Admin { .. } => Ok(()),
        Identity::Restaurant {
            restaurant_id: own, ..
        } if *own == restaurant_id => Ok(()),
        _ => deny(identity, format!("{restaurant_id} is not managed by {}", identity.email())),
    }
}

/// ADMIN, or the CLIENTE account whose e-mail is the owner's.
pub fn ensure_customer_owner(identity: &Identity, owner_email: &str) -> Result<()> {
    match identity {
        Identity::Admin { .. } => Ok(()),
        Identity::Customer { email } if same_email(email, owner_email) => Ok(()),
        _ => deny(identity, format!("only the ordering customer may do this, not {}", identity.email())),
    }
}

/// Who may read an order: ADMIN, the customer who placed it, the restaurant that serves it.
pub fn ensure_order_visible(identity: &Identity, customer_email: &str, restaurant_id: RestaurantId) -> Result<()> {
    match identity {
        Identity::Admin { .. } => Ok(()),
        Identity::Customer { email } if same_email(email, customer_email) => Ok(()),
        Identity::Restaurant {
            restaurant_id: own, ..
        } if *own == restaurant_id => Ok(()),
        _ => deny(identity, format!("order is not visible to {}", identity.email())),
    }
}
