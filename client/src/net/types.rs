//! Wire DTOs for the BFF boundary.
//!
//! DESIGN
//! ======
//! Resource services speak camelCase JSON (Spring defaults); the current-user
//! endpoint speaks OIDC claim names. Conversion into the session's
//! `Identity` happens here so nothing else sees claim names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::Identity;

/// Body of `GET {bff}/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    /// Subject identifier; required and non-empty.
    pub sub: String,
    pub preferred_username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl UserClaims {
    /// Convert into an `Identity`, rejecting an empty subject.
    pub fn into_identity(self) -> Option<Identity> {
        if self.sub.trim().is_empty() {
            return None;
        }
        Some(Identity::new(self.sub, self.preferred_username, self.email, self.name))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_wire() == raw)
    }
}

/// Stored profile returned by `GET /api/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub age: u32,
}

/// Body of `POST /api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub age: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Canceled => "CANCELED",
        }
    }

    /// CSS class for the status chip, e.g. `status-shipped`.
    pub fn chip_class(self) -> String {
        format!("status-chip status-{}", self.as_wire().to_ascii_lowercase())
    }
}

/// Order as returned by `/api/orders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub status: OrderStatus,
    pub created_by: String,
    /// ISO-8601 timestamp as sent by the order service.
    pub creation_time: String,
}

/// Body of `POST {bff}/public/profile/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    pub gender: Gender,
    pub age: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmResponse {
    pub message: String,
    pub email: String,
}
