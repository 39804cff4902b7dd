// SPDX-License-Identifier: MIT

//! User models: public profile, directory resolution, auth payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public profile fields for a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
}

/// Result of resolving a user id against the directory.
///
/// `Unresolved` is deliberate: when no profile exists (or the payload fails
/// validation) nothing is synthesized in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum UserRecord {
    Profile(UserPublic),
    Unresolved { id: String },
}

impl UserRecord {
    pub fn profile(&self) -> Option<&UserPublic> {
        match self {
            UserRecord::Profile(user) => Some(user),
            UserRecord::Unresolved { .. } => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, UserRecord::Unresolved { .. })
    }
}

/// Identity attached to an enriched record: the driver on a ride, the
/// reviewer on a review.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PersonRef {
    #[serde(rename_all = "camelCase")]
    Known {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        profile_photo_url: Option<String>,
    },
    Unresolved {
        id: String,
    },
}

impl From<UserRecord> for PersonRef {
    fn from(record: UserRecord) -> Self {
        match record {
            UserRecord::Profile(user) => PersonRef::Known {
                name: user.name,
                profile_photo_url: user.profile_photo_url,
            },
            UserRecord::Unresolved { id } => PersonRef::Unresolved { id },
        }
    }
}

/// Rider/driver role selector on the auth forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Rider,
    Driver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub user_type: UserType,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub user_type: UserType,
    pub gender: Gender,
}

/// Response from `POST /auth/login`. The token may be absent when the
/// backend signals a pending step instead of a session.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserPublic>,
}
