//! Wire shapes for user records

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_not_blank;

/// Inbound payload for create and update.
///
/// Carries no id; an `id` key in the JSON body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(custom(function = "validate_not_blank", message = "Name can not be empty"))]
    pub name: String,

    #[validate(custom(function = "validate_not_blank", message = "Surname can not be empty"))]
    pub surname: String,

    #[validate(range(min = 10, message = "Age must be at least 10"))]
    pub age: i32,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }
}

/// Outbound representation of a user record; the id is not exposed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserResponse {
    pub name: String,
    pub surname: String,
    pub age: i32,
}
