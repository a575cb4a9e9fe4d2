//! User entity and related types

use serde::{Deserialize, Serialize};

/// User identifier assigned by the store on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user record
///
/// `id` stays `None` until the record has been saved; afterwards it never
/// changes. Field constraints (non-blank names, minimum age) are enforced on
/// the inbound request, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    name: String,
    surname: String,
    age: i32,
}

impl User {
    /// Create an unsaved user
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }

    /// Rebuild a user that already has a store-assigned id
    pub fn with_id(
        id: UserId,
        name: impl Into<String>,
        surname: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }

    // Getters

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    // Mutators

    /// Overwrite the editable fields, leaving the id untouched
    pub fn apply_changes(&mut self, name: impl Into<String>, surname: impl Into<String>, age: i32) {
        self.name = name.into();
        self.surname = surname.into();
        self.age = age;
    }

    /// Return the same record carrying the given id.
    ///
    /// Only stores call this, and only for records that have no id yet.
    pub(crate) fn assign_id(mut self, id: UserId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("Kamran", "Babayev", 24);

        assert!(user.id().is_none());
        assert_eq!(user.name(), "Kamran");
        assert_eq!(user.surname(), "Babayev");
        assert_eq!(user.age(), 24);
    }

    #[test]
    fn test_apply_changes_keeps_id() {
        let mut user = User::with_id(UserId::new(1), "Anar", "Zeynalov", 24);

        user.apply_changes("Kazim", "Ayxanov", 25);

        assert_eq!(user.id(), Some(UserId::new(1)));
        assert_eq!(user.name(), "Kazim");
        assert_eq!(user.surname(), "Ayxanov");
        assert_eq!(user.age(), 25);
    }

    #[test]
    fn test_assign_id_only_once() {
        let user = User::new("Ali", "Valiyev", 26).assign_id(UserId::new(2));
        assert_eq!(user.id(), Some(UserId::new(2)));

        let user = user.assign_id(UserId::new(3));
        assert_eq!(user.id(), Some(UserId::new(2)));
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(99)).unwrap();
        assert_eq!(json, "99");
        assert_eq!(UserId::new(99).to_string(), "99");
    }
}
