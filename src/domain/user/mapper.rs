//! Conversions between user wire shapes and the entity

use super::dto::{UserRequest, UserResponse};
use super::entity::User;

/// Build an unsaved entity from a request
pub fn request_to_entity(request: UserRequest) -> User {
    User::new(request.name, request.surname, request.age)
}

pub fn entity_to_response(user: &User) -> UserResponse {
    UserResponse {
        name: user.name().to_string(),
        surname: user.surname().to_string(),
        age: user.age(),
    }
}

/// Map each entity in order
pub fn entities_to_responses(users: &[User]) -> Vec<UserResponse> {
    users.iter().map(entity_to_response).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[test]
    fn test_request_to_entity() {
        let request = UserRequest::new("Kamran", "Babayev", 24);

        let user = request_to_entity(request);

        assert!(user.id().is_none());
        assert_eq!(user.name(), "Kamran");
        assert_eq!(user.surname(), "Babayev");
        assert_eq!(user.age(), 24);
    }

    #[test]
    fn test_entity_to_response() {
        let user = User::with_id(UserId::new(1), "Kamran", "Babayev", 24);

        let response = entity_to_response(&user);

        assert_eq!(
            response,
            UserResponse {
                name: "Kamran".to_string(),
                surname: "Babayev".to_string(),
                age: 24,
            }
        );
    }

    #[test]
    fn test_entities_to_responses_preserves_order() {
        let users = vec![
            User::with_id(UserId::new(2), "Anar", "Eliyev", 26),
            User::with_id(UserId::new(1), "Araz", "Mammadov", 25),
        ];

        let responses = entities_to_responses(&users);

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].name, "Anar");
        assert_eq!(responses[1].name, "Araz");
    }

    #[test]
    fn test_entities_to_responses_empty() {
        assert!(entities_to_responses(&[]).is_empty());
    }
}
