use pushkind_common::domain::auth::AuthenticatedUser;
use serde::Deserialize;

/// Profile of an authenticated user, stored locally to label staff and orders.
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl NewUser {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let email: String = email.into();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.to_lowercase(),
        }
    }
}

impl From<&AuthenticatedUser> for NewUser {
    fn from(value: &AuthenticatedUser) -> Self {
        NewUser::new(value.sub.clone(), value.name.clone(), value.email.clone())
    }
}
