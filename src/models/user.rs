use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::NewUser as DomainNewUser;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewUser<'a> {
    pub fn from_domain(value: &'a DomainNewUser, updated_at: NaiveDateTime) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            email: value.email.as_str(),
            updated_at,
        }
    }
}
