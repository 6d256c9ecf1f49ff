use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::staff::{
    NewStaffMember as DomainNewStaffMember, StaffMember as DomainStaffMember,
    UpdateStaffMember as DomainUpdateStaffMember,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurant_staff)]
pub struct StaffMember {
    pub id: i32,
    pub restaurant_id: i32,
    pub user_id: String,
    pub role: String,
    pub activated: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurant_staff)]
pub struct NewStaffMember<'a> {
    pub restaurant_id: i32,
    pub user_id: &'a str,
    pub role: &'a str,
    pub activated: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::restaurant_staff)]
pub struct UpdateStaffMember<'a> {
    pub role: Option<&'a str>,
    pub activated: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl From<StaffMember> for DomainStaffMember {
    fn from(value: StaffMember) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            user_id: value.user_id,
            role: value.role.as_str().into(),
            activated: value.activated,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewStaffMember> for NewStaffMember<'a> {
    fn from(value: &'a DomainNewStaffMember) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            user_id: value.user_id.as_str(),
            role: value.role.into(),
            activated: value.activated,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateStaffMember> for UpdateStaffMember<'a> {
    fn from(value: &'a DomainUpdateStaffMember) -> Self {
        Self {
            role: value.role.map(|role| role.into()),
            activated: value.activated,
            updated_at: value.updated_at,
        }
    }
}
