use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
    UpdateRestaurant as DomainUpdateRestaurant,
};
use crate::models::{from_json_column, to_json_column};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub kind: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_rate: f64,
    pub opening_hours: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct NewRestaurant<'a> {
    pub name: &'a str,
    pub kind: Option<&'a str>,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub tax_rate: f64,
    pub opening_hours: String,
    pub created_by: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct UpdateRestaurant<'a> {
    pub name: Option<&'a str>,
    pub kind: Option<&'a str>,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub tax_rate: Option<f64>,
    pub opening_hours: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<Restaurant> for DomainRestaurant {
    fn from(value: Restaurant) -> Self {
        Self {
            id: value.id,
            name: value.name,
            kind: value.kind,
            address: value.address,
            phone: value.phone,
            email: value.email,
            tax_rate: value.tax_rate,
            opening_hours: from_json_column(&value.opening_hours),
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRestaurant> for NewRestaurant<'a> {
    fn from(value: &'a DomainNewRestaurant) -> Self {
        Self {
            name: value.name.as_str(),
            kind: value.kind.as_deref(),
            address: value.address.as_deref(),
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            tax_rate: value.tax_rate,
            opening_hours: to_json_column(&value.opening_hours),
            created_by: value.created_by.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateRestaurant> for UpdateRestaurant<'a> {
    fn from(value: &'a DomainUpdateRestaurant) -> Self {
        Self {
            name: value.name.as_deref(),
            kind: value.kind.as_deref(),
            address: value.address.as_deref(),
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            tax_rate: value.tax_rate,
            opening_hours: value.opening_hours.as_ref().map(to_json_column),
            updated_at: value.updated_at,
        }
    }
}
