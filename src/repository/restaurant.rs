use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::access::StaffRole;
use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant, RestaurantMembership,
    UpdateRestaurant as DomainUpdateRestaurant,
};
use crate::domain::staff::{
    NewStaffMember as DomainNewStaffMember, StaffMember as DomainStaffMember,
};
use crate::models::restaurant::{
    NewRestaurant as DbNewRestaurant, Restaurant as DbRestaurant,
    UpdateRestaurant as DbUpdateRestaurant,
};
use crate::models::staff::{NewStaffMember as DbNewStaffMember, StaffMember as DbStaffMember};
use crate::domain::user::NewUser as DomainNewUser;
use crate::repository::user::upsert_user;
use crate::repository::{DieselRepository, RestaurantReader, RestaurantWriter};

impl RestaurantReader for DieselRepository {
    fn list_restaurants_for_user(
        &self,
        user_id: &str,
    ) -> RepositoryResult<Vec<RestaurantMembership>> {
        use crate::schema::{restaurant_staff, restaurants};

        let mut conn = self.conn()?;

        let rows = restaurants::table
            .inner_join(restaurant_staff::table)
            .filter(restaurant_staff::user_id.eq(user_id))
            .order((restaurants::name.asc(), restaurants::id.asc()))
            .select((DbRestaurant::as_select(), DbStaffMember::as_select()))
            .load::<(DbRestaurant, DbStaffMember)>(&mut conn)?;

        let memberships = rows
            .into_iter()
            .map(|(restaurant, member)| RestaurantMembership {
                restaurant: restaurant.into(),
                role: member.role.as_str().into(),
                staff_id: member.id,
                activated: member.activated,
            })
            .collect();

        Ok(memberships)
    }

    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<DomainRestaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let restaurant = restaurants::table
            .filter(restaurants::id.eq(id))
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        Ok(restaurant.map(Into::into))
    }
}

impl RestaurantWriter for DieselRepository {
    fn create_restaurant(
        &self,
        new_restaurant: &DomainNewRestaurant,
        creator: &DomainNewUser,
    ) -> RepositoryResult<(DomainRestaurant, DomainStaffMember)> {
        use crate::schema::{restaurant_staff, restaurants};

        let mut conn = self.conn()?;

        conn.transaction::<(DomainRestaurant, DomainStaffMember), RepositoryError, _>(|conn| {
            upsert_user(conn, creator)?;

            let db_new = DbNewRestaurant::from(new_restaurant);

            let created = diesel::insert_into(restaurants::table)
                .values(&db_new)
                .get_result::<DbRestaurant>(conn)?;

            let owner = DomainNewStaffMember::new(
                created.id,
                new_restaurant.created_by.as_str(),
                StaffRole::Owner,
            );

            let member = diesel::insert_into(restaurant_staff::table)
                .values(&DbNewStaffMember::from(&owner))
                .get_result::<DbStaffMember>(conn)?;

            Ok((created.into(), member.into()))
        })
    }

    fn update_restaurant(
        &self,
        restaurant_id: i32,
        updates: &DomainUpdateRestaurant,
    ) -> RepositoryResult<DomainRestaurant> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateRestaurant::from(updates);

        let updated = diesel::update(restaurants::table.filter(restaurants::id.eq(restaurant_id)))
            .set(&db_updates)
            .get_result::<DbRestaurant>(&mut conn)
            .optional()?;

        updated.map(Into::into).ok_or(RepositoryError::NotFound)
    }
}
