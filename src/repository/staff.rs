use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::staff::{
    NewStaffMember as DomainNewStaffMember, StaffListing, StaffMember as DomainStaffMember,
    UpdateStaffMember as DomainUpdateStaffMember,
};
use crate::models::staff::{
    NewStaffMember as DbNewStaffMember, StaffMember as DbStaffMember,
    UpdateStaffMember as DbUpdateStaffMember,
};
use crate::repository::user::upsert_user;
use crate::repository::{DieselRepository, StaffReader, StaffWriter};

impl StaffReader for DieselRepository {
    fn list_staff(&self, restaurant_id: i32) -> RepositoryResult<Vec<StaffListing>> {
        use crate::schema::{restaurant_staff, users};

        let mut conn = self.conn()?;

        let rows = restaurant_staff::table
            .left_join(users::table)
            .filter(restaurant_staff::restaurant_id.eq(restaurant_id))
            .order(restaurant_staff::id.asc())
            .select((
                DbStaffMember::as_select(),
                users::name.nullable(),
                users::email.nullable(),
            ))
            .load::<(DbStaffMember, Option<String>, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(member, name, email)| StaffListing {
                member: member.into(),
                name,
                email,
            })
            .collect())
    }

    fn get_staff_member(&self, staff_id: i32) -> RepositoryResult<Option<DomainStaffMember>> {
        use crate::schema::restaurant_staff;

        let mut conn = self.conn()?;

        let member = restaurant_staff::table
            .filter(restaurant_staff::id.eq(staff_id))
            .first::<DbStaffMember>(&mut conn)
            .optional()?;

        Ok(member.map(Into::into))
    }
}

impl StaffWriter for DieselRepository {
    fn create_staff_member(
        &self,
        new_member: &DomainNewStaffMember,
    ) -> RepositoryResult<DomainStaffMember> {
        use crate::schema::restaurant_staff;

        let mut conn = self.conn()?;

        conn.transaction::<DomainStaffMember, RepositoryError, _>(|conn| {
            if let Some(profile) = &new_member.profile {
                upsert_user(conn, profile)?;
            }

            let created = diesel::insert_into(restaurant_staff::table)
                .values(&DbNewStaffMember::from(new_member))
                .get_result::<DbStaffMember>(conn)?;

            Ok(created.into())
        })
    }

    fn update_staff_member(
        &self,
        staff_id: i32,
        updates: &DomainUpdateStaffMember,
    ) -> RepositoryResult<DomainStaffMember> {
        use crate::schema::restaurant_staff;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateStaffMember::from(updates);

        let updated =
            diesel::update(restaurant_staff::table.filter(restaurant_staff::id.eq(staff_id)))
                .set(&db_updates)
                .get_result::<DbStaffMember>(&mut conn)
                .optional()?;

        updated.map(Into::into).ok_or(RepositoryError::NotFound)
    }
}
