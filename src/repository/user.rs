use chrono::Local;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{domain::user::NewUser as DomainNewUser, models::user::NewUser as DbNewUser};

/// Insert the user or refresh the stored name and email.
///
/// Runs on the caller's connection so it joins whatever transaction is open there.
pub(crate) fn upsert_user(
    conn: &mut SqliteConnection,
    new_user: &DomainNewUser,
) -> RepositoryResult<()> {
    use crate::schema::users;

    let db_new = DbNewUser::from_domain(new_user, Local::now().naive_utc());

    diesel::insert_into(users::table)
        .values(&db_new)
        .on_conflict(users::id)
        .do_update()
        .set(&db_new)
        .execute(conn)?;

    Ok(())
}
