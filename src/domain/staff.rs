use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::access::StaffRole;
use crate::domain::user::NewUser;

/// Membership granting a user a role within one restaurant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StaffMember {
    /// Unique identifier of the membership.
    pub id: i32,
    /// Restaurant the membership belongs to.
    pub restaurant_id: i32,
    /// Session subject of the member.
    pub user_id: String,
    /// Role held within the restaurant.
    pub role: StaffRole,
    /// Inactive memberships grant no access at all.
    pub activated: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Staff member decorated with the profile stored for the user, if any.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StaffListing {
    #[serde(flatten)]
    pub member: StaffMember,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Payload required to insert a new membership.
#[derive(Debug, Clone)]
pub struct NewStaffMember {
    pub restaurant_id: i32,
    pub user_id: String,
    pub role: StaffRole,
    pub activated: bool,
    /// Profile stored for the user alongside the membership, when known.
    pub profile: Option<NewUser>,
    pub updated_at: NaiveDateTime,
}

impl NewStaffMember {
    /// Build an activated membership payload.
    pub fn new(restaurant_id: i32, user_id: impl Into<String>, role: StaffRole) -> Self {
        Self {
            restaurant_id,
            user_id: user_id.into(),
            role,
            activated: true,
            profile: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Override the activation flag.
    pub fn with_activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }

    pub fn with_profile(mut self, profile: NewUser) -> Self {
        self.profile = Some(profile);
        self
    }
}

/// Patch data applied to an existing membership.
#[derive(Debug, Clone)]
pub struct UpdateStaffMember {
    pub role: Option<StaffRole>,
    pub activated: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateStaffMember {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateStaffMember {
    pub fn new() -> Self {
        Self {
            role: None,
            activated: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn role(mut self, role: StaffRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn activated(mut self, activated: bool) -> Self {
        self.activated = Some(activated);
        self
    }

    /// Whether the patch changes anything beyond the timestamp.
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.activated.is_none()
    }
}
