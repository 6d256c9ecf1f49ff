use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::access::StaffRole;
use crate::domain::staff::{NewStaffMember, UpdateStaffMember};
use crate::domain::user::NewUser;
use crate::forms::non_blank;

pub type StaffFormResult<T> = Result<T, StaffFormError>;

#[derive(Debug, Error)]
pub enum StaffFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("user id cannot be empty")]
    EmptyUserId,
}

/// Payload for adding a user to a restaurant.
#[derive(Debug, Deserialize, Validate)]
pub struct AddStaffForm {
    /// Session subject of the user being added.
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    /// Optional profile used to label the member until they sign in.
    #[validate(length(max = 128))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: StaffRole,
    pub activated: Option<bool>,
}

impl AddStaffForm {
    /// Build the membership; a profile is attached only when both name and email are given.
    pub fn into_new_staff(self, restaurant_id: i32) -> StaffFormResult<NewStaffMember> {
        self.validate()?;

        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(StaffFormError::EmptyUserId);
        }

        let profile = match (
            non_blank(self.name.as_deref()),
            non_blank(self.email.as_deref()),
        ) {
            (Some(name), Some(email)) => Some(NewUser::new(user_id.as_str(), name, email)),
            _ => None,
        };

        let mut member = NewStaffMember::new(restaurant_id, user_id, self.role)
            .with_activated(self.activated.unwrap_or(true));
        if let Some(profile) = profile {
            member = member.with_profile(profile);
        }

        Ok(member)
    }
}

/// Payload for changing a membership's role or activation.
#[derive(Debug, Default, Deserialize)]
pub struct EditStaffForm {
    pub role: Option<StaffRole>,
    pub activated: Option<bool>,
}

impl EditStaffForm {
    pub fn into_update_staff(self) -> UpdateStaffMember {
        let mut updates = UpdateStaffMember::new();
        if let Some(role) = self.role {
            updates = updates.role(role);
        }
        if let Some(activated) = self.activated {
            updates = updates.activated(activated);
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_builds_member_and_profile() {
        let form = AddStaffForm {
            user_id: " user-2 ".to_string(),
            name: Some("Kim".to_string()),
            email: Some("Kim@Example.com".to_string()),
            role: StaffRole::Kitchen,
            activated: None,
        };

        let member = form.into_new_staff(3).expect("expected success");

        assert_eq!(member.restaurant_id, 3);
        assert_eq!(member.user_id, "user-2");
        assert_eq!(member.role, StaffRole::Kitchen);
        assert!(member.activated);

        let profile = member.profile.expect("profile expected");
        assert_eq!(profile.id, "user-2");
        assert_eq!(profile.email, "kim@example.com");
    }

    #[test]
    fn add_form_without_full_profile_skips_it() {
        let form = AddStaffForm {
            user_id: "user-2".to_string(),
            name: Some("Kim".to_string()),
            email: None,
            role: StaffRole::Server,
            activated: Some(false),
        };

        let member = form.into_new_staff(3).expect("expected success");

        assert!(member.profile.is_none());
        assert!(!member.activated);
    }

    #[test]
    fn add_form_rejects_blank_user_id() {
        let form = AddStaffForm {
            user_id: "   ".to_string(),
            name: None,
            email: None,
            role: StaffRole::Server,
            activated: None,
        };

        assert!(matches!(
            form.into_new_staff(3),
            Err(StaffFormError::EmptyUserId)
        ));
    }

    #[test]
    fn role_is_parsed_from_snake_case() {
        let form: EditStaffForm =
            serde_json::from_str(r#"{"role":"manager"}"#).expect("valid json");
        let updates = form.into_update_staff();

        assert_eq!(updates.role, Some(StaffRole::Manager));
        assert_eq!(updates.activated, None);
        assert!(!updates.is_empty());
    }
}
