//! Menu hierarchy management: menus, sections, items and modifiers.
//!
//! Reads are open to any activated member; writes need an owner or manager.
//! Removing an entry removes everything below it, but never while placed
//! orders still reference an affected item or modifier.

use pushkind_common::domain::auth::AuthenticatedUser;

use crate::domain::access::EntityRef;
use crate::domain::menu::{Menu, MenuDetails, MenuSection, Removal};
use crate::domain::menu_item::{MenuItem, Modifier};
use crate::forms::menus::{
    AddItemForm, AddMenuForm, AddModifierForm, AddSectionForm, EditItemForm, EditMenuForm,
    EditModifierForm, EditSectionForm, MenuFormError,
};
use crate::repository::{
    AccessReader, ItemWriter, MenuReader, MenuWriter, ModifierWriter, SectionWriter,
};
use crate::services::access::{ANY_ROLE, MENU_EDITORS, authorize, check_access};
use crate::services::{ServiceError, ServiceResult};

fn form_error(err: MenuFormError) -> ServiceError {
    ServiceError::Form(err.to_string())
}

/// Turn a refused removal of `entity` into an error.
fn removed(entity: EntityRef, removal: Removal) -> ServiceResult<()> {
    match removal {
        Removal::Removed => Ok(()),
        Removal::Referenced(_) => Err(ServiceError::Unprocessable(format!(
            "{} is referenced by placed orders and cannot be removed",
            entity.kind()
        ))),
    }
}

pub fn get_menus<R>(repo: &R, user: &AuthenticatedUser, restaurant_id: i32) -> ServiceResult<Vec<Menu>>
where
    R: AccessReader + MenuReader + ?Sized,
{
    check_access(repo, &user.sub, restaurant_id, ANY_ROLE)?;

    repo.list_menus(restaurant_id).map_err(ServiceError::from)
}

/// Menu with sections, items and modifiers in display order.
pub fn get_menu<R>(repo: &R, user: &AuthenticatedUser, menu_id: i32) -> ServiceResult<MenuDetails>
where
    R: AccessReader + MenuReader + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Menu(menu_id), ANY_ROLE)?;

    repo.get_menu_details(menu_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::not_found("Menu"))
}

pub fn add_menu<R>(
    repo: &R,
    user: &AuthenticatedUser,
    restaurant_id: i32,
    form: AddMenuForm,
) -> ServiceResult<Menu>
where
    R: AccessReader + MenuWriter + ?Sized,
{
    check_access(repo, &user.sub, restaurant_id, MENU_EDITORS)?;

    let new_menu = form.into_new_menu(restaurant_id).map_err(form_error)?;
    repo.create_menu(&new_menu).map_err(ServiceError::from)
}

pub fn modify_menu<R>(
    repo: &R,
    user: &AuthenticatedUser,
    menu_id: i32,
    form: EditMenuForm,
) -> ServiceResult<Menu>
where
    R: AccessReader + MenuWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Menu(menu_id), MENU_EDITORS)?;

    let updates = form.into_update_menu().map_err(form_error)?;
    repo.update_menu(menu_id, &updates)
        .map_err(ServiceError::from)
}

pub fn remove_menu<R>(repo: &R, user: &AuthenticatedUser, menu_id: i32) -> ServiceResult<()>
where
    R: AccessReader + MenuWriter + ?Sized,
{
    let entity = EntityRef::Menu(menu_id);
    authorize(repo, &user.sub, entity, MENU_EDITORS)?;

    let removal = repo.delete_menu(menu_id).map_err(ServiceError::from)?;
    removed(entity, removal)?;
    log::info!("Menu #{menu_id} removed by {}", user.sub);
    Ok(())
}

pub fn add_section<R>(
    repo: &R,
    user: &AuthenticatedUser,
    menu_id: i32,
    form: AddSectionForm,
) -> ServiceResult<MenuSection>
where
    R: AccessReader + SectionWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Menu(menu_id), MENU_EDITORS)?;

    let new_section = form.into_new_section(menu_id).map_err(form_error)?;
    repo.create_section(&new_section)
        .map_err(ServiceError::from)
}

pub fn modify_section<R>(
    repo: &R,
    user: &AuthenticatedUser,
    section_id: i32,
    form: EditSectionForm,
) -> ServiceResult<MenuSection>
where
    R: AccessReader + SectionWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Section(section_id), MENU_EDITORS)?;

    let updates = form.into_update_section().map_err(form_error)?;
    repo.update_section(section_id, &updates)
        .map_err(ServiceError::from)
}

pub fn remove_section<R>(repo: &R, user: &AuthenticatedUser, section_id: i32) -> ServiceResult<()>
where
    R: AccessReader + SectionWriter + ?Sized,
{
    let entity = EntityRef::Section(section_id);
    authorize(repo, &user.sub, entity, MENU_EDITORS)?;

    let removal = repo
        .delete_section(section_id)
        .map_err(ServiceError::from)?;
    removed(entity, removal)
}

pub fn add_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    section_id: i32,
    form: AddItemForm,
) -> ServiceResult<MenuItem>
where
    R: AccessReader + ItemWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Section(section_id), MENU_EDITORS)?;

    let new_item = form.into_new_item(section_id).map_err(form_error)?;
    repo.create_item(&new_item).map_err(ServiceError::from)
}

pub fn modify_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
    form: EditItemForm,
) -> ServiceResult<MenuItem>
where
    R: AccessReader + ItemWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Item(item_id), MENU_EDITORS)?;

    let updates = form.into_update_item().map_err(form_error)?;
    repo.update_item(item_id, &updates)
        .map_err(ServiceError::from)
}

pub fn remove_item<R>(repo: &R, user: &AuthenticatedUser, item_id: i32) -> ServiceResult<()>
where
    R: AccessReader + ItemWriter + ?Sized,
{
    let entity = EntityRef::Item(item_id);
    authorize(repo, &user.sub, entity, MENU_EDITORS)?;

    let removal = repo.delete_item(item_id).map_err(ServiceError::from)?;
    removed(entity, removal)
}

pub fn add_modifier<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
    form: AddModifierForm,
) -> ServiceResult<Modifier>
where
    R: AccessReader + ModifierWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Item(item_id), MENU_EDITORS)?;

    let new_modifier = form.into_new_modifier(item_id).map_err(form_error)?;
    repo.create_modifier(&new_modifier)
        .map_err(ServiceError::from)
}

pub fn modify_modifier<R>(
    repo: &R,
    user: &AuthenticatedUser,
    modifier_id: i32,
    form: EditModifierForm,
) -> ServiceResult<Modifier>
where
    R: AccessReader + ModifierWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Modifier(modifier_id), MENU_EDITORS)?;

    let updates = form.into_update_modifier().map_err(form_error)?;
    repo.update_modifier(modifier_id, &updates)
        .map_err(ServiceError::from)
}

pub fn remove_modifier<R>(repo: &R, user: &AuthenticatedUser, modifier_id: i32) -> ServiceResult<()>
where
    R: AccessReader + ModifierWriter + ?Sized,
{
    let entity = EntityRef::Modifier(modifier_id);
    authorize(repo, &user.sub, entity, MENU_EDITORS)?;

    let removal = repo
        .delete_modifier(modifier_id)
        .map_err(ServiceError::from)?;
    removed(entity, removal)
}
