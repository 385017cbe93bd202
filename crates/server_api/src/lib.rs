use policy_core::{ContactFormHandler, FormEffect, FormError};
use shared::{
    domain::{Section, SECTIONS},
    error::ApiError,
    protocol::{ContactFields, ContactResponse},
};
use tracing::debug;

pub mod page;

pub use page::{render_policy_center, InitialScroll, PolicyCenterPage};

#[derive(Clone)]
pub struct ApiContext {
    pub contact: ContactFormHandler,
}

pub fn list_sections() -> Vec<Section> {
    SECTIONS.to_vec()
}

/// Validates and forwards one submission. The success notification is taken
/// from the handler's effects so the response matches what a local form shows.
pub async fn submit_contact(
    ctx: &ApiContext,
    fields: &ContactFields,
) -> Result<ContactResponse, ApiError> {
    let effects = ctx.contact.submit(fields).await.map_err(|error| match error {
        FormError::Validation(error) => ApiError::from(error),
        FormError::Forwarding(error) => ApiError::from(error),
    })?;

    let notification = effects
        .into_iter()
        .find_map(|effect| match effect {
            FormEffect::Notify(notification) => Some(notification),
            FormEffect::ClearFields => None,
        })
        .unwrap_or_else(|| ctx.contact.success_notification());
    debug!(message = %notification.message, "contact submission acknowledged");
    Ok(ContactResponse { notification })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
