use std::sync::Arc;

use shared::{
    domain::FormField,
    error::{FieldIssue, FieldProblem, ForwardingError, ValidationError},
    protocol::{ContactFields, ContactSubmission, Notification},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::sink::SubmissionSink;

pub const DEFAULT_RESPONSE_WINDOW: &str = "24–48 hours";

const REQUIRED_FIELDS: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    Notify(Notification),
    ClearFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Forwarding(#[from] ForwardingError),
}

impl FormError {
    pub fn notification(&self) -> Notification {
        match self {
            FormError::Validation(error) => {
                Notification::error(format!("Please check the form: {error}."))
            }
            FormError::Forwarding(_) => Notification::error(
                "We couldn't send your message right now. Please try again in a moment.",
            ),
        }
    }

    pub fn cited_fields(&self) -> Vec<FormField> {
        match self {
            FormError::Validation(error) => error.fields(),
            FormError::Forwarding(_) => Vec::new(),
        }
    }
}

/// Checks required fields and the email shape, collecting every issue.
///
/// Values are forwarded exactly as entered; trimming only applies to the checks.
pub fn validate(fields: &ContactFields) -> Result<ContactSubmission, ValidationError> {
    let mut issues = Vec::new();
    for field in REQUIRED_FIELDS {
        let value = fields.get(field).trim();
        if value.is_empty() {
            issues.push(FieldIssue {
                field,
                problem: FieldProblem::Missing,
            });
        } else if field == FormField::Email && !has_address_shape(value) {
            issues.push(FieldIssue {
                field,
                problem: FieldProblem::Malformed,
            });
        }
    }

    if !issues.is_empty() {
        return Err(ValidationError { issues });
    }

    Ok(ContactSubmission {
        name: fields.name.clone(),
        email: fields.email.clone(),
        phone: fields.phone.clone(),
        message: fields.message.clone(),
    })
}

fn has_address_shape(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

#[derive(Clone)]
pub struct ContactFormHandler {
    sink: Arc<dyn SubmissionSink>,
    response_window: String,
}

impl ContactFormHandler {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            sink,
            response_window: DEFAULT_RESPONSE_WINDOW.to_string(),
        }
    }

    pub fn with_response_window(mut self, response_window: impl Into<String>) -> Self {
        self.response_window = response_window.into();
        self
    }

    pub fn response_window(&self) -> &str {
        &self.response_window
    }

    pub fn success_notification(&self) -> Notification {
        Notification::success(format!(
            "Thanks! We received your message and will respond within {}.",
            self.response_window
        ))
    }

    pub fn prepare(&self, fields: &ContactFields) -> Result<ContactSubmission, ValidationError> {
        validate(fields).inspect_err(|error| {
            info!(fields = ?error.fields(), "contact submission rejected");
        })
    }

    /// Forwards once. Effects come back only after the sink accepted the
    /// submission: notify first, then clear.
    pub async fn deliver(
        &self,
        submission: ContactSubmission,
    ) -> Result<Vec<FormEffect>, ForwardingError> {
        if let Err(error) = self.sink.forward(&submission).await {
            warn!(%error, "contact submission forwarding failed");
            return Err(error);
        }
        info!("contact submission forwarded");
        Ok(vec![
            FormEffect::Notify(self.success_notification()),
            FormEffect::ClearFields,
        ])
    }

    pub async fn submit(&self, fields: &ContactFields) -> Result<Vec<FormEffect>, FormError> {
        let submission = self.prepare(fields)?;
        Ok(self.deliver(submission).await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Forwarding,
    Notified,
}

/// Renderer-side form state: current input plus the outcome of the last submit.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    phase: SubmissionPhase,
    notification: Option<Notification>,
    rejection: Option<FormError>,
    /// Input as it was when the in-flight submission was taken.
    submitted: Option<ContactFields>,
}

impl ContactForm {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_forwarding(&self) -> bool {
        self.phase == SubmissionPhase::Forwarding
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn rejection(&self) -> Option<&FormError> {
        self.rejection.as_ref()
    }

    pub fn is_cited(&self, field: FormField) -> bool {
        self.rejection
            .as_ref()
            .is_some_and(|error| error.cited_fields().contains(&field))
    }

    /// Validates the current input. `None` means nothing should be forwarded:
    /// either a submission is already in flight or the input was rejected.
    pub fn begin_submit(&mut self, handler: &ContactFormHandler) -> Option<ContactSubmission> {
        if self.is_forwarding() {
            return None;
        }
        self.phase = SubmissionPhase::Validating;
        self.notification = None;
        self.rejection = None;

        match handler.prepare(&self.fields) {
            Ok(submission) => {
                self.phase = SubmissionPhase::Forwarding;
                self.submitted = Some(self.fields.clone());
                Some(submission)
            }
            Err(error) => {
                self.reject(error.into());
                None
            }
        }
    }

    /// Applies the forwarding outcome. Input edited after `begin_submit` was
    /// never forwarded, so `ClearFields` leaves it in place.
    pub fn finish_submit(&mut self, result: Result<Vec<FormEffect>, ForwardingError>) {
        let submitted = self.submitted.take();
        match result {
            Ok(effects) => {
                for effect in effects {
                    self.apply(effect, submitted.as_ref());
                }
                self.phase = SubmissionPhase::Notified;
            }
            Err(error) => self.reject(error.into()),
        }
    }

    /// Runs the whole flow in one await and reports the phase it ended in.
    pub async fn submit_with(
        &mut self,
        handler: &ContactFormHandler,
    ) -> Result<SubmissionPhase, FormError> {
        let Some(submission) = self.begin_submit(handler) else {
            return match self.rejection.clone() {
                Some(error) => Err(error),
                None => Ok(self.phase),
            };
        };
        let result = handler.deliver(submission).await;
        self.finish_submit(result);
        match &self.rejection {
            Some(error) => Err(error.clone()),
            None => Ok(self.phase),
        }
    }

    fn apply(&mut self, effect: FormEffect, submitted: Option<&ContactFields>) {
        match effect {
            FormEffect::Notify(notification) => self.notification = Some(notification),
            FormEffect::ClearFields => {
                if submitted.is_none_or(|sent| *sent == self.fields) {
                    self.fields.clear();
                }
            }
        }
    }

    fn reject(&mut self, error: FormError) {
        self.phase = SubmissionPhase::Idle;
        self.notification = Some(error.notification());
        self.rejection = Some(error);
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
