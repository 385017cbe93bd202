//! UI/backend events and error modeling for desktop GUI controller.

use policy_core::{FormEffect, FormError};
use shared::{error::ForwardingError, protocol::Notification};

pub enum UiEvent {
    ContactForwarded(Result<Vec<FormEffect>, ForwardingError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Queue,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_form_error(error: &FormError) -> Self {
        let category = match error {
            FormError::Validation(_) => UiErrorCategory::Validation,
            FormError::Forwarding(_) => UiErrorCategory::Transport,
        };
        Self {
            category,
            message: error.notification().message,
        }
    }

    pub fn queue(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Queue,
            message: message.into(),
        }
    }

    /// Whether sending the same input again may succeed without edits.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category,
            UiErrorCategory::Transport | UiErrorCategory::Queue
        )
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_notification(self) -> Notification {
        Notification::error(self.message)
    }
}

#[cfg(test)]
mod tests {
    use shared::{
        domain::FormField,
        error::{FieldIssue, FieldProblem, ValidationError},
    };

    use super::*;

    #[test]
    fn validation_errors_need_edits_before_retry() {
        let error = FormError::Validation(ValidationError {
            issues: vec![FieldIssue {
                field: FormField::Email,
                problem: FieldProblem::Malformed,
            }],
        });
        let ui_error = UiError::from_form_error(&error);
        assert_eq!(ui_error.category(), UiErrorCategory::Validation);
        assert!(!ui_error.is_retryable());
        assert!(ui_error.message().contains("email"));
    }

    #[test]
    fn forwarding_errors_are_retryable() {
        let error = FormError::Forwarding(ForwardingError::new("timeout"));
        let ui_error = UiError::from_form_error(&error);
        assert_eq!(ui_error.category(), UiErrorCategory::Transport);
        assert!(ui_error.is_retryable());
        assert!(!ui_error.into_notification().is_success());
    }
}
