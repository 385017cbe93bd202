use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    /// The request body could not be read as a contact submission.
    InvalidRequest,
    Forwarding,
    NotFound,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FormField>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self {
            code: ErrorCode::Validation,
            message: value.to_string(),
            fields: value.fields(),
        }
    }
}

impl From<ForwardingError> for ApiError {
    fn from(value: ForwardingError) -> Self {
        Self::new(ErrorCode::Forwarding, value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Missing,
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub problem: FieldProblem,
}

/// Every problem found in one pass over the form, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<FormField> {
        self.issues.iter().map(|issue| issue.field).collect()
    }

    pub fn cites(&self, field: FormField) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

fn fields_with(issues: &[FieldIssue], problem: FieldProblem) -> Vec<FormField> {
    issues
        .iter()
        .filter(|issue| issue.problem == problem)
        .map(|issue| issue.field)
        .collect()
}

fn describe_issues(issues: &[FieldIssue]) -> String {
    let mut parts = Vec::new();
    let missing = fields_with(issues, FieldProblem::Missing);
    if !missing.is_empty() {
        parts.push(format!("missing required field(s): {}", FieldList(&missing)));
    }
    let malformed = fields_with(issues, FieldProblem::Malformed);
    if !malformed.is_empty() {
        parts.push(format!("malformed field(s): {}", FieldList(&malformed)));
    }
    parts.join("; ")
}

struct FieldList<'a>(&'a [FormField]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission could not be delivered: {reason}")]
pub struct ForwardingError {
    pub reason: String,
}

impl ForwardingError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
