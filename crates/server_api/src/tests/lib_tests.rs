use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use policy_core::SubmissionSink;
use shared::{
    domain::{FormField, SectionId},
    error::{ErrorCode, ForwardingError},
    protocol::{ContactSubmission, NotificationKind},
};

use super::*;

#[derive(Default)]
struct CountingSink {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl SubmissionSink for CountingSink {
    async fn forward(&self, _submission: &ContactSubmission) -> Result<(), ForwardingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ForwardingError::new("mail relay unavailable"))
        } else {
            Ok(())
        }
    }
}

fn context(sink: Arc<CountingSink>) -> ApiContext {
    ApiContext {
        contact: ContactFormHandler::new(sink),
    }
}

fn valid_fields() -> ContactFields {
    ContactFields {
        name: "A".into(),
        email: "a@b.com".into(),
        phone: String::new(),
        message: "hi".into(),
    }
}

#[test]
fn sections_are_listed_in_page_order() {
    let ids: Vec<SectionId> = list_sections().iter().map(|section| section.id).collect();
    assert_eq!(ids, SectionId::ALL.to_vec());
}

#[tokio::test]
async fn successful_submission_returns_success_notification() {
    let sink = Arc::new(CountingSink::default());
    let ctx = context(sink.clone());

    let response = submit_contact(&ctx, &valid_fields()).await.expect("submit");

    assert_eq!(response.notification.kind, NotificationKind::Success);
    assert_eq!(response.notification, ctx.contact.success_notification());
    assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn validation_failure_maps_to_validation_code_with_fields() {
    let sink = Arc::new(CountingSink::default());
    let ctx = context(sink.clone());
    let fields = ContactFields {
        email: "not-an-email".into(),
        ..valid_fields()
    };

    let error = submit_contact(&ctx, &fields).await.expect_err("should fail");

    assert_eq!(error.code, ErrorCode::Validation);
    assert_eq!(error.fields, vec![FormField::Email]);
    assert_eq!(sink.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn forwarding_failure_maps_to_forwarding_code() {
    let sink = Arc::new(CountingSink {
        calls: AtomicUsize::new(0),
        fail: true,
    });
    let ctx = context(sink);

    let error = submit_contact(&ctx, &valid_fields())
        .await
        .expect_err("should fail");

    assert_eq!(error.code, ErrorCode::Forwarding);
    assert!(error.message.contains("mail relay unavailable"));
    assert!(error.fields.is_empty());
}
