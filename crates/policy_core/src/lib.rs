//! Interaction core shared by the web and desktop renderers.

pub mod contact;
pub mod navigation;
pub mod sink;

pub use contact::{
    validate, ContactForm, ContactFormHandler, FormEffect, FormError, SubmissionPhase,
    DEFAULT_RESPONSE_WINDOW,
};
pub use navigation::{
    most_visible, NavigationController, ScrollAlign, ScrollBehavior, ScrollRequest, Scroller,
    SectionVisibility,
};
pub use sink::{HttpSink, LogSink, SubmissionSink};
