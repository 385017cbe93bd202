//! Scroller backed by egui's `scroll_to_me`, consumed while laying out sections.

use std::time::{Duration, Instant};

use policy_core::{ScrollRequest, Scroller};
use shared::domain::SectionId;

/// How long viewport sync stays off after a programmatic scroll, so the
/// animation does not flip the active button mid-flight.
pub const SETTLE_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Default)]
pub struct EguiScroller {
    pending: Option<ScrollRequest>,
    settle_until: Option<Instant>,
}

impl EguiScroller {
    /// Takes the pending request if it targets `id`.
    pub fn take_for(&mut self, id: SectionId) -> Option<ScrollRequest> {
        match self.pending {
            Some(request) if request.target == id => self.pending.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<ScrollRequest> {
        self.pending
    }

    pub fn sync_allowed(&self, now: Instant) -> bool {
        self.pending.is_none() && self.settle_until.is_none_or(|until| now >= until)
    }

    fn request_at(&mut self, request: ScrollRequest, now: Instant) {
        self.pending = Some(request);
        self.settle_until = Some(now + SETTLE_DURATION);
    }
}

impl Scroller for EguiScroller {
    fn scroll_to(&mut self, request: ScrollRequest) {
        self.request_at(request, Instant::now());
    }
}
