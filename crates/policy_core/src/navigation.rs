use shared::domain::SectionId;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Section top meets viewport top.
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: SectionId,
    pub align: ScrollAlign,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn smooth_to(target: SectionId) -> Self {
        Self {
            target,
            align: ScrollAlign::Start,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Viewport capability supplied by the renderer.
///
/// Implementations start the animation and return immediately. A request that
/// arrives while an earlier animation is still running replaces its target.
pub trait Scroller {
    fn scroll_to(&mut self, request: ScrollRequest);
}

impl<S: Scroller + ?Sized> Scroller for &mut S {
    fn scroll_to(&mut self, request: ScrollRequest) {
        (**self).scroll_to(request);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisibility {
    pub id: SectionId,
    /// Height of the section currently inside the viewport, in renderer units.
    pub visible_extent: f32,
}

/// Section with the largest visible extent; earlier sections win ties.
pub fn most_visible(visibility: &[SectionVisibility]) -> Option<SectionId> {
    let mut best: Option<SectionVisibility> = None;
    for candidate in visibility {
        if candidate.visible_extent.is_nan() || candidate.visible_extent <= 0.0 {
            continue;
        }
        best = match best {
            None => Some(*candidate),
            Some(current) => {
                let wins = candidate.visible_extent > current.visible_extent
                    || (candidate.visible_extent == current.visible_extent
                        && candidate.id.position() < current.id.position());
                if wins {
                    Some(*candidate)
                } else {
                    Some(current)
                }
            }
        };
    }
    best.map(|entry| entry.id)
}

pub struct NavigationController<S> {
    active: SectionId,
    scroller: S,
}

impl<S: Scroller> NavigationController<S> {
    pub fn new(scroller: S) -> Self {
        Self {
            active: SectionId::first(),
            scroller,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == id
    }

    /// Selects a section by its string id. Ids outside the fixed set are ignored.
    pub fn select_section(&mut self, raw_id: &str) {
        match SectionId::parse(raw_id) {
            Some(id) => self.select(id),
            None => debug!(section = raw_id, "ignoring navigation to unknown section"),
        }
    }

    /// Marks `id` active, then asks the renderer to scroll to it. Re-selecting
    /// the active section still scrolls.
    pub fn select(&mut self, id: SectionId) {
        self.active = id;
        self.scroller.scroll_to(ScrollRequest::smooth_to(id));
    }

    /// Follows organic scrolling. Never issues a scroll request.
    pub fn sync_with_viewport(&mut self, visibility: &[SectionVisibility]) -> bool {
        match most_visible(visibility) {
            Some(id) if id != self.active => {
                debug!(section = %id, "active section follows viewport");
                self.active = id;
                true
            }
            _ => false,
        }
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    pub fn into_scroller(self) -> S {
        self.scroller
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
