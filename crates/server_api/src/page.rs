//! Server-side rendering of the Policy Center page.

use askama::Template;
use chrono::{Datelike, NaiveDate};
use policy_core::{NavigationController, ScrollRequest, Scroller};
use shared::{
    catalog::{
        Block, CompanyDetail, Inline, SectionContent, BRAND, CATALOG, COMPANY_DETAILS,
        PAGE_TITLE, TAGLINE,
    },
    domain::{Section, SectionId, SECTIONS},
    protocol::contact_route,
};

/// Remembers the last scroll request so the page can replay it once loaded.
#[derive(Debug, Default)]
pub struct InitialScroll {
    target: Option<SectionId>,
}

impl InitialScroll {
    pub fn target(&self) -> Option<SectionId> {
        self.target
    }
}

impl Scroller for InitialScroll {
    fn scroll_to(&mut self, request: ScrollRequest) {
        self.target = Some(request.target);
    }
}

#[derive(Template)]
#[template(path = "policy_center.html")]
pub struct PolicyCenterPage<'a> {
    pub title: &'a str,
    pub tagline: &'a str,
    pub brand: &'a str,
    pub sections: &'a [Section],
    pub catalog: &'a [SectionContent],
    pub company: &'a [CompanyDetail],
    pub active: SectionId,
    /// Empty when the page opens at the top.
    pub initial_scroll: &'a str,
    pub last_updated: String,
    pub year: i32,
    pub contact_route: &'a str,
}

/// Renders the page with `requested` preselected. Unknown ids fall back to the
/// default section and no initial scroll.
pub fn render_policy_center(
    requested: Option<&str>,
    today: NaiveDate,
) -> Result<String, askama::Error> {
    let mut navigation = NavigationController::new(InitialScroll::default());
    if let Some(raw) = requested {
        navigation.select_section(raw);
    }
    let active = navigation.active();
    let initial_scroll = navigation
        .into_scroller()
        .target()
        .map(SectionId::as_str)
        .unwrap_or_default();

    PolicyCenterPage {
        title: PAGE_TITLE,
        tagline: TAGLINE,
        brand: BRAND,
        sections: &SECTIONS,
        catalog: &CATALOG,
        company: &COMPANY_DETAILS,
        active,
        initial_scroll,
        last_updated: today.format("%B %-d, %Y").to_string(),
        year: today.year(),
        contact_route: contact_route(),
    }
    .render()
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
