use super::*;

#[test]
fn catalog_follows_section_order() {
    let ids: Vec<SectionId> = CATALOG.iter().map(|content| content.id).collect();
    assert_eq!(ids, SectionId::ALL.to_vec());
}

#[test]
fn only_contact_section_embeds_the_form() {
    for content in &CATALOG {
        let has_panel = content.blocks.contains(&Block::ContactPanel);
        assert_eq!(has_panel, content.id == SectionId::Contact, "{}", content.id);
    }
}

#[test]
fn every_section_opens_with_a_paragraph() {
    for content in &CATALOG {
        assert!(
            matches!(content.blocks.first(), Some(Block::Paragraph(_))),
            "{} should start with a paragraph",
            content.id
        );
    }
}

#[test]
fn support_email_inline_resolves_to_company_mailbox() {
    assert_eq!(Inline::SupportEmail.text(), SUPPORT_EMAIL);
    let email_detail = COMPANY_DETAILS
        .iter()
        .find(|detail| detail.label == "Email")
        .expect("email detail");
    assert_eq!(email_detail.value, SUPPORT_EMAIL);
}

#[test]
fn content_for_returns_matching_section() {
    for id in SectionId::ALL {
        assert_eq!(content_for(id).id, id);
        assert_eq!(content_for(id).title(), id.label());
    }
}
