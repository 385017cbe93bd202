//! Static page content: section bodies and company details.
//!
//! Renderers walk these blocks; nothing here is computed at runtime.

use crate::domain::SectionId;

pub const BRAND: &str = "VidyaKumbh";
pub const PAGE_TITLE: &str = "Vidyakumbh – Policy Center";
pub const TAGLINE: &str = "Transparency and trust for our learners";
pub const SUPPORT_EMAIL: &str = "balmukundmishra352@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    Emphasis(&'static str),
    /// Link to the support mailbox.
    SupportEmail,
}

impl Inline {
    pub fn text(&self) -> &'static str {
        match self {
            Inline::Text(text) | Inline::Strong(text) | Inline::Emphasis(text) => text,
            Inline::SupportEmail => SUPPORT_EMAIL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    pub lead: Option<&'static str>,
    pub body: &'static [Inline],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static [Inline]),
    Heading(&'static str),
    List(&'static [ListItem]),
    Note(&'static str),
    /// The contact form together with the company details card.
    ContactPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionContent {
    pub id: SectionId,
    pub blocks: &'static [Block],
}

impl SectionContent {
    pub fn title(&self) -> &'static str {
        self.id.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub static COMPANY_DETAILS: [CompanyDetail; 5] = [
    CompanyDetail {
        label: "Brand",
        value: BRAND,
    },
    CompanyDetail {
        label: "Email",
        value: SUPPORT_EMAIL,
    },
    CompanyDetail {
        label: "Phone",
        value: "+91-9693732524",
    },
    CompanyDetail {
        label: "Address",
        value: "Vil Suarchhap PS Lauria PO Birti Matiariya, West Champaran, Bihar, India, 845453",
    },
    CompanyDetail {
        label: "Hours",
        value: "Mon–Fri, 10:00–18:00 IST",
    },
];

const fn item(body: &'static [Inline]) -> ListItem {
    ListItem { lead: None, body }
}

const fn led(lead: &'static str, body: &'static [Inline]) -> ListItem {
    ListItem {
        lead: Some(lead),
        body,
    }
}

const CONTACT: &[Block] = &[
    Block::Paragraph(&[Inline::Text(
        "Have questions about your course, account, or payment? Reach us using the form \
         below or via the details provided. Our typical response time is 24–48 business hours.",
    )]),
    Block::ContactPanel,
];

const SHIPPING: &[Block] = &[
    Block::Paragraph(&[
        Inline::Text("VidyaKumbh provides "),
        Inline::Strong("digital products and services"),
        Inline::Text(
            " such as online courses, downloadable resources, and memberships. As no physical \
             goods are shipped, this Shipping Policy clarifies how and when you receive access \
             to your purchases.",
        ),
    ]),
    Block::List(&[
        led(
            "Delivery Method:",
            &[Inline::Text("Instant online access via your VidyaKumbh account.")],
        ),
        led(
            "Delivery Time:",
            &[Inline::Text(
                "Typically immediate after successful payment. If delayed, access is granted \
                 within 24 hours.",
            )],
        ),
        led(
            "Non-Delivery:",
            &[
                Inline::Text("If you do not receive access within 24 hours, please contact "),
                Inline::SupportEmail,
                Inline::Text("."),
            ],
        ),
        led(
            "Geographic Availability:",
            &[Inline::Text(
                "Courses are available globally unless restricted by law.",
            )],
        ),
        led(
            "Fees:",
            &[Inline::Text(
                "No shipping or handling fees apply to digital items.",
            )],
        ),
    ]),
    Block::Note(
        "If you also sell physical goods, add your carrier, timelines, fees, and tracking rules here.",
    ),
];

const TERMS: &[Block] = &[
    Block::Paragraph(&[Inline::Text(
        "These Terms govern your use of VidyaKumbh (\"we\", \"us\", \"our\") and the purchase of \
         our courses and services. By accessing our website or enrolling in a course, you agree \
         to these Terms.",
    )]),
    Block::Heading("Accounts"),
    Block::List(&[
        item(&[Inline::Text(
            "You must provide accurate information and keep your credentials secure.",
        )]),
        item(&[Inline::Text(
            "You are responsible for all activities under your account.",
        )]),
    ]),
    Block::Heading("License & Use"),
    Block::List(&[
        item(&[Inline::Text(
            "Upon purchase, you receive a personal, non-transferable license to access content.",
        )]),
        item(&[Inline::Text(
            "Redistribution, resale, or public posting of course materials is prohibited without \
             prior written consent.",
        )]),
    ]),
    Block::Heading("Payments & Taxes"),
    Block::List(&[
        item(&[Inline::Text(
            "Prices are shown in INR unless stated otherwise and may include applicable taxes/fees.",
        )]),
        item(&[Inline::Text(
            "We use secure third-party processors; you agree to their terms when paying.",
        )]),
    ]),
    Block::Heading("Intellectual Property"),
    Block::Paragraph(&[Inline::Text(
        "All content, trademarks, and logos are owned by VidyaKumbh or its licensors.",
    )]),
    Block::Heading("Prohibited Conduct"),
    Block::List(&[item(&[Inline::Text(
        "No unlawful use, harassment, cheating, scraping, or attempts to bypass access controls.",
    )])]),
    Block::Heading("Limitation of Liability"),
    Block::Paragraph(&[Inline::Text(
        "To the maximum extent permitted by law, VidyaKumbh will not be liable for indirect, \
         incidental, or consequential damages arising from your use of the services.",
    )]),
    Block::Heading("Changes"),
    Block::Paragraph(&[Inline::Text(
        "We may update these Terms from time to time. Continued use constitutes acceptance.",
    )]),
    Block::Heading("Contact"),
    Block::Paragraph(&[
        Inline::Text("Questions about these Terms? Email "),
        Inline::SupportEmail,
        Inline::Text("."),
    ]),
];

const REFUNDS: &[Block] = &[
    Block::Paragraph(&[Inline::Text(
        "We want you to be satisfied with your learning experience. This policy explains when \
         cancellations or refunds may apply.",
    )]),
    Block::Heading("Digital Courses"),
    Block::List(&[
        led(
            "7-Day Refund Window:",
            &[
                Inline::Text("If you have completed "),
                Inline::Emphasis("less than 20%"),
                Inline::Text(
                    " of a course, you may request a refund within 7 days of purchase.",
                ),
            ],
        ),
        led(
            "Non-Refundable:",
            &[Inline::Text(
                "Certificates, downloadable assets, and fully completed courses are non-refundable.",
            )],
        ),
    ]),
    Block::Heading("Subscriptions/Memberships"),
    Block::List(&[item(&[Inline::Text(
        "Cancel anytime from your account settings. Access continues until the end of the \
         billing period.",
    )])]),
    Block::Heading("How to Request"),
    Block::Paragraph(&[
        Inline::Text("Email "),
        Inline::SupportEmail,
        Inline::Text(
            " with your order ID and reason. Approved refunds are issued to the original payment \
             method within 7–10 business days.",
        ),
    ]),
];

const PRIVACY: &[Block] = &[
    Block::Paragraph(&[Inline::Text(
        "Your privacy is important to us. This Privacy Policy explains what data we collect, how \
         we use it, and your rights. By using VidyaKumbh you agree to this Policy.",
    )]),
    Block::Heading("Information We Collect"),
    Block::List(&[
        led(
            "Account Data:",
            &[Inline::Text(
                "name, email, phone, password (hashed), preferences.",
            )],
        ),
        led(
            "Payment Data:",
            &[Inline::Text(
                "handled by payment processors; we store limited metadata (e.g., transaction ID).",
            )],
        ),
        led(
            "Usage Data:",
            &[Inline::Text(
                "pages visited, device, browser, IP address, and cookies for analytics and security.",
            )],
        ),
        led(
            "Communications:",
            &[Inline::Text(
                "messages you send to support or instructors.",
            )],
        ),
    ]),
    Block::Heading("How We Use Information"),
    Block::List(&[
        item(&[Inline::Text("Provide and improve courses and features.")]),
        item(&[Inline::Text("Process payments and prevent fraud.")]),
        item(&[Inline::Text(
            "Send administrative emails and, with consent, marketing updates.",
        )]),
        item(&[Inline::Text(
            "Comply with legal obligations and enforce our Terms.",
        )]),
    ]),
    Block::Heading("Cookies & Tracking"),
    Block::Paragraph(&[Inline::Text(
        "We use essential cookies for login and security and optional analytics cookies to \
         improve the site. You can control cookies via your browser settings.",
    )]),
    Block::Heading("Data Sharing"),
    Block::List(&[
        item(&[Inline::Text(
            "Service providers (hosting, analytics, payment processing) under confidentiality \
             obligations.",
        )]),
        item(&[Inline::Text(
            "Legal compliance or to protect rights, property, and safety.",
        )]),
    ]),
    Block::Heading("Data Retention"),
    Block::Paragraph(&[Inline::Text(
        "We retain data for as long as your account is active or as needed to provide services \
         and meet legal obligations.",
    )]),
    Block::Heading("Your Rights"),
    Block::List(&[
        item(&[Inline::Text("Access, correct, or delete your personal data.")]),
        item(&[Inline::Text("Opt out of marketing communications.")]),
        item(&[Inline::Text("Request data export (where applicable).")]),
    ]),
    Block::Heading("Children"),
    Block::Paragraph(&[Inline::Text(
        "Our services are not directed to children under 13. If you believe a child provided \
         data, contact us to delete it.",
    )]),
    Block::Heading("International Transfers"),
    Block::Paragraph(&[Inline::Text(
        "Data may be processed outside your country with appropriate safeguards.",
    )]),
    Block::Heading("Contact"),
    Block::Paragraph(&[
        Inline::Text("For privacy questions, contact our Data Protection Officer at "),
        Inline::SupportEmail,
        Inline::Text("."),
    ]),
];

pub static CATALOG: [SectionContent; 5] = [
    SectionContent {
        id: SectionId::Contact,
        blocks: CONTACT,
    },
    SectionContent {
        id: SectionId::Shipping,
        blocks: SHIPPING,
    },
    SectionContent {
        id: SectionId::Terms,
        blocks: TERMS,
    },
    SectionContent {
        id: SectionId::Refunds,
        blocks: REFUNDS,
    },
    SectionContent {
        id: SectionId::Privacy,
        blocks: PRIVACY,
    },
];

pub fn content_for(id: SectionId) -> &'static SectionContent {
    &CATALOG[id.position()]
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
