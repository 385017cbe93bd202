use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Contact,
    Shipping,
    Terms,
    Refunds,
    Privacy,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Contact,
        SectionId::Shipping,
        SectionId::Terms,
        SectionId::Refunds,
        SectionId::Privacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Contact => "contact",
            SectionId::Shipping => "shipping",
            SectionId::Terms => "terms",
            SectionId::Refunds => "refunds",
            SectionId::Privacy => "privacy",
        }
    }

    /// Exact match against the fixed id set; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        SECTIONS[self.position()].label
    }

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn first() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

pub static SECTIONS: [Section; 5] = [
    Section {
        id: SectionId::Contact,
        label: "Contact Us",
    },
    Section {
        id: SectionId::Shipping,
        label: "Shipping Policy",
    },
    Section {
        id: SectionId::Terms,
        label: "Terms & Conditions",
    },
    Section {
        id: SectionId::Refunds,
        label: "Cancellations & Refunds",
    },
    Section {
        id: SectionId::Privacy,
        label: "Privacy Policy",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
