//! Contact details and social links

/// Which icon a contact row uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

/// A contact row
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub kind: ContactKind,
    pub label_key: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

/// A social profile link
#[derive(Debug, Clone, Copy)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        kind: ContactKind::Email,
        label_key: "contact.info.email",
        value: "hello@ahmadfaizal.my",
        href: "mailto:hello@ahmadfaizal.my",
    },
    ContactInfo {
        kind: ContactKind::Phone,
        label_key: "contact.info.phone",
        value: "+60 12-345 6789",
        href: "https://wa.me/60123456789",
    },
    ContactInfo {
        kind: ContactKind::Location,
        label_key: "contact.info.location",
        value: "Kuala Lumpur, Malaysia",
        href: "#",
    },
];

pub const WHATSAPP_URL: &str = "https://wa.me/60123456789";

/// Socials listed beside the contact form
pub const CONTACT_SOCIALS: &[Social] = &[
    Social { name: "LinkedIn", href: "#" },
    Social { name: "Instagram", href: "#" },
    Social { name: "Behance", href: "#" },
    Social { name: "Dribbble", href: "#" },
];

/// Socials listed in the footer
pub const FOOTER_SOCIALS: &[Social] = &[
    Social { name: "LinkedIn", href: "#" },
    Social { name: "Instagram", href: "#" },
    Social { name: "Behance", href: "#" },
    Social { name: "Twitter", href: "#" },
];

impl Social {
    /// Whether the link points anywhere yet
    pub fn is_placeholder(&self) -> bool {
        self.href == "#"
    }
}
