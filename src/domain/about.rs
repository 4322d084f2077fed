//! About section content

/// A core value card
#[derive(Debug, Clone, Copy)]
pub struct CoreValue {
    pub icon: &'static str,
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

/// A milestone figure
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub number: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
}

pub const VALUES: &[CoreValue] = &[
    CoreValue { icon: "◆", title_key: "about.values.1.title", desc_key: "about.values.1.desc" },
    CoreValue { icon: "◇", title_key: "about.values.2.title", desc_key: "about.values.2.desc" },
    CoreValue { icon: "○", title_key: "about.values.3.title", desc_key: "about.values.3.desc" },
    CoreValue { icon: "□", title_key: "about.values.4.title", desc_key: "about.values.4.desc" },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { number: "2016", label_key: "about.achievements.started", icon: "🚀" },
    Achievement { number: "50+", label_key: "about.achievements.global", icon: "🌏" },
    Achievement { number: "3x", label_key: "about.achievements.growth", icon: "📈" },
];

/// "Why work with me" bullet keys
pub const REASONS: &[&str] = &["about.why.1", "about.why.2", "about.why.3"];

/// Secondary portrait for the about card
pub const PORTRAIT_URL: &str =
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=600&h=750&fit=crop&crop=face";
