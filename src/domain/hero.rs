//! Hero banner content

/// Headline statistic
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub number: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
}

/// Profile photo shown beside the intro
pub const PROFILE_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=500&h=667&fit=crop&crop=face";

/// Stats under the call-to-action buttons
pub const STATS: &[Stat] = &[
    Stat { number: "8+", label_key: "hero.stats.experience", icon: "📅" },
    Stat { number: "150+", label_key: "hero.stats.projects", icon: "📁" },
    Stat { number: "80+", label_key: "hero.stats.clients", icon: "👥" },
    Stat { number: "12", label_key: "hero.stats.awards", icon: "🏅" },
];

/// Floating badges on the photo
pub const BADGES: &[Stat] = &[
    Stat { number: "12", label_key: "hero.badge.awards", icon: "🏆" },
    Stat { number: "98%", label_key: "hero.badge.satisfaction", icon: "⭐" },
];
