//! Services and work process

/// An offered service
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: &'static str,
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service { icon: "🎨", title_key: "services.1.title", desc_key: "services.1.desc" },
    Service { icon: "📱", title_key: "services.2.title", desc_key: "services.2.desc" },
    Service { icon: "💻", title_key: "services.3.title", desc_key: "services.3.desc" },
    Service { icon: "📊", title_key: "services.4.title", desc_key: "services.4.desc" },
    Service { icon: "✍️", title_key: "services.5.title", desc_key: "services.5.desc" },
    Service { icon: "💡", title_key: "services.6.title", desc_key: "services.6.desc" },
];

/// Process step keys, in order
pub const PROCESS_STEPS: &[&str] = &[
    "services.process.1",
    "services.process.2",
    "services.process.3",
    "services.process.4",
    "services.process.5",
];

/// How many services the footer lists
pub const FOOTER_SERVICE_COUNT: usize = 4;
