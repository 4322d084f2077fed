//! Portfolio projects

/// Grid footprint of a project tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    /// Two columns wide, tall
    Large,
    /// One column, standard height
    Medium,
    /// One column, square
    Small,
}

impl TileSize {
    /// Columns spanned in the three-column grid
    pub fn columns(self) -> u16 {
        match self {
            TileSize::Large => 2,
            TileSize::Medium | TileSize::Small => 1,
        }
    }

    /// Tile height in pixels
    pub fn height(self) -> f32 {
        match self {
            TileSize::Large => 360.0,
            TileSize::Medium => 300.0,
            TileSize::Small => 240.0,
        }
    }
}

/// A portfolio entry
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title_key: &'static str,
    pub category_key: &'static str,
    /// Overlay tint, 0xRRGGBB
    pub accent: u32,
    pub image_url: &'static str,
    pub size: TileSize,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title_key: "portfolio.project1.title",
        category_key: "portfolio.project1.category",
        accent: 0xf59e0b,
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        size: TileSize::Large,
    },
    Project {
        title_key: "portfolio.project2.title",
        category_key: "portfolio.project2.category",
        accent: 0x8b5cf6,
        image_url: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=500&h=500&fit=crop",
        size: TileSize::Small,
    },
    Project {
        title_key: "portfolio.project3.title",
        category_key: "portfolio.project3.category",
        accent: 0x10b981,
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500&h=500&fit=crop",
        size: TileSize::Small,
    },
    Project {
        title_key: "portfolio.project4.title",
        category_key: "portfolio.project4.category",
        accent: 0xf43f5e,
        image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600&h=450&fit=crop",
        size: TileSize::Medium,
    },
    Project {
        title_key: "portfolio.project5.title",
        category_key: "portfolio.project5.category",
        accent: 0x3b82f6,
        image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=600&h=450&fit=crop",
        size: TileSize::Medium,
    },
    Project {
        title_key: "portfolio.project6.title",
        category_key: "portfolio.project6.category",
        accent: 0xd97706,
        image_url: "https://images.unsplash.com/photo-1558171813-4c088753af8f?w=800&h=600&fit=crop",
        size: TileSize::Large,
    },
];
