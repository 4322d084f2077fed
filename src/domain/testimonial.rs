//! Client testimonials

/// A client quote
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub position_key: &'static str,
    pub content_key: &'static str,
    /// Stars out of five
    pub rating: u8,
    pub avatar_url: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dato' Seri Ahmad Razali",
        position_key: "testimonials.1.position",
        content_key: "testimonials.1.content",
        rating: 5,
        avatar_url: "https://randomuser.me/api/portraits/men/42.jpg",
    },
    Testimonial {
        name: "Puan Siti Nurhaliza",
        position_key: "testimonials.2.position",
        content_key: "testimonials.2.content",
        rating: 5,
        avatar_url: "https://randomuser.me/api/portraits/women/65.jpg",
    },
    Testimonial {
        name: "Encik Muhammad Hafiz",
        position_key: "testimonials.3.position",
        content_key: "testimonials.3.content",
        rating: 5,
        avatar_url: "https://randomuser.me/api/portraits/men/32.jpg",
    },
];

impl Testimonial {
    /// Filled stars for the rating, capped at five
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(TESTIMONIALS[0].stars(), "★★★★★");
        let over = Testimonial { rating: 9, ..TESTIMONIALS[0] };
        assert_eq!(over.stars().chars().count(), 5);
    }

    #[test]
    fn test_positions_follow_the_locale() {
        use crate::i18n::{Locale, t};

        let position = TESTIMONIALS[1].position_key;
        assert_eq!(t(Locale::Bm, position).as_ref(), "Pengarah Pemasaran, Seri Angkasa");
        assert_eq!(t(Locale::En, position).as_ref(), "Marketing Director, Seri Angkasa");
    }
}
