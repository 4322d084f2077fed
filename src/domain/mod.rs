//! Domain - Static Page Content
//!
//! Author-supplied content tables. Text fields are translation keys resolved
//! through the language store at render time; everything else (numbers,
//! names, URLs) is the same in both languages.

pub mod about;
pub mod client;
pub mod contact;
pub mod hero;
pub mod project;
pub mod service;
pub mod testimonial;

#[cfg(test)]
mod tests {
    use crate::i18n::{Locale, lookup};

    fn content_keys() -> Vec<&'static str> {
        let mut keys = Vec::new();
        keys.extend(super::hero::STATS.iter().map(|s| s.label_key));
        keys.extend(super::hero::BADGES.iter().map(|s| s.label_key));
        for value in super::about::VALUES {
            keys.push(value.title_key);
            keys.push(value.desc_key);
        }
        keys.extend(super::about::ACHIEVEMENTS.iter().map(|a| a.label_key));
        keys.extend(super::about::REASONS.iter().copied());
        for project in super::project::PROJECTS {
            keys.push(project.title_key);
            keys.push(project.category_key);
        }
        for service in super::service::SERVICES {
            keys.push(service.title_key);
            keys.push(service.desc_key);
        }
        keys.extend(super::service::PROCESS_STEPS.iter().copied());
        for testimonial in super::testimonial::TESTIMONIALS {
            keys.push(testimonial.content_key);
            keys.push(testimonial.position_key);
        }
        keys.extend(super::contact::CONTACT_INFO.iter().map(|c| c.label_key));
        keys
    }

    #[test]
    fn test_content_keys_are_translated() {
        for key in content_keys() {
            for locale in Locale::ALL {
                assert!(lookup(locale, key).is_some(), "{key} missing for {}", locale.code());
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(super::project::PROJECTS.len(), 6);
        assert_eq!(super::service::SERVICES.len(), 6);
        assert_eq!(super::testimonial::TESTIMONIALS.len(), 3);
        assert!(super::service::FOOTER_SERVICE_COUNT <= super::service::SERVICES.len());
    }
}
