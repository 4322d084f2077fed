//! i18n - Internationalization Module
//!
//! Provides the translation table and the lookup used by [`I18nState`].
//! Every entry carries both the English and the Malay string, so a key can
//! never exist for one locale and be missing for the other.
//!
//! [`I18nState`]: crate::state::i18n_state::I18nState

use std::sync::{Mutex, OnceLock};

use ahash::{AHashMap, AHashSet};
use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    En,
    /// Bahasa Melayu
    #[default]
    Bm,
}

impl Locale {
    /// All locales in toggle order
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Bm];

    /// Language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bm => "bm",
        }
    }

    /// Label shown in the language switch
    pub fn short_label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Bm => "BM",
        }
    }

    /// The locale after this one in cyclic order
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

type Table = AHashMap<&'static str, (&'static str, &'static str)>;

/// Translation resources
static TRANSLATIONS: OnceLock<Table> = OnceLock::new();

/// Keys already reported as missing (debug builds only)
static REPORTED_MISSING: OnceLock<Mutex<AHashSet<String>>> = OnceLock::new();

/// Initialize translations (key -> (en, bm))
fn init_translations() -> Table {
    let mut map = AHashMap::new();

    // Navbar
    map.insert("nav.home", ("Home", "Utama"));
    map.insert("nav.about", ("About", "Tentang"));
    map.insert("nav.portfolio", ("Portfolio", "Portfolio"));
    map.insert("nav.services", ("Services", "Perkhidmatan"));
    map.insert("nav.contact", ("Contact", "Hubungi"));

    // Hero
    map.insert("hero.greeting", ("Assalamualaikum, I am", "Assalamualaikum, saya"));
    map.insert("hero.name", ("Ahmad Faizal", "Ahmad Faizal"));
    map.insert(
        "hero.title",
        ("Creative Director & Digital Strategist", "Pengarah Kreatif & Pakar Strategi Digital"),
    );
    map.insert(
        "hero.description",
        (
            "Transforming ideas into stunning digital experiences. Specializing in branding, UI/UX, and digital marketing that resonates with the Malaysian market.",
            "Mentransformasi idea kepada pengalaman digital yang memukau. Pakar dalam penjenamaan, UI/UX, dan pemasaran digital yang relevan dengan pasaran Malaysia.",
        ),
    );
    map.insert("hero.cta.work", ("View My Work", "Lihat Karya Saya"));
    map.insert("hero.cta.contact", ("Get In Touch", "Hubungi Saya"));
    map.insert("hero.stats.experience", ("Years Experience", "Tahun Pengalaman"));
    map.insert("hero.stats.projects", ("Projects Completed", "Projek Selesai"));
    map.insert("hero.stats.clients", ("Happy Clients", "Klien Berpuas Hati"));
    map.insert("hero.stats.awards", ("Awards Won", "Anugerah Dimenangi"));
    map.insert("hero.scroll", ("Scroll to explore", "Skrol untuk meneroka"));
    map.insert("hero.available", ("Available for Projects", "Tersedia untuk Projek"));
    map.insert("hero.badge.awards", ("Awards Won", "Anugerah"));
    map.insert("hero.badge.satisfaction", ("Satisfaction", "Kepuasan"));
    map.insert(
        "hero.trusted",
        ("✦ Trusted by leading Malaysian companies", "✦ Dipercayai oleh syarikat terkemuka Malaysia"),
    );

    // About
    map.insert("about.label", ("About Me", "Tentang Saya"));
    map.insert("about.title.1", ("Blending", "Menggabungkan"));
    map.insert("about.title.2", ("Creativity", "Kreativiti"));
    map.insert("about.title.3", ("with Strategy", "dengan Strategi"));
    map.insert(
        "about.description",
        (
            "With over 8 years of experience in the creative industry, I have helped more than 100 local and international brands build their digital identity. My approach combines Eastern aesthetics with modern design to create unique and memorable work.",
            "Dengan lebih 8 tahun pengalaman dalam industri kreatif, saya telah membantu lebih 100 jenama tempatan dan antarabangsa membina identiti digital mereka. Pendekatan saya menggabungkan estetika Timur dengan reka bentuk moden untuk menghasilkan karya yang unik dan berkesan.",
        ),
    );
    map.insert(
        "about.quote",
        ("Design is how it works.", "Reka bentuk adalah cara ia berfungsi."),
    );
    map.insert("about.values.title", ("Core Values", "Nilai Teras"));
    map.insert("about.values.1.title", ("Excellence", "Kecemerlangan"));
    map.insert(
        "about.values.1.desc",
        ("Every project is crafted to perfection", "Setiap projek dihasilkan dengan sempurna"),
    );
    map.insert("about.values.2.title", ("Innovation", "Inovasi"));
    map.insert(
        "about.values.2.desc",
        ("Always exploring new creative boundaries", "Sentiasa meneroka sempadan kreativiti baru"),
    );
    map.insert("about.values.3.title", ("Integrity", "Integriti"));
    map.insert(
        "about.values.3.desc",
        ("Transparency and trust in every dealing", "Ketelusan dan kepercayaan dalam setiap urusan"),
    );
    map.insert("about.values.4.title", ("Impact", "Impak"));
    map.insert(
        "about.values.4.desc",
        ("Creating work that drives real results", "Menghasilkan karya yang memberi hasil sebenar"),
    );
    map.insert("about.achievements.started", ("Started", "Bermula"));
    map.insert("about.achievements.global", ("Global", "Global"));
    map.insert("about.achievements.growth", ("Growth", "Pertumbuhan"));
    map.insert("about.why.title", ("Why Work With Me?", "Mengapa Pilih Saya?"));
    map.insert(
        "about.why.1",
        ("Results-driven with proven track record", "Berorientasikan hasil dengan rekod terbukti"),
    );
    map.insert(
        "about.why.2",
        ("Deep understanding of Malaysian markets", "Pemahaman mendalam pasaran Malaysia"),
    );
    map.insert(
        "about.why.3",
        ("Direct communication, no middlemen", "Komunikasi terus, tiada orang tengah"),
    );
    map.insert("about.cta.project", ("Start a Project", "Mulakan Projek"));
    map.insert("about.cta.cv", ("Download CV", "Muat Turun CV"));
    map.insert("about.clients", ("Trusted By Leading Brands", "Dipercayai Jenama Terkemuka"));

    // Portfolio
    map.insert("portfolio.label", ("Portfolio", "Portfolio"));
    map.insert("portfolio.title.1", ("Featured", "Karya"));
    map.insert("portfolio.title.2", ("Works", "Pilihan"));
    map.insert(
        "portfolio.description",
        (
            "A collection of projects that demonstrate creativity and innovation in digital design and branding.",
            "Koleksi projek yang menunjukkan kreativiti dan inovasi dalam reka bentuk digital dan penjenamaan.",
        ),
    );
    map.insert("portfolio.view", ("View Project", "Lihat Projek"));
    map.insert(
        "portfolio.project1.title",
        ("Warisan Bank Rebrand", "Penjenamaan Semula Bank Warisan"),
    );
    map.insert("portfolio.project1.category", ("Branding", "Penjenamaan"));
    map.insert("portfolio.project2.title", ("Seri Angkasa App", "Aplikasi Seri Angkasa"));
    map.insert("portfolio.project2.category", ("UI/UX Design", "Reka Bentuk UI/UX"));
    map.insert("portfolio.project3.title", ("Melaka Heritage", "Warisan Melaka"));
    map.insert("portfolio.project3.category", ("Web Design", "Reka Bentuk Web"));
    map.insert("portfolio.project4.title", ("Nusantara Coffee", "Kopi Nusantara"));
    map.insert("portfolio.project4.category", ("Brand Identity", "Identiti Jenama"));
    map.insert(
        "portfolio.project5.title",
        ("Tech Summit KL", "Sidang Kemuncak Teknologi KL"),
    );
    map.insert("portfolio.project5.category", ("Event Branding", "Penjenamaan Acara"));
    map.insert("portfolio.project6.title", ("Batik Modern", "Batik Moden"));
    map.insert("portfolio.project6.category", ("Product Design", "Reka Bentuk Produk"));

    // Services
    map.insert("services.label", ("Services", "Perkhidmatan"));
    map.insert("services.title.1", ("How I Can", "Bagaimana Saya"));
    map.insert("services.title.2", ("Help You", "Boleh Membantu"));
    map.insert(
        "services.description",
        (
            "Comprehensive digital services to elevate your brand presence and accelerate business growth.",
            "Perkhidmatan digital komprehensif untuk meningkatkan kehadiran jenama dan mempercepatkan pertumbuhan perniagaan anda.",
        ),
    );
    map.insert("services.1.title", ("Brand Strategy", "Strategi Jenama"));
    map.insert(
        "services.1.desc",
        (
            "Develop a unique brand identity that differentiates you in the market",
            "Membangunkan identiti jenama unik yang membezakan anda di pasaran",
        ),
    );
    map.insert("services.2.title", ("UI/UX Design", "Reka Bentuk UI/UX"));
    map.insert(
        "services.2.desc",
        (
            "Design beautiful and functional digital experiences",
            "Mereka bentuk pengalaman digital yang cantik dan berfungsi",
        ),
    );
    map.insert("services.3.title", ("Web Development", "Pembangunan Web"));
    map.insert(
        "services.3.desc",
        (
            "Build responsive and fast websites using latest technology",
            "Membina laman web responsif dan pantas menggunakan teknologi terkini",
        ),
    );
    map.insert("services.4.title", ("Digital Marketing", "Pemasaran Digital"));
    map.insert(
        "services.4.desc",
        (
            "Effective marketing strategies for business growth",
            "Strategi pemasaran berkesan untuk pertumbuhan perniagaan",
        ),
    );
    map.insert("services.5.title", ("Content Creation", "Penciptaan Kandungan"));
    map.insert(
        "services.5.desc",
        (
            "Quality content that captures attention and builds trust",
            "Kandungan berkualiti yang menarik perhatian dan membina kepercayaan",
        ),
    );
    map.insert("services.6.title", ("Consulting", "Perundingan"));
    map.insert(
        "services.6.desc",
        (
            "Strategic guidance to achieve your business goals",
            "Bimbingan strategik untuk mencapai matlamat perniagaan anda",
        ),
    );
    map.insert("services.process.title", ("Work Process", "Proses Kerja"));
    map.insert("services.process.1", ("Discovery", "Penemuan"));
    map.insert("services.process.2", ("Strategy", "Strategi"));
    map.insert("services.process.3", ("Design", "Reka Bentuk"));
    map.insert("services.process.4", ("Development", "Pembangunan"));
    map.insert("services.process.5", ("Launch", "Pelancaran"));

    // Testimonials
    map.insert("testimonials.label", ("Testimonials", "Testimoni"));
    map.insert("testimonials.title.1", ("What Clients", "Apa Kata"));
    map.insert("testimonials.title.2", ("Say", "Klien"));
    map.insert(
        "testimonials.description",
        (
            "Feedback from clients who have worked with me on various projects.",
            "Maklum balas daripada klien yang telah bekerjasama dengan saya dalam pelbagai projek.",
        ),
    );
    map.insert(
        "testimonials.1.position",
        ("CEO, Warisan Holdings", "CEO, Warisan Holdings"),
    );
    map.insert(
        "testimonials.2.position",
        ("Marketing Director, Seri Angkasa", "Pengarah Pemasaran, Seri Angkasa"),
    );
    map.insert(
        "testimonials.3.position",
        ("Founder, Kopi Nusantara", "Pengasas, Kopi Nusantara"),
    );
    map.insert(
        "testimonials.1.content",
        (
            "Faizal is not just a designer, he is a strategic thinker. The rebranding work he did for our company has completely transformed the market's perception of our brand.",
            "Faizal bukan sekadar pereka, beliau adalah pemikir strategik. Kerja penjenamaan semula yang beliau lakukan untuk syarikat kami telah mengubah sepenuhnya persepsi pasaran terhadap jenama kami.",
        ),
    );
    map.insert(
        "testimonials.2.content",
        (
            "Faizal's professionalism and creativity are unmatched. The app he designed for us received multiple awards and increased user engagement by 300%.",
            "Profesionalisme dan kreativiti Faizal tiada tandingan. Aplikasi yang beliau reka untuk kami menerima pelbagai anugerah dan meningkatkan penglibatan pengguna sebanyak 300%.",
        ),
    );
    map.insert(
        "testimonials.3.content",
        (
            "From brand identity to website, Faizal helped us build our brand from scratch. Now Kopi Nusantara is recognized throughout Malaysia.",
            "Dari identiti jenama hingga laman web, Faizal membantu kami membina jenama dari awal. Kini Kopi Nusantara dikenali di seluruh Malaysia.",
        ),
    );

    // Contact
    map.insert("contact.label", ("Contact", "Hubungi"));
    map.insert("contact.title.1", ("Let's", "Jom"));
    map.insert("contact.title.2", ("Collaborate", "Berkolaborasi"));
    map.insert(
        "contact.description",
        (
            "Have an interesting project? Let's discuss how I can help elevate your brand to the next level.",
            "Ada projek menarik? Mari berbincang bagaimana saya boleh membantu mengangkat jenama anda ke tahap seterusnya.",
        ),
    );
    map.insert("contact.info.title", ("Contact Info", "Maklumat Hubungan"));
    map.insert("contact.info.email", ("Email", "Emel"));
    map.insert("contact.info.phone", ("Phone", "Telefon"));
    map.insert("contact.info.location", ("Location", "Lokasi"));
    map.insert("contact.whatsapp", ("Chat on WhatsApp", "Chat di WhatsApp"));
    map.insert("contact.form.name", ("Full Name", "Nama Penuh"));
    map.insert("contact.form.email", ("Email Address", "Alamat Emel"));
    map.insert("contact.form.subject", ("Subject", "Subjek"));
    map.insert("contact.form.message", ("Message", "Mesej"));
    map.insert("contact.form.send", ("Send Message", "Hantar Mesej"));
    map.insert("contact.form.sending", ("Sending...", "Menghantar..."));
    map.insert(
        "contact.form.required",
        ("Please fill out this field.", "Sila isi ruangan ini."),
    );
    map.insert(
        "contact.form.invalid_email",
        ("Please enter a valid email address.", "Sila masukkan alamat emel yang sah."),
    );
    map.insert("contact.social", ("Follow Me", "Ikuti Saya"));

    // Footer
    map.insert(
        "footer.tagline",
        (
            "Crafting digital experiences that inspire and create impact.",
            "Mencipta pengalaman digital yang memberi inspirasi dan impak.",
        ),
    );
    map.insert("footer.navigation", ("Navigation", "Navigasi"));
    map.insert("footer.services", ("Services", "Perkhidmatan"));
    map.insert("footer.connect", ("Connect", "Hubungan"));
    map.insert("footer.copyright", ("All rights reserved.", "Hak cipta terpelihara."));
    map.insert("footer.made", ("Made with ❤️ in Malaysia", "Dibuat dengan ❤️ di Malaysia"));

    map
}

/// Get translations
fn translations() -> &'static Table {
    TRANSLATIONS.get_or_init(init_translations)
}

/// All keys known to the translation table
pub fn keys() -> impl Iterator<Item = &'static str> {
    translations().keys().copied()
}

/// Look up a key without falling back
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    translations().get(key).map(|&(en, bm)| match locale {
        Locale::En => en,
        Locale::Bm => bm,
    })
}

/// Translate a key
///
/// Unknown keys are returned verbatim so a typo never breaks rendering.
pub fn t(locale: Locale, key: &str) -> SharedString {
    match lookup(locale, key) {
        Some(text) => SharedString::from(text),
        None => {
            report_missing(locale, key);
            SharedString::from(key.to_string())
        }
    }
}

/// Flag a missing key once per process in debug builds
fn report_missing(locale: Locale, key: &str) {
    if !cfg!(debug_assertions) {
        return;
    }
    let reported = REPORTED_MISSING.get_or_init(|| Mutex::new(AHashSet::new()));
    let Ok(mut reported) = reported.lock() else {
        return;
    };
    if reported.insert(key.to_string()) {
        tracing::warn!(key, locale = locale.code(), "Missing translation key");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_for_every_locale() {
        for key in keys() {
            for locale in Locale::ALL {
                let expected = lookup(locale, key).map(SharedString::from);
                assert_eq!(Some(t(locale, key)), expected, "key {key}");
            }
        }
    }

    #[test]
    fn test_missing_key_echoes_key() {
        for locale in Locale::ALL {
            assert_eq!(t(locale, "nav.does_not_exist").to_string(), "nav.does_not_exist");
            assert_eq!(t(locale, "").to_string(), "");
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(t(Locale::Bm, "nav.home").to_string(), "Utama");
        assert_eq!(t(Locale::En, "nav.home").to_string(), "Home");
        assert_eq!(t(Locale::En, "contact.form.sending").to_string(), "Sending...");
        assert_eq!(t(Locale::Bm, "contact.form.sending").to_string(), "Menghantar...");
    }

    #[test]
    fn test_locale_cycle() {
        assert_eq!(Locale::default(), Locale::Bm);
        assert_eq!(Locale::Bm.next(), Locale::En);
        assert_eq!(Locale::En.next(), Locale::Bm);
        assert_eq!(Locale::En.next().next(), Locale::En);
    }

    #[test]
    fn test_no_blank_translations() {
        for key in keys() {
            for locale in Locale::ALL {
                let text = lookup(locale, key).unwrap_or_default();
                assert!(!text.trim().is_empty(), "blank {key} for {}", locale.code());
            }
        }
    }
}
