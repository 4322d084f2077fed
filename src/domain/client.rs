//! Client logos
//!
//! Two lists exist because the two logo strips load from different hosts.

/// A client brand with a remote logo
#[derive(Debug, Clone, Copy)]
pub struct ClientLogo {
    /// Brand name, also the text fallback
    pub name: &'static str,
    /// Remote logo image
    pub url: &'static str,
}

/// Logos for the hero "trusted by" strip
pub const HERO_CLIENTS: &[ClientLogo] = &[
    ClientLogo { name: "PETRONAS", url: "https://logo.clearbit.com/petronas.com" },
    ClientLogo { name: "Maybank", url: "https://logo.clearbit.com/maybank.com" },
    ClientLogo { name: "AirAsia", url: "https://logo.clearbit.com/airasia.com" },
    ClientLogo { name: "Grab", url: "https://logo.clearbit.com/grab.com" },
    ClientLogo { name: "Axiata", url: "https://logo.clearbit.com/axiata.com" },
    ClientLogo { name: "CIMB", url: "https://logo.clearbit.com/cimb.com" },
];

/// Logos for the about section client wall
pub const ABOUT_CLIENTS: &[ClientLogo] = &[
    ClientLogo {
        name: "Petronas",
        url: "https://upload.wikimedia.org/wikipedia/commons/4/4e/Petronas_2013_logo.svg",
    },
    ClientLogo {
        name: "Maybank",
        url: "https://upload.wikimedia.org/wikipedia/commons/a/ad/Maybank_logo.svg",
    },
    ClientLogo {
        name: "AirAsia",
        url: "https://upload.wikimedia.org/wikipedia/commons/f/f5/AirAsia_New_Logo.svg",
    },
    ClientLogo {
        name: "Grab",
        url: "https://upload.wikimedia.org/wikipedia/commons/a/a7/Grab_Logo.svg",
    },
    ClientLogo {
        name: "Axiata",
        url: "https://upload.wikimedia.org/wikipedia/commons/2/21/Axiata_logo.svg",
    },
    ClientLogo {
        name: "CIMB",
        url: "https://upload.wikimedia.org/wikipedia/commons/d/d9/CIMB_logo.svg",
    },
];
