//! Star names used for selection, plus a small catalog of real stars for lookup.
//!
//! Selection is `names[hash_number % names.len()]`, so list order is part of
//! every generated ID: reordering or inserting into a list changes the star
//! picked for existing inputs.

use serde::Serialize;

/// Default selection list. Order is significant.
pub const DEFAULT_STAR_NAMES: [&str; 10] = [
    "SIRIUS",
    "VEGA",
    "ALTAIR",
    "RIGEL",
    "BETELGEUSE",
    "POLARIS",
    "ANTARES",
    "ARCTURUS",
    "CAPELLA",
    "ALDEBARAN",
];

/// Catalog entry for a named star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    pub name: &'static str,
    /// Distance from the Sun in light-years.
    pub distance_ly: f64,
    /// Apparent visual magnitude.
    pub magnitude: f64,
    pub spectral_type: &'static str,
    pub constellation: &'static str,
}

const fn star(
    name: &'static str,
    distance_ly: f64,
    magnitude: f64,
    spectral_type: &'static str,
    constellation: &'static str,
) -> StarRecord {
    StarRecord {
        name,
        distance_ly,
        magnitude,
        spectral_type,
        constellation,
    }
}

/// Bright named stars, ordered by apparent magnitude.
pub static STAR_CATALOG: &[StarRecord] = &[
    star("Sirius", 8.6, -1.46, "A1V", "Canis Major"),
    star("Canopus", 310.0, -0.74, "A9II", "Carina"),
    star("Arcturus", 36.7, -0.05, "K1.5III", "Boötes"),
    star("Vega", 25.0, 0.03, "A0V", "Lyra"),
    star("Capella", 42.9, 0.08, "G3III", "Auriga"),
    star("Rigel", 860.0, 0.13, "B8Ia", "Orion"),
    star("Procyon", 11.5, 0.34, "F5IV-V", "Canis Minor"),
    star("Achernar", 139.0, 0.46, "B6Vep", "Eridanus"),
    star("Betelgeuse", 548.0, 0.50, "M1-2Ia-ab", "Orion"),
    star("Hadar", 390.0, 0.61, "B1III", "Centaurus"),
    star("Altair", 16.7, 0.76, "A7V", "Aquila"),
    star("Acrux", 320.0, 0.76, "B0.5IV", "Crux"),
    star("Aldebaran", 65.3, 0.86, "K5III", "Taurus"),
    star("Antares", 550.0, 0.96, "M1.5Iab-Ib", "Scorpius"),
    star("Spica", 250.0, 0.97, "B1III-IV", "Virgo"),
    star("Pollux", 33.8, 1.14, "K0III", "Gemini"),
    star("Fomalhaut", 25.1, 1.16, "A3V", "Piscis Austrinus"),
    star("Deneb", 2600.0, 1.25, "A2Ia", "Cygnus"),
    star("Mimosa", 280.0, 1.25, "B0.5III", "Crux"),
    star("Regulus", 79.3, 1.35, "B8IVn", "Leo"),
    star("Adhara", 430.0, 1.50, "B2II", "Canis Major"),
    star("Castor", 51.0, 1.58, "A1V", "Gemini"),
    star("Shaula", 570.0, 1.62, "B2IV", "Scorpius"),
    star("Gacrux", 88.6, 1.64, "M3.5III", "Crux"),
    star("Bellatrix", 250.0, 1.64, "B2III", "Orion"),
    star("Elnath", 134.0, 1.65, "B7III", "Taurus"),
    star("Miaplacidus", 113.0, 1.67, "A1III", "Carina"),
    star("Alnilam", 2000.0, 1.69, "B0Ia", "Orion"),
    star("Alnair", 101.0, 1.74, "B6V", "Grus"),
    star("Alnitak", 1260.0, 1.77, "O9.5Iab", "Orion"),
    star("Alioth", 82.6, 1.77, "A1III-IVp", "Ursa Major"),
    star("Dubhe", 123.0, 1.79, "K0III", "Ursa Major"),
    star("Mirfak", 510.0, 1.79, "F5Ib", "Perseus"),
    star("Wezen", 1600.0, 1.83, "F8Ia", "Canis Major"),
    star("Sargas", 270.0, 1.86, "F1II", "Scorpius"),
    star("Avior", 630.0, 1.86, "K3III", "Carina"),
    star("Alkaid", 104.0, 1.86, "B3V", "Ursa Major"),
    star("Menkalinan", 81.0, 1.90, "A1IV", "Auriga"),
    star("Atria", 391.0, 1.91, "K2Ib-IIa", "Triangulum Australe"),
    star("Alhena", 109.0, 1.92, "A1IV", "Gemini"),
    star("Peacock", 179.0, 1.94, "B2IV", "Pavo"),
    star("Mirzam", 500.0, 1.98, "B1II-III", "Canis Major"),
    star("Alphard", 177.0, 1.98, "K3II-III", "Hydra"),
    star("Polaris", 433.0, 1.98, "F7Ib", "Ursa Minor"),
    star("Hamal", 66.0, 2.00, "K2III", "Aries"),
    star("Diphda", 96.0, 2.02, "K0III", "Cetus"),
    star("Nunki", 228.0, 2.05, "B2.5V", "Sagittarius"),
    star("Mirach", 197.0, 2.05, "M0III", "Andromeda"),
    star("Menkent", 59.0, 2.06, "K0III", "Centaurus"),
    star("Alpheratz", 97.0, 2.06, "B8IVpMnHg", "Andromeda"),
    star("Rasalhague", 48.6, 2.07, "A5III", "Ophiuchus"),
    star("Tiaki", 177.0, 2.07, "M5III", "Grus"),
    star("Kochab", 131.0, 2.08, "K4III", "Ursa Minor"),
    star("Saiph", 650.0, 2.09, "B0.5Ia", "Orion"),
    star("Algol", 90.0, 2.12, "B8V", "Perseus"),
    star("Denebola", 36.0, 2.14, "A3V", "Leo"),
    star("Muhlifain", 130.0, 2.20, "A1IV", "Centaurus"),
    star("Aspidiske", 690.0, 2.21, "A9Ib", "Carina"),
    star("Suhail", 545.0, 2.21, "K4Ib-II", "Vela"),
    star("Alphecca", 75.0, 2.22, "A0V", "Corona Borealis"),
    star("Mizar", 82.9, 2.23, "A2V", "Ursa Major"),
    star("Sadr", 1800.0, 2.23, "F8Iab", "Cygnus"),
    star("Eltanin", 154.0, 2.23, "K5III", "Draco"),
    star("Mintaka", 1200.0, 2.23, "O9.5II", "Orion"),
    star("Schedar", 228.0, 2.24, "K0IIIa", "Cassiopeia"),
    star("Caph", 54.7, 2.27, "F2III", "Cassiopeia"),
];

/// Pick `names[hash_number % names.len()]`, returning the index alongside the name.
///
/// Returns `None` only for an empty list.
pub fn select_star<S: AsRef<str>>(hash_number: u32, names: &[S]) -> Option<(usize, &str)> {
    if names.is_empty() {
        return None;
    }
    let index = hash_number as usize % names.len();
    Some((index, names[index].as_ref()))
}

/// Look up a catalog entry by exact name, ignoring ASCII case.
pub fn get_star_info(name: &str) -> Option<&'static StarRecord> {
    STAR_CATALOG
        .iter()
        .find(|record| record.name.eq_ignore_ascii_case(name))
}
