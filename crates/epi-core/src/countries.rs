//! Embedded European country table.
//!
//! ISO 3166 alpha-2 codes with approximate geographic centroids.  Shared by
//! the movement tables (which list the codes as destinations) and the
//! Europe layout (which projects the centroids into layout coordinates).

/// One country: its code and `(lon, lat)` centroid in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub lon:  f32,
    pub lat:  f32,
}

const fn country(code: &'static str, lon: f32, lat: f32) -> Country {
    Country { code, lon, lat }
}

/// The 48 European countries and territories venues can be relabelled as.
/// Kosovo has no ISO code upstream and uses the user-assigned `XK`.
pub const EUROPE: [Country; 48] = [
    country("AL",  20.05, 41.14),
    country("AX",  19.95, 60.20),
    country("AD",   1.58, 42.54),
    country("AT",  14.13, 47.59),
    country("BE",   4.64, 50.64),
    country("BG",  25.22, 42.76),
    country("BA",  17.77, 44.17),
    country("BY",  28.03, 53.53),
    country("CH",   8.21, 46.80),
    country("CZ",  15.31, 49.73),
    country("DE",  10.39, 51.11),
    country("DK",  10.03, 55.98),
    country("ES",  -3.65, 40.24),
    country("EE",  25.54, 58.67),
    country("FI",  26.27, 64.50),
    country("FR",   2.55, 46.56),
    country("GB",  -2.87, 54.12),
    country("GG",  -2.58, 49.46),
    country("GR",  22.96, 39.07),
    country("HR",  16.40, 45.08),
    country("HU",  19.40, 47.16),
    country("IM",  -4.54, 54.22),
    country("IE",  -8.14, 53.18),
    country("IS", -18.57, 64.99),
    country("IT",  12.07, 42.79),
    country("JE",  -2.13, 49.22),
    country("XK",  20.87, 42.57),
    country("LI",   9.54, 47.14),
    country("LT",  23.89, 55.33),
    country("LU",   6.07, 49.77),
    country("LV",  24.91, 56.85),
    country("MC",   7.41, 43.75),
    country("MD",  28.46, 47.20),
    country("MK",  21.68, 41.60),
    country("MT",  14.41, 35.92),
    country("ME",  19.24, 42.79),
    country("NL",   5.28, 52.10),
    country("NO",  15.35, 68.75),
    country("PL",  19.39, 52.13),
    country("PT",  -8.50, 39.60),
    country("RO",  24.97, 45.85),
    country("SM",  12.46, 43.94),
    country("RS",  20.79, 44.22),
    country("SK",  19.49, 48.71),
    country("SI",  14.80, 46.12),
    country("SE",  16.74, 62.78),
    country("UA",  31.38, 48.99),
    country("VA",  12.45, 41.90),
];

/// Countries reachable under the partial border policy.
pub const PARTIAL_OPEN: [&str; 9] = ["NL", "BE", "LU", "DE", "FR", "AT", "CH", "DK", "CZ"];

/// Look up a country by code.
pub fn find(code: &str) -> Option<&'static Country> {
    EUROPE.iter().find(|c| c.code == code)
}
