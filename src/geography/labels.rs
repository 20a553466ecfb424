//! Derived labels for the geographic hierarchy.
//!
//! Everything here is recomputed from stored names on every read; none of
//! these strings are persisted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const ALASKA: &str = "Alaska";
const LOUISIANA: &str = "Louisiana";

/// The derived naming parts of a county.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CountyLabels {
    pub abbr: String,
    pub county_line: String,
    pub full_name: String,
}

impl CountyLabels {
    pub fn new(state_name: &str, county_name: &str) -> Self {
        let abbr = county_abbr(state_name, county_name);
        let county_line = county_line(county_name);
        let full_name = join_non_empty(&[county_name, abbr, county_line], " ");

        Self {
            abbr: abbr.to_string(),
            county_line: county_line.to_string(),
            full_name,
        }
    }
}

/// Alaska splits into boroughs and census areas, Louisiana into parishes.
pub fn county_abbr(state_name: &str, county_name: &str) -> &'static str {
    match state_name {
        ALASKA if county_name.contains("Census") => "",
        ALASKA => "Boro.",
        LOUISIANA => "Par.",
        _ => "Co.",
    }
}

/// "line" for records spanning two counties, written "Clear Creek/Summit".
pub fn county_line(county_name: &str) -> &'static str {
    if county_name.contains('/') { "line" } else { "" }
}

/// `"{full_name}, {state_abbr}"`, e.g. "Rapides Par., LA".
pub fn county_display_name(state_name: &str, state_abbr: &str, county_name: &str) -> String {
    let full_name = CountyLabels::new(state_name, county_name).full_name;
    join_non_empty(&[full_name.as_str(), state_abbr], ", ")
}

/// Builds `"{name, }{range }{town, }{region}"`.
///
/// `region` is the county full name, state abbreviation or country
/// abbreviation, whichever the locality is attached to. A locality with no
/// region keeps its other parts and drops the dangling separator.
pub fn locality_display_name(
    name: Option<&str>,
    range: Option<&str>,
    town: Option<&str>,
    region: Option<&str>,
) -> String {
    let mut label = String::new();
    if let Some(name) = present(name) {
        label.push_str(name);
        label.push_str(", ");
    }
    if let Some(range) = present(range) {
        label.push_str(range);
        label.push(' ');
    }
    if let Some(town) = present(town) {
        label.push_str(town);
        label.push_str(", ");
    }
    match present(region) {
        Some(region) => label.push_str(region),
        None => label.truncate(label.trim_end_matches([',', ' ']).len()),
    }
    label
}

pub fn elevation_meters(elevation: &str) -> String {
    format!("{elevation}m")
}

/// `"{latitude }{longitude }{elevation}m, {locality}"`
pub fn gps_display_name(
    latitude: Option<&str>,
    longitude: Option<&str>,
    elevation: &str,
    locality: &str,
) -> String {
    let mut label = String::new();
    for coordinate in [latitude, longitude].into_iter().filter_map(present) {
        label.push_str(coordinate);
        label.push(' ');
    }
    label.push_str(&elevation_meters(elevation));
    label.push_str(", ");
    label.push_str(locality);
    label
}

/// URL slug: lowercase ASCII, word characters only, runs of whitespace and
/// hyphens collapsed into one "-".
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for ch in value.chars().flat_map(fold_to_ascii) {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    slug
}

fn fold_to_ascii(ch: char) -> Vec<char> {
    let folded: &str = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' => "c",
        'Ç' => "C",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'ñ' => "n",
        'Ñ' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' => "Y",
        'ß' => "ss",
        _ => return vec![ch],
    };
    folded.chars().collect()
}

/// Blank strings count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Indiana", "Switzerland", "Co.")]
    #[case("Louisiana", "Rapides", "Par.")]
    #[case("Alaska", "Fairbanks N. Star", "Boro.")]
    #[case("Alaska", "Yukon-Koyukuk Census Area", "")]
    #[case("Colorado", "Clear Creek/Summit", "Co.")]
    fn test_county_abbr(#[case] state: &str, #[case] county: &str, #[case] expected: &str) {
        assert_eq!(county_abbr(state, county), expected);
    }

    #[rstest]
    #[case("Indiana", "Switzerland", "Switzerland Co.")]
    #[case("Louisiana", "Rapides", "Rapides Par.")]
    #[case("Alaska", "Fairbanks N. Star", "Fairbanks N. Star Boro.")]
    #[case("Alaska", "Yukon-Koyukuk Census Area", "Yukon-Koyukuk Census Area")]
    #[case("Colorado", "Clear Creek/Summit", "Clear Creek/Summit Co. line")]
    fn test_county_full_name(#[case] state: &str, #[case] county: &str, #[case] expected: &str) {
        assert_eq!(CountyLabels::new(state, county).full_name, expected);
    }

    #[test]
    fn test_county_line() {
        assert_eq!(county_line("Clear Creek/Summit"), "line");
        assert_eq!(county_line("Switzerland"), "");
    }

    #[test]
    fn test_census_area_has_no_stray_spaces() {
        let labels = CountyLabels::new("Alaska", "Yukon-Koyukuk Census Area");
        assert_eq!(labels.abbr, "");
        assert_eq!(labels.county_line, "");
        assert_eq!(labels.full_name, "Yukon-Koyukuk Census Area");
    }

    #[rstest]
    #[case("Indiana", "IN", "Switzerland", "Switzerland Co., IN")]
    #[case("Louisiana", "LA", "Rapides", "Rapides Par., LA")]
    #[case("Alaska", "AK", "Fairbanks N. Star", "Fairbanks N. Star Boro., AK")]
    #[case("Alaska", "AK", "Yukon-Koyukuk Census Area", "Yukon-Koyukuk Census Area, AK")]
    #[case("Colorado", "CO", "Clear Creek/Summit", "Clear Creek/Summit Co. line, CO")]
    fn test_county_display_name(
        #[case] state: &str,
        #[case] state_abbr: &str,
        #[case] county: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(county_display_name(state, state_abbr, county), expected);
    }

    #[rstest]
    #[case(
        Some("Bonanza Creek Experimental Forest"),
        Some("23 km SW"),
        Some("Ester"),
        Some("Fairbanks N. Star Boro."),
        "Bonanza Creek Experimental Forest, 23 km SW Ester, Fairbanks N. Star Boro."
    )]
    #[case(None, Some("4 km NW"), Some("Patriot"), Some("Switzerland Co."), "4 km NW Patriot, Switzerland Co.")]
    #[case(Some("Big Oaks NWR"), None, Some("Madison"), Some("Jefferson Co."), "Big Oaks NWR, Madison, Jefferson Co.")]
    #[case(None, None, Some("Montague"), Some("PEI"), "Montague, PEI")]
    #[case(Some("Carolina Biological Supply Company"), None, None, Some("USA"), "Carolina Biological Supply Company, USA")]
    #[case(None, None, Some("Mexico City"), Some("MEX"), "Mexico City, MEX")]
    #[case(Some(""), Some(""), Some("Mexico City"), Some("MEX"), "Mexico City, MEX")]
    fn test_locality_display_name(
        #[case] name: Option<&str>,
        #[case] range: Option<&str>,
        #[case] town: Option<&str>,
        #[case] region: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(locality_display_name(name, range, town, region), expected);
    }

    #[rstest]
    #[case(Some("Big Oaks NWR"), Some("4 km NW"), Some("Madison"), "Big Oaks NWR, 4 km NW Madison")]
    #[case(Some("Big Oaks NWR"), None, None, "Big Oaks NWR")]
    #[case(None, Some("4 km NW"), None, "4 km NW")]
    #[case(None, None, None, "")]
    fn test_locality_without_region(
        #[case] name: Option<&str>,
        #[case] range: Option<&str>,
        #[case] town: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(locality_display_name(name, range, town, None), expected);
    }

    #[test]
    fn test_elevation_meters() {
        assert_eq!(elevation_meters("252"), "252m");
        assert_eq!(elevation_meters("3157-3402"), "3157-3402m");
    }

    #[test]
    fn test_gps_display_name() {
        assert_eq!(
            gps_display_name(
                Some("38.849500"),
                Some("-84.866328"),
                "252",
                "Boone Robinson Rd, 4 km NW Patriot, Switzerland Co."
            ),
            "38.849500 -84.866328 252m, Boone Robinson Rd, 4 km NW Patriot, Switzerland Co."
        );
        assert_eq!(
            gps_display_name(None, None, "3157-3402", "William's Lake Trail, Carson NF, Taos Co."),
            "3157-3402m, William's Lake Trail, Carson NF, Taos Co."
        );
    }

    #[rstest]
    #[case("LepSoc 2008", "lepsoc-2008")]
    #[case("  Field   trip -- Alaska ", "field-trip-alaska")]
    #[case("Sierra Madre (Oriental)", "sierra-madre-oriental")]
    #[case("Querétaro & Hidalgo", "queretaro-hidalgo")]
    #[case("", "")]
    fn test_slugify(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }
}
