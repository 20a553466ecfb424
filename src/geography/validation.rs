use std::collections::BTreeMap;

pub const COUNTY_AND_STATE: &str = "You cannot select both a county and a state";
pub const COUNTY_AND_COUNTRY: &str = "You cannot select both a county and a country";
pub const STATE_AND_COUNTRY: &str = "You cannot select both a state and a country";
pub const COUNTY_STATE_AND_COUNTRY: &str = "You cannot select a county, state, and country together";

/// Per-field messages for a locality attached to more than one region.
pub type RegionErrors = BTreeMap<String, String>;

/// A locality may hang off at most one level of the geographic tree.
///
/// Each conflicting field maps to the message naming its conflict; when all
/// three are set every field carries the three-way message instead.
pub fn validate_single_region(
    country_set: bool,
    state_set: bool,
    county_set: bool,
) -> Result<(), RegionErrors> {
    let pairs: &[(&str, &str, &str)] = match (country_set, state_set, county_set) {
        (true, true, true) => &[
            ("county", "state", COUNTY_STATE_AND_COUNTRY),
            ("country", "country", COUNTY_STATE_AND_COUNTRY),
        ],
        (false, true, true) => &[("county", "state", COUNTY_AND_STATE)],
        (true, false, true) => &[("county", "country", COUNTY_AND_COUNTRY)],
        (true, true, false) => &[("state", "country", STATE_AND_COUNTRY)],
        _ => return Ok(()),
    };

    let mut errors = RegionErrors::new();
    for (first, second, message) in pairs {
        errors.insert((*first).to_string(), (*message).to_string());
        errors.insert((*second).to_string(), (*message).to_string());
    }
    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fields(errors: &RegionErrors) -> Vec<&str> {
        errors.keys().map(String::as_str).collect()
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(false, false, true)]
    fn test_zero_or_one_region_is_valid(
        #[case] country: bool,
        #[case] state: bool,
        #[case] county: bool,
    ) {
        assert!(validate_single_region(country, state, county).is_ok());
    }

    #[rstest]
    #[case(false, true, true, vec!["county", "state"], COUNTY_AND_STATE)]
    #[case(true, false, true, vec!["country", "county"], COUNTY_AND_COUNTRY)]
    #[case(true, true, false, vec!["country", "state"], STATE_AND_COUNTRY)]
    #[case(true, true, true, vec!["country", "county", "state"], COUNTY_STATE_AND_COUNTRY)]
    fn test_conflicting_regions(
        #[case] country: bool,
        #[case] state: bool,
        #[case] county: bool,
        #[case] expected_fields: Vec<&str>,
        #[case] expected_message: &str,
    ) {
        let errors = validate_single_region(country, state, county).unwrap_err();
        assert_eq!(fields(&errors), expected_fields);
        assert!(errors.values().all(|message| message == expected_message));
    }
}
