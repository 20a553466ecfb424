//! Person names for specimen labels.

/// Field order is the sort order used for collector lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PersonName {
    pub last_name: String,
    pub first_name: String,
    pub middle_initial: Option<String>,
    pub suffix: Option<String>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl PersonName {
    pub fn new(
        first_name: &str,
        middle_initial: Option<&str>,
        last_name: &str,
        suffix: Option<&str>,
    ) -> Self {
        Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            middle_initial: middle_initial.map(str::to_string),
            suffix: suffix.map(str::to_string),
        }
    }

    /// "Paul A. Smith, Jr."
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.clone();
        if let Some(middle) = present(self.middle_initial.as_ref()) {
            name.push(' ');
            name.push_str(middle);
            name.push('.');
        }
        name.push(' ');
        name.push_str(&self.last_name);
        if let Some(suffix) = present(self.suffix.as_ref()) {
            name.push_str(", ");
            name.push_str(suffix);
        }
        name
    }

    /// "P. Smith Jr."
    pub fn collector_name(&self) -> String {
        let mut name = match self.first_name.trim().chars().next() {
            Some(initial) => format!("{initial}. {}", self.last_name),
            None => self.last_name.clone(),
        };
        if let Some(suffix) = present(self.suffix.as_ref()) {
            name.push(' ');
            name.push_str(suffix);
        }
        name
    }
}

/// Collector names sorted by last name, first name, middle initial, then
/// suffix and joined with ", ".
pub fn collectors(names: &[PersonName]) -> String {
    let mut sorted: Vec<&PersonName> = names.iter().collect();
    sorted.sort();
    sorted
        .into_iter()
        .map(PersonName::collector_name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Paul", Some("A"), "Smith", Some("Jr."), "Paul A. Smith, Jr.", "P. Smith Jr.")]
    #[case("Megan", Some("E"), "McCarty", None, "Megan E. McCarty", "M. McCarty")]
    #[case("Thomas", None, "Williams", Some("III"), "Thomas Williams, III", "T. Williams III")]
    #[case("Jane", None, "Doe", None, "Jane Doe", "J. Doe")]
    #[case("Jane", Some(""), "Doe", Some(" "), "Jane Doe", "J. Doe")]
    fn test_person_names(
        #[case] first: &str,
        #[case] middle: Option<&str>,
        #[case] last: &str,
        #[case] suffix: Option<&str>,
        #[case] full: &str,
        #[case] collector: &str,
    ) {
        let name = PersonName::new(first, middle, last, suffix);
        assert_eq!(name.full_name(), full);
        assert_eq!(name.collector_name(), collector);
    }

    #[test]
    fn test_collectors_are_sorted_by_last_name() {
        let names = vec![
            PersonName::new("Thomas", None, "Williams", Some("III")),
            PersonName::new("Paul", Some("A"), "Smith", Some("Jr.")),
            PersonName::new("Megan", Some("E"), "McCarty", None),
            PersonName::new("Jane", None, "Doe", None),
        ];

        assert_eq!(
            collectors(&names),
            "J. Doe, M. McCarty, P. Smith Jr., T. Williams III"
        );
    }

    #[test]
    fn test_collectors_tie_break_on_first_name() {
        let names = vec![
            PersonName::new("Robert", None, "Smith", None),
            PersonName::new("Paul", None, "Smith", Some("Jr.")),
            PersonName::new("Paul", None, "Smith", None),
        ];

        assert_eq!(collectors(&names), "P. Smith, P. Smith Jr., R. Smith");
    }

    #[test]
    fn test_no_collectors() {
        assert_eq!(collectors(&[]), "");
    }
}
