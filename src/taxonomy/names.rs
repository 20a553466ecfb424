//! Scientific names built from the taxonomic hierarchy.

/// "Papilio polyxenes"
pub fn binomial(genus: &str, species: &str) -> String {
    format!("{genus} {species}")
}

/// "Papilio polyxenes coloro"
pub fn trinomial(binomial: &str, subspecies: &str) -> String {
    format!("{binomial} {subspecies}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Papilio", "polyxenes", "Papilio polyxenes")]
    #[case("Danaus", "plexippus", "Danaus plexippus")]
    fn test_binomial(#[case] genus: &str, #[case] species: &str, #[case] expected: &str) {
        assert_eq!(binomial(genus, species), expected);
    }

    #[test]
    fn test_binomial_is_repeatable() {
        let genus = String::from("Papilio");
        let species = String::from("polyxenes");

        let first = binomial(&genus, &species);
        let second = binomial(&genus, &species);
        assert_eq!(first, second);
        assert_eq!(genus, "Papilio");
        assert_eq!(species, "polyxenes");
    }

    #[test]
    fn test_trinomial() {
        let name = binomial("Papilio", "polyxenes");
        assert_eq!(trinomial(&name, "coloro"), "Papilio polyxenes coloro");
    }
}
