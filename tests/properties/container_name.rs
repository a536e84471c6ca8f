//! Property tests for container name derivation.

use proptest::prelude::*;

use containment::Container;

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Names only ever contain `[A-Za-z0-9_.-]`.
    #[test]
    fn property_name_uses_allowed_characters(image in "(?s).{0,64}") {
        let name = Container::new(image).name();
        prop_assert!(name.chars().all(is_allowed), "bad name {:?}", name);
    }

    /// PROPERTY: Deriving a name from a name changes nothing.
    #[test]
    fn property_name_is_idempotent(image in "(?s).{0,64}") {
        let name = Container::new(image).name();
        prop_assert_eq!(Container::new(name.clone()).name(), name);
    }

    /// PROPERTY: Path segments map one-to-one onto dash-separated segments.
    #[test]
    fn property_slashes_become_dashes(
        segments in proptest::collection::vec("[a-z0-9]{1,12}", 1..5)
    ) {
        let image = segments.join("/");
        prop_assert_eq!(Container::new(image).name(), segments.join("-"));
    }
}
