//! Property-based tests for entity id generation

use application::services::{EntityIdGenerator, slugify};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slug_is_id_safe(name in ".{0,40}") {
        let slug = slugify(&name);
        prop_assert!(!slug.is_empty());
        prop_assert!(!slug.starts_with('_'));
        prop_assert!(!slug.ends_with('_'));
        prop_assert!(!slug.contains("__"));
        prop_assert!(slug.chars().all(|c| c == '_' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn slug_is_idempotent(name in "[A-Za-z0-9 _-]{1,40}") {
        let slug = slugify(&name);
        prop_assert_eq!(slugify(&slug), slug);
    }

    #[test]
    fn generated_ids_are_unique(names in proptest::collection::vec("[A-Za-z ]{0,8}", 1..20)) {
        let mut ids = EntityIdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for name in &names {
            let id = ids.generate("binary_sensor", name);
            prop_assert!(id.starts_with("binary_sensor."));
            prop_assert!(seen.insert(id));
        }
    }
}
