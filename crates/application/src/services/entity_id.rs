//! Entity id generation
//!
//! Builds host entity ids of the form `<domain>.<slug>` and keeps them
//! unique by appending `_2`, `_3`, ... to ids that are already taken.

use std::collections::HashSet;

/// Slug used when a name contains no usable characters
const EMPTY_SLUG: &str = "unknown";

/// Turn a display name into an id-safe slug
///
/// Keeps ASCII letters and digits (lowercased), replaces every other run of
/// characters with a single `_` and trims leading/trailing separators.
/// Non-ASCII letters are not transliterated, so `Zürich` becomes `z_rich`.
///
/// # Examples
///
/// ```
/// use application::services::slugify;
///
/// assert_eq!(slugify("SmartWeather Raining"), "smartweather_raining");
/// assert_eq!(slugify("  Back-yard  (north) "), "back_yard_north");
/// assert_eq!(slugify("!!!"), "unknown");
/// assert_eq!(slugify("Zürich"), "z_rich");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Allocates unique entity ids
#[derive(Debug, Clone, Default)]
pub struct EntityIdGenerator {
    taken: HashSet<String>,
}

impl EntityIdGenerator {
    /// Create a generator with no ids taken
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that avoids the given ids
    #[must_use]
    pub fn with_taken<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Allocate an id for `name` in `domain`
    pub fn generate(&mut self, domain: &str, name: &str) -> String {
        let base = format!("{domain}.{}", slugify(name));
        let mut candidate = base.clone();
        let mut suffix = 2u32;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// Check whether an id has been allocated or reserved
    #[must_use]
    pub fn is_taken(&self, id: &str) -> bool {
        self.taken.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Smart  Weather -- Raining"), "smart_weather_raining");
    }

    #[test]
    fn slugify_trims_edges() {
        assert_eq!(slugify("__Raining__"), "raining");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("Zürich Raining"), "z_rich_raining");
    }

    #[test]
    fn slugify_empty_input() {
        assert_eq!(slugify(""), "unknown");
        assert_eq!(slugify(" - "), "unknown");
    }

    #[test]
    fn generate_uses_domain_prefix() {
        let mut ids = EntityIdGenerator::new();
        assert_eq!(
            ids.generate("binary_sensor", "Home Raining"),
            "binary_sensor.home_raining"
        );
    }

    #[test]
    fn generate_suffixes_duplicates() {
        let mut ids = EntityIdGenerator::new();
        assert_eq!(ids.generate("binary_sensor", "Home Raining"), "binary_sensor.home_raining");
        assert_eq!(ids.generate("binary_sensor", "Home Raining"), "binary_sensor.home_raining_2");
        assert_eq!(ids.generate("binary_sensor", "home raining"), "binary_sensor.home_raining_3");
    }

    #[test]
    fn generate_skips_reserved_ids() {
        let mut ids = EntityIdGenerator::with_taken(["binary_sensor.home_raining"]);
        assert!(ids.is_taken("binary_sensor.home_raining"));
        assert_eq!(ids.generate("binary_sensor", "Home Raining"), "binary_sensor.home_raining_2");
    }
}
