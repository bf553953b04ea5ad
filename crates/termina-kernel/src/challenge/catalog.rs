//! Challenge catalogs.
//!
//! Categories ship as JSON documents compiled into the binary. Each
//! category's challenges are ordered by `orderIndex` on load.

use termina_types::Challenge;

use super::error::ChallengeError;

/// Embedded category documents, in listing order.
const BUILTIN: &[(&str, &str)] = &[
    ("default", include_str!("../../challenges/default.json")),
    ("files", include_str!("../../challenges/files.json")),
    ("search", include_str!("../../challenges/search.json")),
];

/// A named, ordered sequence of challenges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub challenges: Vec<Challenge>,
}

impl Category {
    /// Build a category, sorting challenges by `order_index`.
    pub fn new(name: impl Into<String>, mut challenges: Vec<Challenge>) -> Self {
        challenges.sort_by_key(|c| c.order_index);
        Self {
            name: name.into(),
            challenges,
        }
    }

    /// Parse a category from its JSON document.
    pub fn from_json(name: &str, json: &str) -> Result<Self, ChallengeError> {
        let challenges: Vec<Challenge> =
            serde_json::from_str(json).map_err(|source| ChallengeError::Catalog {
                category: name.to_string(),
                source,
            })?;
        Ok(Self::new(name, challenges))
    }

    pub fn get(&self, index: usize) -> Option<&Challenge> {
        self.challenges.get(index)
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

/// All categories known to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories compiled into termina.
    pub fn builtin() -> Result<Self, ChallengeError> {
        let categories = BUILTIN
            .iter()
            .map(|(name, json)| Category::from_json(name, json))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(categories))
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category names in listing order.
    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of challenges across every category.
    pub fn total_challenges(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Look up a category or explain which names are valid.
    pub fn require(&self, name: &str) -> Result<&Category, ChallengeError> {
        self.get(name).ok_or_else(|| ChallengeError::UnknownCategory {
            name: name.to_string(),
            known: self.names(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().expect("embedded catalogs are valid");
        assert_eq!(catalog.names(), vec!["default", "files", "search"]);
        for category in catalog.categories() {
            assert!(!category.is_empty(), "{} is empty", category.name);
            let order: Vec<u32> = category.challenges.iter().map(|c| c.order_index).collect();
            let mut sorted = order.clone();
            sorted.sort();
            assert_eq!(order, sorted);
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin().unwrap();
        let mut seen = HashSet::new();
        for c in catalog.categories().iter().flat_map(|c| &c.challenges) {
            assert!(seen.insert(c.id.clone()), "duplicate id {}", c.id);
            assert!(!c.expected_commands.is_empty());
        }
    }

    #[test]
    fn category_sorts_by_order_index() {
        let json = r#"[
            {"id":"b","title":"B","description":"","difficulty":"beginner","level":1,
             "scenario":"","expectedCommands":["pwd"],"hints":[],"xpReward":5,"orderIndex":2},
            {"id":"a","title":"A","description":"","difficulty":"expert","level":9,
             "scenario":"","expectedCommands":["ls"],"hints":[],"xpReward":5,"orderIndex":1}
        ]"#;
        let category = Category::from_json("x", json).unwrap();
        assert_eq!(category.challenges[0].id, "a");
    }

    #[test]
    fn bad_json_names_the_category() {
        let err = Category::from_json("broken", "{").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn require_lists_known_names() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.require("docker").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown category: docker. Available categories: default, files, search"
        );
    }
}
