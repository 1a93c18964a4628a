//! Relation definition files.
//!
//! A definition file is TOML with one `[[relation]]` table per relation:
//!
//! ```toml
//! [[relation]]
//! name = "R"
//! carrier_a = [1, 2, 3, 4, 5]
//! carrier_b = [1, 2, 3, 4, 5]
//! pairs = [[1, 3], [2, 3]]
//! ```

use crate::error::{CliError, Result};
use binrel_domain::{ensure_homogeneous, Element, Relation};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Raw file layout.
#[derive(Debug, Deserialize)]
struct DefinitionFile {
    #[serde(default, rename = "relation")]
    relations: Vec<RelationDef>,
}

/// One `[[relation]]` table.
#[derive(Debug, Deserialize)]
struct RelationDef {
    name: String,
    #[serde(default)]
    carrier_a: Option<Vec<Element>>,
    #[serde(default)]
    carrier_b: Option<Vec<Element>>,
    #[serde(default)]
    pairs: Vec<Vec<Element>>,
}

/// Relations loaded from a definition file, in file order.
#[derive(Debug, Clone)]
pub struct Definitions {
    relations: Vec<Relation<Element>>,
}

impl Definitions {
    /// Load and validate a definition file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let definitions = Self::parse(&contents)?;
        info!(
            "Loaded {} relation(s) from {}",
            definitions.relations.len(),
            path.display()
        );
        Ok(definitions)
    }

    /// Parse and validate definition file contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: DefinitionFile = toml::from_str(contents)?;
        let mut names = BTreeSet::new();
        let mut relations = Vec::with_capacity(file.relations.len());

        for def in file.relations {
            if !names.insert(def.name.clone()) {
                return Err(CliError::InvalidInput(format!(
                    "Relation '{}' is defined more than once",
                    def.name
                )));
            }
            relations.push(build_relation(def)?);
        }

        Ok(Self { relations })
    }

    /// All relations, in file order.
    pub fn relations(&self) -> &[Relation<Element>] {
        &self.relations
    }

    /// Look up a relation by name.
    pub fn get(&self, name: &str) -> Result<&Relation<Element>> {
        self.relations
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| CliError::UnknownRelation(name.to_string()))
    }

    /// The named relation, or the first one when no name is given.
    pub fn select(&self, name: Option<&str>) -> Result<&Relation<Element>> {
        match name {
            Some(name) => self.get(name),
            None => self.relations.first().ok_or_else(|| {
                CliError::InvalidInput("Definition file contains no relations".to_string())
            }),
        }
    }
}

fn build_relation(def: RelationDef) -> Result<Relation<Element>> {
    let mut pairs = BTreeSet::new();
    for (idx, pair) in def.pairs.into_iter().enumerate() {
        let [a, b]: [Element; 2] = pair.try_into().map_err(|pair: Vec<Element>| {
            CliError::InvalidInput(format!(
                "Pair {} of relation '{}' has {} component(s), expected 2",
                idx,
                def.name,
                pair.len()
            ))
        })?;
        pairs.insert((a, b));
    }

    let carrier_a: Option<BTreeSet<Element>> = def.carrier_a.map(|c| c.into_iter().collect());
    let carrier_b: Option<BTreeSet<Element>> = def.carrier_b.map(|c| c.into_iter().collect());

    // Each side must hold one kind of element
    ensure_homogeneous(carrier_a.iter().flatten().chain(pairs.iter().map(|(a, _)| a)))?;
    ensure_homogeneous(carrier_b.iter().flatten().chain(pairs.iter().map(|(_, b)| b)))?;

    debug!("Relation '{}' has {} pair(s)", def.name, pairs.len());
    Ok(Relation::from_pairs(def.name, pairs).carriers(carrier_a, carrier_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use binrel_domain::{ElementKind, RelationError};

    const SAMPLE: &str = r#"
        [[relation]]
        name = "R"
        carrier_a = [1, 2, 3, 4, 5]
        carrier_b = [1, 2, 3, 4, 5]
        pairs = [[1, 3], [2, 3], [2, 4], [3, 5], [3, 2], [3, 4], [4, 4]]

        [[relation]]
        name = "likes"
        pairs = [["ann", 1], ["bob", 2], ["ann", 1]]
    "#;

    #[test]
    fn test_parse_sample() {
        let defs = Definitions::parse(SAMPLE).unwrap();
        assert_eq!(defs.relations().len(), 2);

        let r = defs.get("R").unwrap();
        assert_eq!(r.len(), 7);
        assert_eq!(r.carrier_a().map(|c| c.len()), Some(5));
        assert!(r.contains(&Element::Int(3), &Element::Int(5)));

        let likes = defs.get("likes").unwrap();
        assert_eq!(likes.len(), 2);
        assert!(likes.carrier_a().is_none());
    }

    #[test]
    fn test_select_defaults_to_first() {
        let defs = Definitions::parse(SAMPLE).unwrap();
        assert_eq!(defs.select(None).unwrap().name(), "R");
        assert_eq!(defs.select(Some("likes")).unwrap().name(), "likes");
    }

    #[test]
    fn test_unknown_relation() {
        let defs = Definitions::parse(SAMPLE).unwrap();
        assert!(matches!(defs.get("T"), Err(CliError::UnknownRelation(name)) if name == "T"));
    }

    #[test]
    fn test_empty_file() {
        let defs = Definitions::parse("").unwrap();
        assert!(matches!(defs.select(None), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let input = r#"
            [[relation]]
            name = "R"
            [[relation]]
            name = "R"
        "#;
        assert!(matches!(Definitions::parse(input), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_pair_rejected() {
        let input = r#"
            [[relation]]
            name = "R"
            pairs = [[1, 2, 3]]
        "#;
        match Definitions::parse(input) {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("3 component(s)")),
            other => panic!("Expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_kinds_rejected() {
        let input = r#"
            [[relation]]
            name = "R"
            carrier_a = [1, 2]
            pairs = [["x", 1]]
        "#;
        match Definitions::parse(input) {
            Err(CliError::Relation(RelationError::TypeMismatch { expected, found })) => {
                assert_eq!(expected, ElementKind::Int);
                assert_eq!(found, ElementKind::Text);
            }
            other => panic!("Expected type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relations.toml");
        fs::write(&path, SAMPLE).unwrap();
        let defs = Definitions::load(&path).unwrap();
        assert_eq!(defs.relations()[1].name(), "likes");
    }
}
