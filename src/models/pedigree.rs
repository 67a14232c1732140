//! Pedigree tree models
//!
//! These are derived, short-lived structures produced by the pedigree walker.
//! Each node owns its two parent subtrees; nothing here is persisted.

use crate::models::animal::AnimalRecord;
use crate::models::types::Sex;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Public attributes of an animal shown in pedigree output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalSummary {
    /// Animal identifier
    pub id: String,
    /// Sex of the animal
    pub sex: Sex,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Stored category label
    pub category: Option<String>,
}

impl From<&AnimalRecord> for AnimalSummary {
    fn from(animal: &AnimalRecord) -> Self {
        Self {
            id: animal.id.clone(),
            sex: animal.sex,
            birth_date: animal.birth_date,
            category: animal.current_category.clone(),
        }
    }
}

/// An ancestor at a given generation, with its own known parents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AncestorNode {
    /// The ancestor's public attributes
    pub animal: AnimalSummary,
    /// Generations above the subject (parents are generation 1)
    pub generation: u32,
    /// Father subtree, if known and within depth
    pub father: Option<Box<AncestorNode>>,
    /// Mother subtree, if known and within depth
    pub mother: Option<Box<AncestorNode>>,
}

impl AncestorNode {
    /// Create a leaf node
    #[must_use]
    pub fn new(animal: AnimalSummary, generation: u32) -> Self {
        Self {
            animal,
            generation,
            father: None,
            mother: None,
        }
    }

    /// Number of generations spanned by this subtree, counting this node
    #[must_use]
    pub fn depth(&self) -> u32 {
        let father = self.father.as_ref().map_or(0, |n| n.depth());
        let mother = self.mother.as_ref().map_or(0, |n| n.depth());
        1 + father.max(mother)
    }

    /// Number of nodes in this subtree
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.father.as_ref().map_or(0, |n| n.node_count())
            + self.mother.as_ref().map_or(0, |n| n.node_count())
    }

    /// Visit every node of this subtree, father side first
    pub fn for_each<'a>(&'a self, visit: &mut impl FnMut(&'a AncestorNode)) {
        visit(self);
        if let Some(father) = &self.father {
            father.for_each(visit);
        }
        if let Some(mother) = &self.mother {
            mother.for_each(visit);
        }
    }
}

/// Genealogy of one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PedigreeTree {
    /// The subject's own attributes
    pub subject: AnimalSummary,
    /// Paternal subtree
    pub paternal: Option<AncestorNode>,
    /// Maternal subtree
    pub maternal: Option<AncestorNode>,
    /// Depth that was requested
    pub depth: u32,
    /// When the tree was built
    pub generated_at: DateTime<Utc>,
}

impl PedigreeTree {
    /// The zero, one or two known parent subtrees, father first
    pub fn ancestors(&self) -> impl Iterator<Item = &AncestorNode> {
        self.paternal.iter().chain(self.maternal.iter())
    }

    /// All ancestors at the given generation, father side first
    #[must_use]
    pub fn ancestors_at_generation(&self, generation: u32) -> Vec<&AncestorNode> {
        let mut found = Vec::new();
        for root in self.ancestors() {
            root.for_each(&mut |node| {
                if node.generation == generation {
                    found.push(node);
                }
            });
        }
        found
    }

    /// Number of ancestors resolved in the tree
    #[must_use]
    pub fn known_ancestor_count(&self) -> usize {
        self.ancestors().map(AncestorNode::node_count).sum()
    }
}
