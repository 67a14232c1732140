//! Pedigree walker
//!
//! Expands the ancestry of an animal into a tree by following father and
//! mother links up to a fixed number of generations. The walk is a plain
//! depth-bounded tree expansion: the same animal may appear at several
//! positions and nothing is memoized, so a corrupted (cyclic) ancestry is
//! still bounded by the depth cutoff.

use chrono::Utc;
use log::debug;

use crate::common::traits::AnimalLookup;
use crate::error::{HerdbookError, Result};
use crate::models::{AncestorNode, AnimalSummary, PedigreeTree};

/// Builds ancestor trees from registry lookups
#[derive(Debug, Clone)]
pub struct PedigreeWalker<L: AnimalLookup> {
    lookup: L,
    parallel_subtrees: bool,
}

impl<L: AnimalLookup> PedigreeWalker<L> {
    /// Create a walker over a registry lookup
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self {
            lookup,
            parallel_subtrees: false,
        }
    }

    /// Resolve the father and mother subtrees on separate rayon tasks
    #[must_use]
    pub fn with_parallel_subtrees(mut self, parallel: bool) -> Self {
        self.parallel_subtrees = parallel;
        self
    }

    /// Build the ancestor node for `animal_id` at `current_generation`.
    ///
    /// Returns `Ok(None)` when the identifier is absent, when
    /// `current_generation >= max_generation`, or when the registry does not
    /// hold the animal. Lookup failures are propagated.
    pub fn build_ancestor(
        &self,
        animal_id: Option<&str>,
        current_generation: u32,
        max_generation: u32,
    ) -> Result<Option<AncestorNode>> {
        let Some(id) = animal_id else {
            return Ok(None);
        };
        if current_generation >= max_generation {
            return Ok(None);
        }

        let Some(animal) = self.lookup.find_animal(id)? else {
            debug!("Ancestor {id} not in registry, treating as foundation animal");
            return Ok(None);
        };

        let next = current_generation + 1;
        let (father, mother) = if self.parallel_subtrees {
            rayon::join(
                || self.build_ancestor(animal.father_id.as_deref(), next, max_generation),
                || self.build_ancestor(animal.mother_id.as_deref(), next, max_generation),
            )
        } else {
            (
                self.build_ancestor(animal.father_id.as_deref(), next, max_generation),
                self.build_ancestor(animal.mother_id.as_deref(), next, max_generation),
            )
        };

        let mut node = AncestorNode::new(AnimalSummary::from(&animal), current_generation);
        node.father = father?.map(Box::new);
        node.mother = mother?.map(Box::new);
        Ok(Some(node))
    }

    /// Build the genealogy of `subject_id` with ancestors at generations
    /// `1..=depth`.
    ///
    /// The depth is not range-checked here; callers validate it.
    pub fn genealogy(&self, subject_id: &str, depth: u32) -> Result<PedigreeTree> {
        let subject = self
            .lookup
            .find_animal(subject_id)?
            .ok_or_else(|| HerdbookError::not_found(subject_id))?;

        let max_generation = depth.saturating_add(1);
        let paternal = self.build_ancestor(subject.father_id.as_deref(), 1, max_generation)?;
        let maternal = self.build_ancestor(subject.mother_id.as_deref(), 1, max_generation)?;

        Ok(PedigreeTree {
            subject: AnimalSummary::from(&subject),
            paternal,
            maternal,
            depth,
            generated_at: Utc::now(),
        })
    }
}
