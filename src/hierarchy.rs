//! Upward walks over the taxonomy formed by Subtype and Member declarations.
//!
//! The taxonomy is expected to be acyclic. Every walk keeps track of the
//! entities on its current path, and revisiting one of them fails with
//! [`KnowrepError::CycleInHierarchy`] instead of recursing forever. Entities
//! reached through different branches (diamonds) are not cycles.

use std::collections::HashSet;

use tracing::{trace, warn};

use crate::error::{KnowrepError, Result};
use crate::network::{EntityHasher, SemanticNetwork};

// ------------- Trail -------------
// The entities on the path from the start of a walk to where it currently is.
#[derive(Debug, Default)]
pub(crate) struct Trail {
    on_path: HashSet<String, EntityHasher>,
}

impl Trail {
    pub(crate) fn new() -> Self {
        Self::default()
    }
    pub(crate) fn enter(&mut self, entity: &str) -> Result<()> {
        if !self.on_path.insert(entity.to_string()) {
            warn!(entity, "cycle in taxonomy");
            return Err(KnowrepError::CycleInHierarchy {
                entity: entity.to_string(),
            });
        }
        Ok(())
    }
    pub(crate) fn leave(&mut self, entity: &str) {
        self.on_path.remove(entity);
    }
}

impl SemanticNetwork {
    /// Direct supertypes and types of `entity`, in insertion order.
    pub fn parents<'a>(&'a self, entity: &str) -> Vec<&'a str> {
        self.declarations()
            .iter()
            .map(|d| d.relation())
            .filter(|r| r.is_taxonomic() && r.entity1() == entity)
            .filter_map(|r| r.entity2().as_text())
            .collect()
    }

    /// Direct subtypes and members of `ty`, in insertion order.
    pub fn children<'a>(&'a self, ty: &str) -> Vec<&'a str> {
        self.declarations()
            .iter()
            .map(|d| d.relation())
            .filter(|r| r.is_taxonomic() && *r.entity2() == *ty)
            .map(|r| r.entity1())
            .collect()
    }

    /// Whether `goal` lies above `start` in the taxonomy.
    ///
    /// The direct check only fires when `start` has a single parent; with
    /// several parents the search continues above each of them.
    pub fn predecessor(&self, goal: &str, start: &str) -> Result<bool> {
        let mut trail = Trail::new();
        self.predecessor_from(goal, start, &mut trail)
    }

    fn predecessor_from(&self, goal: &str, start: &str, trail: &mut Trail) -> Result<bool> {
        let parents = self.parents(start);
        if parents.len() == 1 && parents[0] == goal {
            return Ok(true);
        }
        trail.enter(start)?;
        let mut found = false;
        for parent in parents {
            trace!(goal, start, parent, "predecessor step");
            if self.predecessor_from(goal, parent, trail)? {
                found = true;
                break;
            }
        }
        trail.leave(start);
        Ok(found)
    }

    /// The chain of entities from `b` up to its ancestor `a`, both included.
    /// `None` when `b` has no parents or `a` cannot be reached.
    pub fn predecessor_path(&self, a: &str, b: &str) -> Result<Option<Vec<String>>> {
        let mut trail = Trail::new();
        self.predecessor_path_from(a, b, &mut trail)
    }

    fn predecessor_path_from(
        &self,
        a: &str,
        b: &str,
        trail: &mut Trail,
    ) -> Result<Option<Vec<String>>> {
        let parents = self.parents(b);
        if parents.is_empty() {
            return Ok(None);
        }
        if parents.iter().any(|p| *p == a) {
            return Ok(Some(vec![b.to_string(), a.to_string()]));
        }
        trail.enter(b)?;
        let mut path = None;
        for parent in parents {
            if let Some(mut upper) = self.predecessor_path_from(a, parent, trail)? {
                upper.insert(0, b.to_string());
                path = Some(upper);
                break;
            }
        }
        trail.leave(b);
        Ok(path)
    }
}
