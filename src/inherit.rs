//! Queries that propagate associations through the taxonomy.
//!
//! Upward queries (`query`, `query2`, `query_cancel`, `query_assoc_value`)
//! let an entity inherit the associations declared on its types and
//! supertypes, most specific level first. Downward queries (`query_down`,
//! `query_induce`) collect what the members of a type declare, so that a
//! typical value for the type can be induced from them.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::hierarchy::Trail;
use crate::network::{EntityHasher, SemanticNetwork};
use crate::relation::{Declaration, RelationKind, Value};

// ------------- Tally -------------
/// Frequency counter that remembers the order in which values were first seen.
#[derive(Debug, Default)]
pub struct Tally<'v> {
    counts: Vec<(&'v Value, usize)>,
    index: HashMap<&'v Value, usize, EntityHasher>,
    total: usize,
}

impl<'v> Tally<'v> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, value: &'v Value) {
        match self.index.get(value) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(value, self.counts.len());
                self.counts.push((value, 1));
            }
        }
        self.total += 1;
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
    /// The value with the highest count; the first one seen wins ties.
    pub fn most_common(&self) -> Option<(&'v Value, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&'v Value, usize)>, &(value, count)| match best {
                Some((_, c)) if c >= count => best,
                _ => Some((value, count)),
            })
    }
    /// All values by descending count, ties kept in first-seen order.
    pub fn ranked(&self) -> Vec<(&'v Value, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<'v> Extend<&'v Value> for Tally<'v> {
    fn extend<I: IntoIterator<Item = &'v Value>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }
}

// ------------- LocalAssoc -------------
/// A value of a multi-valued association with its own share of the local
/// declarations and the running share up to and including it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueShare {
    pub value: Value,
    pub share: f64,
    pub cumulative: f64,
}

/// Summary of the local declarations of an association, shaped by its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LocalAssoc {
    /// Single-valued: the most frequent value and its share.
    One { value: Value, share: f64 },
    /// Numeric: the mean of the declared numbers.
    Mean(f64),
    /// Multi-valued: the most frequent values covering the threshold share.
    Many(Vec<ValueShare>),
}

impl SemanticNetwork {
    // Association-family declarations of `name` with `entity` as entity1.
    fn local_associations<'a>(&'a self, entity: &str, name: &str) -> Vec<&'a Declaration> {
        self.declarations()
            .iter()
            .filter(|d| {
                let r = d.relation();
                r.is_association() && r.entity1() == entity && r.name() == name
            })
            .collect()
    }

    /// Associations involving `entity`, followed by everything inherited from
    /// its parents, most specific level first.
    pub fn query(&self, entity: &str, rel: Option<&str>) -> Result<Vec<&Declaration>> {
        let mut trail = Trail::new();
        let result = self.query_from(entity, rel, &mut trail)?;
        debug!(entity, ?rel, found = result.len(), "query");
        Ok(result)
    }

    fn query_from(&self, entity: &str, rel: Option<&str>, trail: &mut Trail) -> Result<Vec<&Declaration>> {
        let mut result: Vec<&Declaration> = self
            .declarations()
            .iter()
            .filter(|d| {
                let r = d.relation();
                r.is_association() && r.involves(entity) && rel.is_none_or(|n| r.name() == n)
            })
            .collect();
        trail.enter(entity)?;
        for parent in self.parents(entity) {
            trace!(entity, parent, "inheriting");
            result.extend(self.query_from(parent, rel, trail)?);
        }
        trail.leave(entity);
        Ok(result)
    }

    /// Like [`query`](Self::query), preceded by the entity's own Subtype and
    /// Member declarations.
    pub fn query2(&self, entity: &str, rel: Option<&str>) -> Result<Vec<&Declaration>> {
        let mut result: Vec<&Declaration> = self
            .declarations()
            .iter()
            .filter(|d| {
                let r = d.relation();
                r.is_taxonomic() && r.entity1() == entity && rel.is_none_or(|n| r.name() == n)
            })
            .collect();
        result.extend(self.query(entity, rel)?);
        Ok(result)
    }

    /// Inheritance with cancellation: associations declared locally on
    /// `entity` hide inherited ones of the same name.
    ///
    /// The hidden names are taken from the local declarations only. Ancestors
    /// are merged with plain [`query`](Self::query), so a supertype can bring
    /// back a name that an intermediate type had overridden.
    pub fn query_cancel(&self, entity: &str, rel: &str) -> Result<Vec<&Declaration>> {
        let mut result = self.local_associations(entity, rel);
        let cancelled: HashSet<&str, EntityHasher> =
            result.iter().map(|d| d.relation().name()).collect();
        let mut trail = Trail::new();
        trail.enter(entity)?;
        for parent in self.parents(entity) {
            let inherited = self.query_from(parent, Some(rel), &mut trail)?;
            result.extend(
                inherited
                    .into_iter()
                    .filter(|d| !cancelled.contains(d.relation().name())),
            );
        }
        debug!(entity, rel, cancelled = cancelled.len(), found = result.len(), "query_cancel");
        Ok(result)
    }

    /// Every declaration of `assoc` found below `ty` in the taxonomy. With
    /// `first` set, the declarations on `ty` itself are left out.
    pub fn query_down(&self, ty: &str, assoc: &str, first: bool) -> Result<Vec<&Declaration>> {
        let mut trail = Trail::new();
        self.query_down_from(ty, assoc, first, &mut trail)
    }

    fn query_down_from(&self, ty: &str, assoc: &str, first: bool, trail: &mut Trail) -> Result<Vec<&Declaration>> {
        let mut result = if first {
            Vec::new()
        } else {
            self.local_associations(ty, assoc)
        };
        trail.enter(ty)?;
        for child in self.children(ty) {
            trace!(ty, child, "descending");
            result.extend(self.query_down_from(child, assoc, false, trail)?);
        }
        trail.leave(ty);
        Ok(result)
    }

    /// The value of `assoc` most often declared below `ty`.
    pub fn query_induce(&self, ty: &str, assoc: &str) -> Result<Option<Value>> {
        let below = self.query_down(ty, assoc, true)?;
        let mut tally = Tally::new();
        tally.extend(below.iter().map(|d| d.relation().entity2()));
        let induced = tally.most_common().map(|(value, _)| value.clone());
        debug!(ty, assoc, samples = tally.total(), induced = ?induced, "query_induce");
        Ok(induced)
    }

    /// Summarizes the local declarations of `rel` on `entity` according to
    /// the kind of the first of them. `None` when there are none.
    pub fn query_local_assoc(&self, entity: &str, rel: &str) -> Result<Option<LocalAssoc>> {
        let local = self.local_associations(entity, rel);
        let Some(first) = local.first() else {
            return Ok(None);
        };
        let n = local.len() as f64;
        let mut tally = Tally::new();
        tally.extend(local.iter().map(|d| d.relation().entity2()));
        let summary = match first.relation().kind() {
            RelationKind::AssocOne => tally.most_common().map(|(value, count)| LocalAssoc::One {
                value: value.clone(),
                share: count as f64 / n,
            }),
            RelationKind::AssocNum => {
                let numbers: Vec<f64> = local
                    .iter()
                    .filter_map(|d| d.relation().entity2().as_number())
                    .collect();
                if numbers.is_empty() {
                    None
                } else {
                    Some(LocalAssoc::Mean(numbers.iter().sum::<f64>() / numbers.len() as f64))
                }
            }
            _ => {
                let threshold = self.settings().multi_value_threshold;
                let mut running = 0.0;
                let mut shares = Vec::new();
                for (value, count) in tally.ranked() {
                    if running >= threshold {
                        break;
                    }
                    let share = count as f64 / n;
                    running += share;
                    shares.push(ValueShare {
                        value: value.clone(),
                        share,
                        cumulative: running,
                    });
                }
                Some(LocalAssoc::Many(shares))
            }
        };
        Ok(summary)
    }

    /// A single value for `rel` on `entity`. A unique local value wins
    /// outright; otherwise local and inherited occurrences are counted
    /// together and the most frequent value (first seen on ties) is returned.
    pub fn query_assoc_value(&self, entity: &str, rel: &str) -> Result<Option<Value>> {
        let local = self.local_associations(entity, rel);
        let mut tally = Tally::new();
        tally.extend(local.iter().map(|d| d.relation().entity2()));
        if tally.distinct() == 1 {
            return Ok(tally.most_common().map(|(value, _)| value.clone()));
        }
        let mut trail = Trail::new();
        trail.enter(entity)?;
        let mut inherited = Vec::new();
        for parent in self.parents(entity) {
            inherited.extend(self.query_from(parent, Some(rel), &mut trail)?);
        }
        tally.extend(inherited.iter().map(|d| d.relation().entity2()));
        let value = tally.most_common().map(|(value, _)| value.clone());
        debug!(entity, rel, local = local.len(), inherited = inherited.len(), value = ?value, "query_assoc_value");
        Ok(value)
    }
}
