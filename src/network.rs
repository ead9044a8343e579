// the listings are de-duplicated through ordered sets
use std::collections::BTreeSet;
use core::hash::BuildHasherDefault;
// we use a fast hashing algo for sets and maps keyed by entities and values
use seahash::SeaHasher;
// used to print out readable forms of a network
use std::fmt;

use tracing::debug;

use crate::error::{KnowrepError, Result};
use crate::relation::{Declaration, RelationKind, Value};
use crate::settings::Settings;

pub type EntityHasher = BuildHasherDefault<SeaHasher>;

// ------------- Filter -------------
/// Criteria for [`SemanticNetwork::query_local`]. Every criterion left unset
/// matches everything; the ones that are set must all hold.
#[derive(Debug, Default, Clone)]
pub struct Filter<'f> {
    user: Option<&'f str>,
    entity1: Option<&'f str>,
    name: Option<&'f str>,
    kinds: Option<Vec<RelationKind>>,
    entity2: Option<Value>,
}

impl<'f> Filter<'f> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn user(mut self, user: &'f str) -> Self {
        self.user = Some(user);
        self
    }
    pub fn entity1(mut self, entity1: &'f str) -> Self {
        self.entity1 = Some(entity1);
        self
    }
    pub fn name(mut self, name: &'f str) -> Self {
        self.name = Some(name);
        self
    }
    /// Adds a kind to the set of accepted kinds.
    pub fn kind(mut self, kind: RelationKind) -> Self {
        self.kinds.get_or_insert_with(Vec::new).push(kind);
        self
    }
    /// Accepts a relation of any of the given kinds. An empty set is
    /// rejected when the query runs.
    pub fn kinds<I: IntoIterator<Item = RelationKind>>(mut self, kinds: I) -> Self {
        self.kinds.get_or_insert_with(Vec::new).extend(kinds);
        self
    }
    pub fn entity2<V: Into<Value>>(mut self, entity2: V) -> Self {
        self.entity2 = Some(entity2.into());
        self
    }
    fn validate(&self) -> Result<()> {
        match &self.kinds {
            Some(kinds) if kinds.is_empty() => Err(KnowrepError::MalformedQuery(
                String::from("empty set of relation kinds"),
            )),
            _ => Ok(()),
        }
    }
    pub fn matches(&self, declaration: &Declaration) -> bool {
        let relation = declaration.relation();
        self.user.is_none_or(|u| declaration.user() == u)
            && self.entity1.is_none_or(|e| relation.entity1() == e)
            && self.name.is_none_or(|n| relation.name() == n)
            && self
                .kinds
                .as_ref()
                .is_none_or(|kinds| kinds.iter().any(|k| relation.is(*k)))
            && self.entity2.as_ref().is_none_or(|e| relation.entity2() == e)
    }
}

// ------------- SemanticNetwork -------------
// Owns the declarations in the order they were inserted. All queries
// are answered from this sequence.
#[derive(Debug, Clone, Default)]
pub struct SemanticNetwork {
    declarations: Vec<Declaration>,
    settings: Settings,
}

impl SemanticNetwork {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            declarations: Vec::new(),
            settings,
        }
    }
    pub fn from_declarations(declarations: Vec<Declaration>) -> Self {
        Self {
            declarations,
            settings: Settings::default(),
        }
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
    pub fn len(&self) -> usize {
        self.declarations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
    pub fn insert(&mut self, declaration: Declaration) {
        debug!(%declaration, "insert");
        self.declarations.push(declaration);
    }
    pub fn query_local(&self, filter: &Filter) -> Result<Vec<&Declaration>> {
        filter.validate()?;
        Ok(self.declarations.iter().filter(|d| filter.matches(d)).collect())
    }

    // ------------- listings -------------
    pub fn list_associations(&self) -> Vec<String> {
        self.declarations
            .iter()
            .map(Declaration::relation)
            .filter(|r| r.is_association())
            .map(|r| r.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    pub fn list_objects(&self) -> Vec<String> {
        self.declarations
            .iter()
            .map(Declaration::relation)
            .filter(|r| r.is_member())
            .map(|r| r.entity1().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    pub fn list_users(&self) -> Vec<String> {
        self.declarations
            .iter()
            .map(|d| d.user().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    pub fn list_types(&self) -> Vec<String> {
        self.declarations
            .iter()
            .map(Declaration::relation)
            .filter(|r| r.is_taxonomic())
            .map(|r| r.entity2().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    pub fn list_local_associations(&self, entity: &str) -> Vec<String> {
        self.declarations
            .iter()
            .map(Declaration::relation)
            .filter(|r| r.is_association() && r.entity1() == entity)
            .map(|r| r.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    pub fn list_relations_by_user(&self, user: &str) -> Vec<String> {
        self.declarations
            .iter()
            .filter(|d| d.user() == user)
            .map(|d| d.relation().name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    /// Number of distinct association names the user has declared.
    pub fn associations_by_user(&self, user: &str) -> usize {
        self.declarations
            .iter()
            .filter(|d| d.user() == user && d.relation().is_association())
            .map(|d| d.relation().name())
            .collect::<BTreeSet<_>>()
            .len()
    }
    /// Pairs of (association name, user) declared with `entity` as entity1.
    pub fn list_local_associations_by_entity(&self, entity: &str) -> Vec<(String, String)> {
        self.declarations
            .iter()
            .filter(|d| d.relation().is_association() && d.relation().entity1() == entity)
            .map(|d| (d.relation().name().to_string(), d.user().to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl fmt::Display for SemanticNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::new();
        for d in &self.declarations {
            s += &(d.to_string() + ", ");
        }
        s.truncate(s.len().saturating_sub(2));
        write!(f, "[{}]", s)
    }
}
