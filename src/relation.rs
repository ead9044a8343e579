// used to identify relation kinds given by name
use std::str::FromStr;
// used to print out readable forms of a relation
use std::fmt;
// values need to be hashable so that they can be tallied
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{KnowrepError, Result};

// ------------- RelationKind -------------
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum RelationKind {
    Association,
    AssocOne,
    AssocNum,
    Subtype,
    Member,
}

impl RelationKind {
    pub const ALL: [RelationKind; 5] = [
        RelationKind::Association,
        RelationKind::AssocOne,
        RelationKind::AssocNum,
        RelationKind::Subtype,
        RelationKind::Member,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            RelationKind::Association => "Association",
            RelationKind::AssocOne => "AssocOne",
            RelationKind::AssocNum => "AssocNum",
            RelationKind::Subtype => "Subtype",
            RelationKind::Member => "Member",
        }
    }
    /// AssocOne and AssocNum are themselves associations.
    pub fn is_association(&self) -> bool {
        matches!(
            self,
            RelationKind::Association | RelationKind::AssocOne | RelationKind::AssocNum
        )
    }
    pub fn is_taxonomic(&self) -> bool {
        matches!(self, RelationKind::Subtype | RelationKind::Member)
    }
    /// "Is-a" test between kinds: a relation of kind `self` counts as a `kind`.
    pub fn is_a(&self, kind: RelationKind) -> bool {
        match kind {
            RelationKind::Association => self.is_association(),
            _ => *self == kind,
        }
    }
}
impl FromStr for RelationKind {
    type Err = KnowrepError;
    fn from_str(s: &str) -> Result<Self> {
        RelationKind::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| KnowrepError::MalformedQuery(format!("unknown relation kind '{}'", s)))
    }
}
impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ------------- Value -------------
// The second entity of a relation: another entity (or text) for most kinds,
// a number for AssocNum.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}
// Numbers compare by bit pattern so that Eq and Hash agree. The two zeros
// share one pattern.
fn number_bits(n: f64) -> u64 {
    if n == 0.0 { 0 } else { n.to_bits() }
}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => number_bits(*a) == number_bits(*b),
            _ => false,
        }
    }
}
impl Eq for Value {}
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Text(s) => {
                0u8.hash(state);
                s.hash(state);
            }
            Value::Number(n) => {
                1u8.hash(state);
                number_bits(*n).hash(state);
            }
        }
    }
}
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}
impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(if n == 0.0 { 0.0 } else { n })
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

// ------------- Relation -------------
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Relation {
    kind: RelationKind,
    entity1: String,
    name: String,
    entity2: Value,
}

impl Relation {
    pub const SUBTYPE: &'static str = "subtype";
    pub const MEMBER: &'static str = "member";

    fn new(kind: RelationKind, entity1: &str, name: &str, entity2: Value) -> Self {
        Self {
            kind,
            entity1: entity1.to_string(),
            name: name.to_string(),
            entity2,
        }
    }
    pub fn association(entity1: &str, name: &str, entity2: &str) -> Self {
        Self::new(RelationKind::Association, entity1, name, entity2.into())
    }
    pub fn assoc_one(entity1: &str, name: &str, entity2: &str) -> Self {
        Self::new(RelationKind::AssocOne, entity1, name, entity2.into())
    }
    pub fn assoc_num(entity1: &str, name: &str, entity2: f64) -> Self {
        Self::new(RelationKind::AssocNum, entity1, name, entity2.into())
    }
    pub fn subtype(sub: &str, sup: &str) -> Self {
        Self::new(RelationKind::Subtype, sub, Self::SUBTYPE, sup.into())
    }
    pub fn member(obj: &str, ty: &str) -> Self {
        Self::new(RelationKind::Member, obj, Self::MEMBER, ty.into())
    }
    // Fields are only exposed through getters, so a relation
    // stays immutable once it has been created.
    pub fn kind(&self) -> RelationKind {
        self.kind
    }
    pub fn entity1(&self) -> &str {
        &self.entity1
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn entity2(&self) -> &Value {
        &self.entity2
    }
    pub fn is(&self, kind: RelationKind) -> bool {
        self.kind.is_a(kind)
    }
    pub fn is_association(&self) -> bool {
        self.kind.is_association()
    }
    pub fn is_assoc_one(&self) -> bool {
        self.kind == RelationKind::AssocOne
    }
    pub fn is_assoc_num(&self) -> bool {
        self.kind == RelationKind::AssocNum
    }
    pub fn is_subtype(&self) -> bool {
        self.kind == RelationKind::Subtype
    }
    pub fn is_member(&self) -> bool {
        self.kind == RelationKind::Member
    }
    pub fn is_taxonomic(&self) -> bool {
        self.kind.is_taxonomic()
    }
    /// Whether `entity` takes part in the relation on either side.
    pub fn involves(&self, entity: &str) -> bool {
        self.entity1 == entity || self.entity2 == *entity
    }
}
impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({},{})", self.name, self.entity1, self.entity2)
    }
}

// ------------- Declaration -------------
// A relation as asserted by some user.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Declaration {
    user: String,
    relation: Relation,
}

impl Declaration {
    pub fn new(user: &str, relation: Relation) -> Self {
        Self {
            user: user.to_string(),
            relation,
        }
    }
    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn relation(&self) -> &Relation {
        &self.relation
    }
}
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "decl({},{})", self.user, self.relation)
    }
}
