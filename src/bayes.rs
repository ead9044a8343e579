//! Discrete Bayesian networks over boolean variables.
//!
//! Each variable keeps a conditional probability table: a list of mother
//! sets (assignments to some of its parents), each with the probability that
//! the variable is true given those mothers. Marginals are computed by brute
//! force, summing joint probabilities over every full assignment, which is
//! exact but exponential in the number of variables.
//!
//! The mother sets of a variable are expected to partition the full
//! assignments, so that exactly one of them applies to any given assignment.
//! This is not checked: when several apply, all of their factors are
//! multiplied in.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{KnowrepError, Result};
use crate::network::EntityHasher;
use crate::settings::Settings;

// ------------- Mothers -------------
/// An unordered set of (variable, value) pairs conditioning a probability.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Mothers(BTreeSet<(String, bool)>);

impl Mothers {
    pub fn new<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, bool)>,
    {
        Self(pairs.into_iter().map(|(v, b)| (v.into(), b)).collect())
    }
    /// No mothers: an unconditional probability.
    pub fn none() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(v, b)| (v.as_str(), *b))
    }
    fn holds_in(&self, assignment: &HashSet<(&str, bool), EntityHasher>) -> bool {
        self.iter().all(|pair| assignment.contains(&pair))
    }
}
impl fmt::Display for Mothers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::new();
        for (v, b) in self.iter() {
            s += &format!("({},{}),", v, b);
        }
        s.pop();
        write!(f, "{{{}}}", s)
    }
}

pub type Table = Vec<(Mothers, f64)>;

// ------------- BayesNet -------------
#[derive(Debug, Clone, Default)]
pub struct BayesNet {
    dependencies: BTreeMap<String, Table>,
    settings: Settings,
}

impl BayesNet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            dependencies: BTreeMap::new(),
            settings,
        }
    }
    pub fn from_dependencies(dependencies: BTreeMap<String, Table>) -> Self {
        Self {
            dependencies,
            settings: Settings::default(),
        }
    }
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
    pub fn entries(&self, var: &str) -> Result<&Table> {
        self.dependencies
            .get(var)
            .ok_or_else(|| KnowrepError::UnknownVariable(var.to_string()))
    }

    /// Sets P(`var` = true | `mothers`) to `prob`. Returns whether an entry
    /// for the same mothers was already kept (and has now been replaced).
    pub fn add(&mut self, var: &str, mothers: Mothers, prob: f64) -> Result<bool> {
        if !(0.0..=1.0).contains(&prob) {
            return Err(KnowrepError::InvalidProbability {
                variable: var.to_string(),
                probability: prob,
            });
        }
        let table = self.dependencies.entry(var.to_string()).or_default();
        let previously_kept = match table.iter_mut().find(|(m, _)| *m == mothers) {
            Some(entry) => {
                warn!(var, %mothers, old = entry.1, new = prob, "replacing table entry");
                entry.1 = prob;
                true
            }
            None => {
                debug!(var, %mothers, prob, "add");
                table.push((mothers, prob));
                false
            }
        };
        Ok(previously_kept)
    }

    /// Probability of a full assignment of the network's variables.
    pub fn joint_prob<S: AsRef<str>>(&self, assignment: &[(S, bool)]) -> Result<f64> {
        let assignment: HashSet<(&str, bool), EntityHasher> =
            assignment.iter().map(|(v, b)| (v.as_ref(), *b)).collect();
        self.joint_of(&assignment)
    }

    fn joint_of(&self, assignment: &HashSet<(&str, bool), EntityHasher>) -> Result<f64> {
        let mut prob = 1.0;
        for &(var, val) in assignment {
            for (mothers, p) in self.entries(var)? {
                if mothers.holds_in(assignment) {
                    prob *= if val { *p } else { 1.0 - p };
                }
            }
        }
        Ok(prob)
    }

    /// Marginal P(`variable` = `value`), summing the joint probability of
    /// every assignment of the other variables.
    pub fn individual_prob(&self, variable: &str, value: bool) -> Result<f64> {
        self.entries(variable)?;
        let others: Vec<&str> = self.variables().filter(|v| *v != variable).collect();
        let limit = self.settings.max_enumeration_variables.min(63);
        if others.len() > limit {
            return Err(KnowrepError::TooManyVariables {
                count: others.len(),
                limit,
            });
        }
        let mut total = 0.0;
        for mask in 0u64..(1u64 << others.len()) {
            let mut assignment: HashSet<(&str, bool), EntityHasher> = HashSet::default();
            assignment.insert((variable, value));
            for (i, other) in others.iter().enumerate() {
                assignment.insert((*other, mask & (1 << i) == 0));
            }
            let joint = self.joint_of(&assignment)?;
            trace!(mask, joint, "assignment");
            total += joint;
        }
        debug!(variable, value, assignments = 1u64 << others.len(), total, "individual_prob");
        Ok(total)
    }
}
