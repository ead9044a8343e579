//! Knowrep – two small knowledge representation engines for teaching exercises.
//!
//! ## Semantic networks
//! A [`network::SemanticNetwork`] is an append-only sequence of
//! [`relation::Declaration`]s: relations asserted by users. A
//! [`relation::Relation`] is a triple `name(entity1,entity2)` of one of the
//! kinds in [`relation::RelationKind`]:
//! * `Association` – an arbitrary named fact between two entities, with the
//!   single-valued `AssocOne` and numeric `AssocNum` variants;
//! * `Subtype` – `subtype(sub,super)`, a type below another type;
//! * `Member` – `member(instance,type)`, an instance of a type.
//!
//! Subtype and Member declarations form a taxonomy. Associations declared on a
//! type are inherited by its subtypes and members ([`network::SemanticNetwork::query`]),
//! local declarations may cancel inherited ones ([`network::SemanticNetwork::query_cancel`]),
//! and typical values of a type can be induced from what its members declare
//! ([`network::SemanticNetwork::query_induce`]). Walks over the taxonomy fail with
//! [`KnowrepError::CycleInHierarchy`] rather than looping when it is cyclic.
//!
//! ## Bayesian networks
//! A [`bayes::BayesNet`] keeps, for each boolean variable, the probability
//! that it is true given assignments of its mother variables. It computes the
//! joint probability of full assignments and, by enumerating all of them, the
//! marginal probability of a single variable.
//!
//! ## Settings
//! [`settings::Settings`] holds the few tunables (the share threshold for
//! multi-valued associations, the enumeration limit and the log filter). They
//! can be read from a configuration file and `KNOWREP_*` environment variables.
//!
//! ## Quick Start
//! ```
//! use knowrep::network::SemanticNetwork;
//! use knowrep::relation::{Declaration, Relation};
//! let mut sn = SemanticNetwork::new();
//! sn.insert(Declaration::new("descartes", Relation::member("socrates", "homem")));
//! sn.insert(Declaration::new("darwin", Relation::subtype("homem", "mamifero")));
//! sn.insert(Declaration::new("darwin", Relation::association("mamifero", "pelo", "sim")));
//! let inherited = sn.query("socrates", Some("pelo")).unwrap();
//! assert_eq!(inherited[0].to_string(), "decl(darwin,pelo(mamifero,sim))");
//! assert!(sn.predecessor("mamifero", "socrates").unwrap());
//! ```

pub mod bayes;
pub mod error;
pub mod hierarchy;
pub mod inherit;
pub mod network;
pub mod relation;
pub mod settings;

pub use error::{KnowrepError, Result};
