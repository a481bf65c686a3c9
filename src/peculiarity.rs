use crate::attributes::Attribute;
use crate::matcher::Match;

/// A predicate over observable facts, gating a catalog variant's
/// eligibility.
///
/// The tree is finite and acyclic by construction: children are owned
/// values supplied when the catalog is declared.
#[derive(Debug, Clone)]
pub enum Peculiarity {
    /// A single fact test: the attribute's observed value must satisfy the
    /// acceptance spec.
    Distinct { attribute: Attribute, accepts: Match },
    /// Logical OR over the children; an empty list never holds.
    OneOf(Vec<Peculiarity>),
    /// Logical AND over the children; an empty list always holds.
    AllOf(Vec<Peculiarity>),
}

impl Peculiarity {
    pub fn distinct(attribute: Attribute, accepts: Match) -> Self {
        Peculiarity::Distinct { attribute, accepts }
    }

    pub fn one_of(children: Vec<Peculiarity>) -> Self {
        Peculiarity::OneOf(children)
    }

    pub fn all_of(children: Vec<Peculiarity>) -> Self {
        Peculiarity::AllOf(children)
    }
}
