use std::fmt;
use fnv::FnvHashSet;
use errors::*;
use graph_models::domains::OutcomeDomain;
use graph_models::traits::Domain;

/// A discrete random variable of a network. Its id is the position in the
/// network's arena and is what factors use to hash and compare variables.
#[derive(Clone)]
pub struct DiscreteVariable {
    id: usize,
    name: String,
    domain: OutcomeDomain,
    parents: Vec<usize>,
    /// CPT over `[parents..., self]`, last variable varies fastest
    cpt: Option<Vec<f64>>
}

impl DiscreteVariable {
    pub fn new(id: usize, name: &str, outcomes: Vec<String>) -> Result<DiscreteVariable> {
        if outcomes.len() < 2 {
            bail!(ErrorKind::InvalidDomain(format!("variable '{}' needs at least 2 outcomes, got {}", name, outcomes.len())));
        }

        let mut seen = FnvHashSet::default();
        for outcome in &outcomes {
            if !seen.insert(outcome.as_str()) {
                bail!(ErrorKind::InvalidDomain(format!("outcome '{}' of variable '{}' is declared twice", outcome, name)));
            }
        }

        Ok(DiscreteVariable {
            id,
            name: name.to_owned(),
            domain: OutcomeDomain::new(outcomes),
            parents: Vec::new(),
            cpt: None
        })
    }

    #[inline]
    pub fn get_id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn get_domain(&self) -> &OutcomeDomain {
        &self.domain
    }

    #[inline]
    pub fn get_domain_size(&self) -> usize {
        self.domain.numel()
    }

    /// Ids of the parents, in CPT column order
    pub fn get_parents(&self) -> &[usize] {
        &self.parents
    }

    pub fn get_cpt_values(&self) -> Option<&[f64]> {
        self.cpt.as_ref().map(|v| v.as_slice())
    }

    pub fn is_initialized(&self) -> bool {
        self.cpt.is_some()
    }

    /// Only the network attaches dependencies, after it has validated them
    pub(crate) fn set_dependency(&mut self, parents: Vec<usize>, cpt: Vec<f64>) {
        self.parents = parents;
        self.cpt = Some(cpt);
    }
}

impl PartialEq for DiscreteVariable {
    fn eq(&self, other: &DiscreteVariable) -> bool {
        self.id == other.id
    }
}

impl Eq for DiscreteVariable {}

impl fmt::Debug for DiscreteVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Variable({}: {:?})", self.name, self.domain.get_outcomes())
    }
}

impl fmt::Display for DiscreteVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
