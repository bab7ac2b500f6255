use std::fmt;
use fnv::FnvHashMap;
use errors::*;
use graph_models::traits::Domain;
use graph_models::variables::DiscreteVariable;

/// Map from variable id to outcome index
pub type Assignment = FnvHashMap<usize, usize>;

/// A variable paired with one of its outcomes, e.g. `A=T`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct VariableOutcome<'a> {
    pub variable: &'a DiscreteVariable,
    pub outcome: usize
}

impl<'a> VariableOutcome<'a> {
    pub fn new(variable: &'a DiscreteVariable, outcome: &str) -> Result<VariableOutcome<'a>> {
        match variable.get_domain().get_index(outcome) {
            Some(idx) => Ok(VariableOutcome { variable, outcome: idx }),
            None => bail!(ErrorKind::InvalidOutcome(variable.get_name().to_owned(), outcome.to_owned()))
        }
    }

    pub fn get_label(&self) -> &'a str {
        self.variable.get_domain().get_value(self.outcome)
    }
}

pub fn to_assignment(outcomes: &[VariableOutcome]) -> Assignment {
    let mut assignment = Assignment::with_capacity_and_hasher(outcomes.len(), Default::default());
    for vo in outcomes {
        assignment.insert(vo.variable.get_id(), vo.outcome);
    }
    assignment
}

impl<'a> fmt::Debug for VariableOutcome<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.variable.get_name(), self.get_label())
    }
}

impl<'a> fmt::Display for VariableOutcome<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.variable.get_name(), self.get_label())
    }
}
