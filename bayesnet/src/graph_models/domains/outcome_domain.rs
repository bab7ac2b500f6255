use graph_models::traits::Domain;
use fnv::FnvHashMap;

/// Ordered outcome labels of a discrete variable
#[derive(Debug, Clone)]
pub struct OutcomeDomain {
    outcomes: Vec<String>,
    index: FnvHashMap<String, usize>
}

impl OutcomeDomain {
    /// Labels are expected to be unique, see `DiscreteVariable::new`
    pub fn new(outcomes: Vec<String>) -> OutcomeDomain {
        let index = outcomes.iter().enumerate()
            .map(|(i, o)| (o.clone(), i))
            .collect();

        OutcomeDomain { outcomes, index }
    }

    pub fn get_outcomes(&self) -> &[String] {
        &self.outcomes
    }
}

impl Domain for OutcomeDomain {
    type Value = str;

    fn numel(&self) -> usize {
        self.outcomes.len()
    }

    fn get_index(&self, value: &str) -> Option<usize> {
        self.index.get(value).cloned()
    }

    fn get_value(&self, index: usize) -> &str {
        &self.outcomes[index]
    }
}
