use fnv::{ FnvHashMap, FnvHashSet };
use errors::*;
use graph_models::counter::OpCounter;
use graph_models::factors::TableFactor;
use graph_models::inferences::*;
use graph_models::variables::*;
use query::{ parse_query, ParsedQuery, InferenceMethod };
use settings::Settings;

/// Probability of a query together with the operations spent computing it
#[derive(Debug, Clone, Copy)]
pub struct QueryAnswer {
    pub probability: f64,
    pub counter: OpCounter
}

impl QueryAnswer {
    #[inline]
    pub fn sum_count(&self) -> usize {
        self.counter.sum_count()
    }

    #[inline]
    pub fn product_count(&self) -> usize {
        self.counter.product_count()
    }
}

/// A discrete Bayesian network. Variables live in an arena, their id is their
/// position in it. Once every dependency is attached the network is read-only
/// and can answer queries from several threads at once.
pub struct BayesNet {
    variables: Vec<DiscreteVariable>,
    name2id: FnvHashMap<String, usize>
}

impl BayesNet {
    pub fn new() -> BayesNet {
        BayesNet {
            variables: Vec::new(),
            name2id: Default::default()
        }
    }

    pub fn add_variable(&mut self, name: &str, outcomes: Vec<String>) -> Result<usize> {
        if self.name2id.contains_key(name) {
            bail!(ErrorKind::DuplicateVariable(name.to_owned()));
        }

        let id = self.variables.len();
        self.variables.push(DiscreteVariable::new(id, name, outcomes)?);
        self.name2id.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Attach the parents and the CPT of a variable. `probabilities` follows the
    /// order `[parents..., variable]` with the variable's outcome varying fastest.
    pub fn add_dependency<S: AsRef<str>>(&mut self, name: &str, parents: &[S], probabilities: Vec<f64>) -> Result<()> {
        let var_id = self.get_variable_by_name(name)?.get_id();
        if self.variables[var_id].is_initialized() {
            bail!(ErrorKind::DependencyAlreadyDefined(name.to_owned()));
        }

        let mut parent_ids = Vec::with_capacity(parents.len());
        for parent in parents {
            let parent = self.get_variable_by_name(parent.as_ref())?;
            if parent_ids.contains(&parent.get_id()) {
                bail!(ErrorKind::MalformedCPT(format!("parent '{}' of '{}' is listed twice", parent.get_name(), name)));
            }
            if self.is_descendant_of(parent, &self.variables[var_id])? {
                bail!(ErrorKind::CyclicDependency(name.to_owned()));
            }
            parent_ids.push(parent.get_id());
        }

        let numel: usize = parent_ids.iter()
            .map(|&i| self.variables[i].get_domain_size())
            .product::<usize>() * self.variables[var_id].get_domain_size();
        if probabilities.len() != numel {
            bail!(ErrorKind::MalformedCPT(format!("CPT of '{}' needs {} values, got {}", name, numel, probabilities.len())));
        }
        if let Some(p) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
            bail!(ErrorKind::MalformedCPT(format!("CPT of '{}' contains an invalid probability: {}", name, p)));
        }

        debug!("attach dependency {} | {:?}", name, parent_ids.iter().map(|&i| self.variables[i].get_name()).collect::<Vec<_>>());
        self.variables[var_id].set_dependency(parent_ids, probabilities);
        Ok(())
    }

    #[inline]
    pub fn get_variables(&self) -> &[DiscreteVariable] {
        &self.variables
    }

    #[inline]
    pub fn get_variable(&self, id: usize) -> &DiscreteVariable {
        &self.variables[id]
    }

    pub fn get_variable_by_name(&self, name: &str) -> Result<&DiscreteVariable> {
        match self.name2id.get(name) {
            Some(&id) => Ok(&self.variables[id]),
            None => bail!(ErrorKind::UnknownVariable(name.to_owned()))
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn get_parents<'a>(&'a self, var: &DiscreteVariable) -> Vec<&'a DiscreteVariable> {
        var.get_parents().iter().map(|&i| &self.variables[i]).collect()
    }

    /// True if `other` is `var` itself or one of its (transitive) parents
    pub fn is_descendant_of(&self, var: &DiscreteVariable, other: &DiscreteVariable) -> Result<bool> {
        if var.get_id() == other.get_id() {
            return Ok(true);
        }

        let mut visited: FnvHashSet<usize> = Default::default();
        let mut stack = var.get_parents().to_vec();
        while let Some(id) = stack.pop() {
            if id == var.get_id() {
                bail!(ErrorKind::CyclicDependency(var.get_name().to_owned()));
            }
            if id == other.get_id() {
                return Ok(true);
            }
            if visited.insert(id) {
                stack.extend_from_slice(self.variables[id].get_parents());
            }
        }

        Ok(false)
    }

    /// CPT of `var` as a factor over `[parents..., var]`
    pub fn cpt<'a>(&'a self, var: &DiscreteVariable) -> Result<TableFactor<'a>> {
        let var = &self.variables[var.get_id()];
        match var.get_cpt_values() {
            None => bail!(ErrorKind::UninitializedVariable(var.get_name().to_owned())),
            Some(values) => {
                let mut scope = self.get_parents(var);
                scope.push(var);
                TableFactor::new(scope, values.to_vec())
            }
        }
    }

    /// CPTs of every variable, indexed by variable id
    pub fn cpts<'a>(&'a self) -> Result<Vec<TableFactor<'a>>> {
        self.variables.iter().map(|v| self.cpt(v)).collect()
    }

    pub fn outcome<'a>(&'a self, name: &str, outcome: &str) -> Result<VariableOutcome<'a>> {
        VariableOutcome::new(self.get_variable_by_name(name)?, outcome)
    }

    pub fn answer_query(&self, query: &str) -> Result<QueryAnswer> {
        self.answer_query_with(query, &Settings::default())
    }

    pub fn answer_query_with(&self, query: &str, settings: &Settings) -> Result<QueryAnswer> {
        let mut counter = OpCounter::new();
        let probability = match parse_query(query)? {
            ParsedQuery::Joint(pairs) => {
                let assignment = self.resolve(&pairs)?;
                self.joint_probability(&assignment, &mut counter)?
            },
            ParsedQuery::Conditional { query: query_pairs, evidence: evidence_pairs, method } => {
                let query_outcomes = self.resolve(&query_pairs)?;
                let evidence = self.resolve(&evidence_pairs)?;
                if let Some(vo) = evidence.iter().find(|e| query_outcomes.iter().any(|q| q.variable == e.variable)) {
                    bail!(ErrorKind::MalformedQuery(format!("variable '{}' is both queried and observed", vo.variable.get_name())));
                }

                self.conditional_probability(&query_outcomes, &evidence, method, settings, &mut counter)?
            }
        };

        debug!("{} = {} (sums = {}, products = {})", query, probability, counter.sum_count(), counter.product_count());
        Ok(QueryAnswer { probability, counter })
    }

    /// Chain rule: product of each variable's CPT value given its parents, which
    /// must be part of the assignment
    pub fn joint_probability<'a>(&'a self, assignment: &[VariableOutcome<'a>], counter: &mut OpCounter) -> Result<f64> {
        let full_assignment = to_assignment(assignment);
        let mut prob = 1.0;
        for (i, vo) in assignment.iter().enumerate() {
            let p = self.cpt(vo.variable)?.lookup(&full_assignment)?;
            if i == 0 {
                prob = p;
            } else {
                prob *= p;
                counter.add_products(1);
            }
        }

        Ok(prob)
    }

    pub fn conditional_probability<'a>(&'a self, query: &[VariableOutcome<'a>], evidence: &[VariableOutcome<'a>],
                                       method: InferenceMethod, settings: &Settings, counter: &mut OpCounter) -> Result<f64> {
        if let Some(prob) = self.read_from_cpt(query, evidence)? {
            debug!("answer read directly from the CPT of {}", query[0].variable.get_name());
            return Ok(prob);
        }

        let inference: Box<dyn Inference> = match method {
            InferenceMethod::Enumeration => Box::new(Enumeration::new()),
            InferenceMethod::FixedOrderElimination => Box::new(VariableElimination::new(
                EliminationOrder::Lexicographic, settings.prune_irrelevant)),
            InferenceMethod::HeuristicElimination => Box::new(VariableElimination::new(
                EliminationOrder::from(settings.heuristic), settings.prune_irrelevant)),
        };

        inference.infer(self, query, evidence, counter)
    }

    /// Single query variable whose parents are exactly the evidence: no computation needed
    fn read_from_cpt<'a>(&'a self, query: &[VariableOutcome<'a>], evidence: &[VariableOutcome<'a>]) -> Result<Option<f64>> {
        if query.len() != 1 {
            return Ok(None);
        }

        let parents = query[0].variable.get_parents();
        if parents.len() != evidence.len() || !evidence.iter().all(|e| parents.contains(&e.variable.get_id())) {
            return Ok(None);
        }

        let mut assignment = to_assignment(evidence);
        assignment.insert(query[0].variable.get_id(), query[0].outcome);
        Ok(Some(self.cpt(query[0].variable)?.lookup(&assignment)?))
    }

    fn resolve<'a>(&'a self, pairs: &[(String, String)]) -> Result<Vec<VariableOutcome<'a>>> {
        let mut outcomes: Vec<VariableOutcome<'a>> = Vec::with_capacity(pairs.len());
        for &(ref name, ref outcome) in pairs {
            let vo = self.outcome(name, outcome)?;
            if outcomes.iter().any(|o| o.variable == vo.variable) {
                bail!(ErrorKind::MalformedQuery(format!("variable '{}' is assigned twice", name)));
            }
            outcomes.push(vo);
        }

        Ok(outcomes)
    }
}
