use errors::*;
use graph_models::counter::OpCounter;
use graph_models::inferences::Inference;
use graph_models::network::BayesNet;
use graph_models::utils::misc::{ get_variables_index, iter_assignment };
use graph_models::variables::*;

/// Brute force: sum the full joint probability over every assignment of the
/// query and hidden variables. Exponential in the number of free variables, it
/// serves as the baseline the elimination methods are checked against.
pub struct Enumeration;

impl Enumeration {
    pub fn new() -> Enumeration {
        Enumeration
    }
}

impl Inference for Enumeration {
    fn infer<'a>(&self, net: &'a BayesNet, query: &[VariableOutcome<'a>], evidence: &[VariableOutcome<'a>],
                 counter: &mut OpCounter) -> Result<f64> {
        let cpts = net.cpts()?;
        let query_vars = query.iter().map(|vo| vo.variable).collect::<Vec<_>>();
        let mut observed = get_variables_index(&query_vars);
        observed.extend(evidence.iter().map(|vo| vo.variable.get_id()));

        let mut free_vars = query_vars.clone();
        free_vars.extend(net.get_variables().iter().filter(|v| !observed.contains(&v.get_id())));
        debug!("enumerate over {} free variables", free_vars.len());

        // numerator: assignments agreeing with the query, denominator: all the others
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        iter_assignment(&free_vars, &to_assignment(evidence), |assignment| {
            let mut prob = 1.0;
            for (i, cpt) in cpts.iter().enumerate() {
                let p = cpt.lookup(assignment)?;
                prob = if i == 0 { p } else { prob * p };
            }
            counter.add_products(cpts.len().saturating_sub(1));

            // adding to an accumulator that is still zero is free
            let accumulator = if query.iter().all(|q| assignment[&q.variable.get_id()] == q.outcome) {
                &mut numerator
            } else {
                &mut denominator
            };
            if *accumulator > 0.0 {
                counter.add_sums(1);
            }
            *accumulator += prob;
            Ok(())
        })?;

        denominator += numerator;
        counter.add_sums(1);

        Ok(numerator / denominator)
    }
}
