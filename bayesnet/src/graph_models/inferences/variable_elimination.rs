use fnv::FnvHashSet;
use errors::*;
use graph_models::counter::OpCounter;
use graph_models::factors::TableFactor;
use graph_models::inferences::Inference;
use graph_models::interaction_graph::InteractionGraph;
use graph_models::network::BayesNet;
use graph_models::utils::misc::get_variables_index;
use graph_models::variables::*;
use settings::OrderingHeuristic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationOrder {
    /// hidden variables sorted by name
    Lexicographic,
    MinFill,
    MinDegree
}

impl From<OrderingHeuristic> for EliminationOrder {
    fn from(heuristic: OrderingHeuristic) -> EliminationOrder {
        match heuristic {
            OrderingHeuristic::MinFill => EliminationOrder::MinFill,
            OrderingHeuristic::MinDegree => EliminationOrder::MinDegree,
        }
    }
}

pub struct VariableElimination {
    order: EliminationOrder,
    prune_irrelevant: bool
}

impl VariableElimination {
    pub fn new(order: EliminationOrder, prune_irrelevant: bool) -> VariableElimination {
        VariableElimination { order, prune_irrelevant }
    }

    /// Hidden variables sorted by name. Unless pruning is disabled, only the
    /// ancestors of a query or evidence variable are kept.
    fn hidden_variables<'a>(&self, net: &'a BayesNet, targets: &[&'a DiscreteVariable]) -> Result<Vec<&'a DiscreteVariable>> {
        let observed = get_variables_index(targets);
        let mut hidden = Vec::new();
        for var in net.get_variables() {
            if observed.contains(&var.get_id()) {
                continue;
            }

            let mut is_relevant = !self.prune_irrelevant;
            for target in targets {
                if is_relevant {
                    break;
                }
                is_relevant = net.is_descendant_of(target, var)?;
            }

            if is_relevant {
                hidden.push(var);
            } else {
                debug!("discard irrelevant variable {}", var.get_name());
            }
        }

        hidden.sort_by(|a, b| a.get_name().cmp(b.get_name()));
        Ok(hidden)
    }

    fn elimination_order<'a>(&self, factors: &[TableFactor<'a>], hidden: &[&'a DiscreteVariable]) -> Vec<&'a DiscreteVariable> {
        let to_eliminate = get_variables_index(hidden);
        let mut order = match self.order {
            EliminationOrder::Lexicographic => return hidden.to_vec(),
            EliminationOrder::MinFill => InteractionGraph::new(factors).min_fill_order(&to_eliminate),
            EliminationOrder::MinDegree => InteractionGraph::new(factors).min_degree_order(&to_eliminate),
        };

        // hidden variables absent from every factor cannot be ordered by the graph
        let ordered: FnvHashSet<usize> = get_variables_index(&order);
        order.extend(hidden.iter().filter(|v| !ordered.contains(&v.get_id())));
        order
    }
}

/// A single-row factor with a nonzero value is a constant that normalization
/// cancels. A zero one is kept: the evidence is impossible and the answer is NaN.
fn is_cancelled_constant(factor: &TableFactor) -> bool {
    factor.numel() == 1 && factor.get_values()[0] != 0.0
}

impl Inference for VariableElimination {
    fn infer<'a>(&self, net: &'a BayesNet, query: &[VariableOutcome<'a>], evidence: &[VariableOutcome<'a>],
                 counter: &mut OpCounter) -> Result<f64> {
        let targets = query.iter().chain(evidence.iter()).map(|vo| vo.variable).collect::<Vec<_>>();
        let hidden = self.hidden_variables(net, &targets)?;

        let mut relevant = get_variables_index(&targets);
        relevant.extend(hidden.iter().map(|v| v.get_id()));

        let mut factors = Vec::new();
        for var in net.get_variables() {
            if relevant.contains(&var.get_id()) {
                let factor = net.cpt(var)?.restrict(evidence);
                if !is_cancelled_constant(&factor) {
                    factors.push(factor);
                }
            }
        }

        let order = self.elimination_order(&factors, &hidden);
        debug!("elimination order ({:?}): {:?}", self.order, order.iter().map(|v| v.get_name()).collect::<Vec<_>>());

        for var in order {
            let (touched, others): (Vec<_>, Vec<_>) = factors.into_iter().partition(|f| f.touch(var));
            factors = others;
            if touched.len() == 0 {
                continue;
            }

            let factor = TableFactor::join_all(touched, counter)?.eliminate(var, counter)?;
            trace!("after eliminating {}: {:?}", var.get_name(), factor);
            if !is_cancelled_constant(&factor) {
                factors.push(factor);
            }
        }

        let result = TableFactor::join_all(factors, counter)?.normalize(counter);
        trace!("posterior:\n{}", result);
        result.lookup(&to_assignment(query))
    }
}
