use errors::*;
use graph_models::counter::OpCounter;
use graph_models::network::BayesNet;
use graph_models::variables::VariableOutcome;

mod enumeration;
mod variable_elimination;
pub use self::enumeration::Enumeration;
pub use self::variable_elimination::{ VariableElimination, EliminationOrder };

pub trait Inference: Sync + Send {
    /// Compute P(query | evidence). Query and evidence variables are disjoint and
    /// neither contains the same variable twice.
    fn infer<'a>(&self, net: &'a BayesNet, query: &[VariableOutcome<'a>], evidence: &[VariableOutcome<'a>],
                 counter: &mut OpCounter) -> Result<f64>;
}
