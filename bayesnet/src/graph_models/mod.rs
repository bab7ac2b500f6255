pub mod traits;
pub mod domains;
pub mod variables;
pub mod factors;
pub mod counter;
pub mod interaction_graph;
pub mod network;
pub mod utils;
pub mod inferences;

pub use self::traits::*;
pub use self::domains::*;
pub use self::variables::*;
pub use self::factors::*;
pub use self::counter::OpCounter;
pub use self::interaction_graph::InteractionGraph;
pub use self::network::{ BayesNet, QueryAnswer };
pub use self::inferences::*;
pub use self::utils::*;
