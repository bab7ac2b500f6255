pub use graph_models::*;
pub use errors::{ Error, ErrorKind, Result, ResultExt };
pub use query::{ parse_query, InferenceMethod, ParsedQuery };
pub use settings::{ Configuration, OrderingHeuristic, Settings };
pub use io::{ load_network, read_network };
