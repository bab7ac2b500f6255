pub mod discrete_variable;
pub mod variable_outcome;

pub use self::discrete_variable::*;
pub use self::variable_outcome::*;
