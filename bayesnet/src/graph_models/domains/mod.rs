mod outcome_domain;

pub use self::outcome_domain::OutcomeDomain;
