use bayesnet::prelude::*;
use std::path::PathBuf;

pub fn data_path(fname: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(fname)
}

pub fn load_alarm_net() -> BayesNet {
    load_network(&data_path("alarm_net.xml")).unwrap()
}

pub fn load_big_net() -> BayesNet {
    load_network(&data_path("big_net.xml")).unwrap()
}

pub fn binary() -> Vec<String> {
    vec!["T".to_owned(), "F".to_owned()]
}

/// Network whose variables are all binary and have no dependency yet
pub fn binary_variables(names: &[&str]) -> BayesNet {
    let mut net = BayesNet::new();
    for name in names {
        net.add_variable(name, binary()).unwrap();
    }
    net
}

pub fn var<'a>(net: &'a BayesNet, name: &str) -> &'a DiscreteVariable {
    net.get_variable_by_name(name).unwrap()
}

pub fn assignment(net: &BayesNet, items: &[(&str, &str)]) -> Assignment {
    let outcomes = items.iter()
        .map(|&(name, outcome)| net.outcome(name, outcome).unwrap())
        .collect::<Vec<_>>();
    to_assignment(&outcomes)
}

pub fn assert_close(x: f64, y: f64, eps: f64) {
    assert!((x - y).abs() < eps, "{} != {} (eps = {})", x, y, eps);
}
