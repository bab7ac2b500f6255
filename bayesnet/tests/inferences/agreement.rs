use bayesnet::prelude::*;
use graph_models::mock::*;

/// Observations tried against every query variable not part of them
const EVIDENCE_SETS: &[&[(&str, &str)]] = &[
    &[],
    &[("F", "T")],
    &[("A", "a2"), ("F", "F")],
    &[("B", "b3"), ("G", "T")],
    &[("D", "d2"), ("E", "T")],
    &[("C", "F"), ("G", "F"), ("F", "T")],
];

fn format_query(query: (&str, &str), evidence: &[(&str, &str)], method: usize) -> String {
    let evidence = evidence.iter().map(|&(n, o)| format!("{}={}", n, o)).collect::<Vec<_>>();
    format!("P({}={}|{}),{}", query.0, query.1, evidence.join(","), method)
}

/// Every (query variable, outcome, evidence) combination of the network
fn queries(net: &BayesNet) -> Vec<(String, String, &'static [(&'static str, &'static str)])> {
    let mut queries = Vec::new();
    for var in net.get_variables() {
        for &evidence in EVIDENCE_SETS {
            if evidence.iter().any(|&(n, _)| n == var.get_name()) {
                continue;
            }
            for outcome in var.get_domain().get_outcomes() {
                queries.push((var.get_name().to_owned(), outcome.clone(), evidence));
            }
        }
    }
    queries
}

fn check_agreement(net: &BayesNet, settings: &Settings) {
    for (name, outcome, evidence) in queries(net) {
        let expected = net.answer_query(&format_query((name.as_str(), outcome.as_str()), evidence, 1)).unwrap().probability;
        assert!(expected.is_finite());

        for method in 2..4 {
            let query = format_query((name.as_str(), outcome.as_str()), evidence, method);
            let answer = net.answer_query_with(&query, settings).unwrap();
            assert!((answer.probability - expected).abs() < 1e-9, "{} = {}, expected {}", query, answer.probability, expected);
        }
    }
}

#[test]
pub fn test_methods_agree_on_alarm_net() {
    let net = load_alarm_net();
    let labels = ["T", "F"];

    for query_var in &["B", "E", "A", "J", "M"] {
        for evidence in &[vec![], vec![("J", "T")], vec![("J", "T"), ("M", "F")], vec![("B", "F"), ("M", "T")]] {
            if evidence.iter().any(|&(n, _)| n == *query_var) {
                continue;
            }
            for label in labels.iter() {
                let expected = net.answer_query(&format_query((*query_var, *label), evidence, 1)).unwrap().probability;
                for method in 2..4 {
                    let answer = net.answer_query(&format_query((*query_var, *label), evidence, method)).unwrap();
                    assert_close(answer.probability, expected, 1e-9);
                }
            }
        }
    }
}

#[test]
pub fn test_methods_agree_on_big_net() {
    let net = load_big_net();
    check_agreement(&net, &Settings::default());
}

#[test]
pub fn test_methods_agree_with_min_degree() {
    let net = load_big_net();
    let mut settings = Settings::default();
    settings.heuristic = OrderingHeuristic::MinDegree;
    check_agreement(&net, &settings);
}

#[test]
pub fn test_methods_agree_without_pruning() {
    let net = load_big_net();
    let mut settings = Settings::default();
    settings.prune_irrelevant = false;
    check_agreement(&net, &settings);
}

#[test]
pub fn test_posterior_sums_to_one() {
    let net = load_big_net();

    for &evidence in EVIDENCE_SETS {
        for var in net.get_variables() {
            if evidence.iter().any(|&(n, _)| n == var.get_name()) {
                continue;
            }
            let total: f64 = var.get_domain().get_outcomes().iter()
                .map(|o| net.answer_query(&format_query((var.get_name(), o.as_str()), evidence, 3)).unwrap().probability)
                .sum();
            assert_close(total, 1.0, 1e-9);
        }
    }
}

#[test]
pub fn test_prior_of_root() {
    let net = load_big_net();

    // B has no parent: the prior is read from its table
    let answer = net.answer_query("P(B=b2),2").unwrap();
    assert_close(answer.probability, 0.5, 1e-12);

    // G only depends on A: P(G=T) = 0.3 * 0.25 + 0.7 * 0.65
    for method in 1..4 {
        let answer = net.answer_query(&format!("P(G=T),{}", method)).unwrap();
        assert_close(answer.probability, 0.53, 1e-9);
    }
}
