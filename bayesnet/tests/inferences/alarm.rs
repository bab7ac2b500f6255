use std::sync::Arc;
use std::thread;
use bayesnet::prelude::*;
use graph_models::mock::*;

fn min_degree() -> Settings {
    let mut settings = Settings::default();
    settings.heuristic = OrderingHeuristic::MinDegree;
    settings
}

fn no_pruning() -> Settings {
    let mut settings = Settings::default();
    settings.prune_irrelevant = false;
    settings
}

#[test]
pub fn test_burglary_given_calls() {
    let net = load_alarm_net();

    let answer = net.answer_query("P(B=T|J=T,M=T),1").unwrap();
    assert_close(answer.probability, 0.284172, 1e-6);
    assert_eq!((answer.sum_count(), answer.product_count()), (7, 32));

    let answer = net.answer_query("P(B=T|J=T,M=T),2").unwrap();
    assert_close(answer.probability, 0.284172, 1e-6);
    assert_eq!((answer.sum_count(), answer.product_count()), (7, 16));

    let answer = net.answer_query("P(B=T|J=T,M=T),3").unwrap();
    assert_close(answer.probability, 0.284172, 1e-6);
    assert_eq!((answer.sum_count(), answer.product_count()), (7, 16));

    let answer = net.answer_query("P(B=F|J=T,M=T),2").unwrap();
    assert_close(answer.probability, 1.0 - 0.284172, 1e-6);
}

#[test]
pub fn test_john_calls_given_burglary() {
    let net = load_alarm_net();

    let answer = net.answer_query("P(J=T|B=T),1").unwrap();
    assert_close(answer.probability, 0.849017, 1e-6);
    assert_eq!((answer.sum_count(), answer.product_count()), (15, 64));

    // M is neither an ancestor of J nor of B and gets pruned
    let answer = net.answer_query("P(J=T|B=T),2").unwrap();
    assert_close(answer.probability, 0.849017, 1e-6);
    assert_eq!((answer.sum_count(), answer.product_count()), (7, 12));

    // min-fill eliminates E before A
    let answer = net.answer_query("P(J=T|B=T),3").unwrap();
    assert_close(answer.probability, 0.849017, 1e-6);
    assert_eq!((answer.sum_count(), answer.product_count()), (5, 8));
}

#[test]
pub fn test_pruning_keeps_probability() {
    let net = load_alarm_net();

    let pruned = net.answer_query("P(J=T|B=T),2").unwrap();
    let full = net.answer_query_with("P(J=T|B=T),2", &no_pruning()).unwrap();
    assert_close(pruned.probability, full.probability, 1e-12);
    assert!(full.sum_count() > pruned.sum_count());
    assert!(full.product_count() > pruned.product_count());
}

#[test]
pub fn test_joint_probability() {
    let net = load_alarm_net();

    let answer = net.answer_query("P(B=F,E=T,A=T,M=T,J=F)").unwrap();
    assert_close(answer.probability, 0.0000405594, 1e-12);
    assert_eq!((answer.sum_count(), answer.product_count()), (0, 4));

    let answer = net.answer_query("P(B=T)").unwrap();
    assert_close(answer.probability, 0.001, 1e-12);
    assert_eq!((answer.sum_count(), answer.product_count()), (0, 0));
}

#[test]
pub fn test_joint_sums_to_one() {
    let net = load_alarm_net();
    let labels = ["T", "F"];

    let mut total = 0.0;
    for i in 0..32 {
        let outcome = |k: usize| labels[(i >> k) & 1];
        let query = format!("P(B={},E={},A={},J={},M={})", outcome(0), outcome(1), outcome(2), outcome(3), outcome(4));
        total += net.answer_query(&query).unwrap().probability;
    }
    assert_close(total, 1.0, 1e-9);
}

#[test]
pub fn test_read_from_cpt() {
    let net = load_alarm_net();

    for method in 1..4 {
        let answer = net.answer_query(&format!("P(A=T|E=T,B=T),{}", method)).unwrap();
        assert_close(answer.probability, 0.95, 1e-12);
        assert_eq!(answer.counter, OpCounter::new());

        let answer = net.answer_query(&format!("P(J=F|A=T),{}", method)).unwrap();
        assert_close(answer.probability, 0.1, 1e-12);
        assert_eq!(answer.counter, OpCounter::new());

        let answer = net.answer_query(&format!("P(B=T),{}", method)).unwrap();
        assert_close(answer.probability, 0.001, 1e-12);
        assert_eq!(answer.counter, OpCounter::new());
    }

    // evidence is a strict subset of the parents: real inference is needed
    let answer = net.answer_query("P(A=T|B=T),2").unwrap();
    assert_close(answer.probability, 0.002 * 0.95 + 0.998 * 0.94, 1e-9);
    assert!(answer.product_count() > 0);
}

#[test]
pub fn test_multiple_query_variables() {
    let net = load_alarm_net();

    let expected = net.answer_query("P(J=T,M=T|B=T),1").unwrap().probability;
    for method in 2..4 {
        let answer = net.answer_query(&format!("P(J=T,M=T|B=T),{}", method)).unwrap();
        assert_close(answer.probability, expected, 1e-9);
    }

    // P(J,M|B) = P(J|B) * P(M|J,B)
    let p_j = net.answer_query("P(J=T|B=T),2").unwrap().probability;
    let p_m = net.answer_query("P(M=T|J=T,B=T),2").unwrap().probability;
    assert_close(expected, p_j * p_m, 1e-9);
}

#[test]
pub fn test_min_degree_heuristic() {
    let net = load_alarm_net();

    for query in &["P(B=T|J=T,M=T),3", "P(J=T|B=T),3", "P(E=F|M=T),3"] {
        let min_fill = net.answer_query(query).unwrap();
        let min_degree = net.answer_query_with(query, &min_degree()).unwrap();
        assert_close(min_fill.probability, min_degree.probability, 1e-12);
    }
}

#[test]
pub fn test_impossible_evidence() {
    let mut net = binary_variables(&["X", "Y", "Z"]);
    net.add_dependency("X", &[] as &[&str], vec![1.0, 0.0]).unwrap();
    net.add_dependency("Y", &["X"], vec![0.5, 0.5, 0.5, 0.5]).unwrap();
    net.add_dependency("Z", &["Y"], vec![0.9, 0.1, 0.2, 0.8]).unwrap();

    // every joint term is zero, the ratio is undefined
    let answer = net.answer_query("P(Z=T|X=F),1").unwrap();
    assert!(answer.probability.is_nan());
    // additions to accumulators that are still zero are free, only the final one counts
    assert_eq!((answer.sum_count(), answer.product_count()), (1, 8));

    // the zero constant left by restricting P(X) must reach the normalization
    for method in 2..4 {
        let answer = net.answer_query(&format!("P(Z=T|X=F),{}", method)).unwrap();
        assert!(answer.probability.is_nan(), "method {} gave {}", method, answer.probability);
    }
    let answer = net.answer_query_with("P(Z=T|X=F),3", &min_degree()).unwrap();
    assert!(answer.probability.is_nan());
}

#[test]
pub fn test_enumeration_skips_zero_terms() {
    let mut net = binary_variables(&["X", "Y"]);
    net.add_dependency("X", &[] as &[&str], vec![0.4, 0.6]).unwrap();
    net.add_dependency("Y", &["X"], vec![0.0, 1.0, 0.5, 0.5]).unwrap();

    // Y=T: terms (X=T) 0.0 then (X=F) 0.3, nothing was accumulated before 0.3
    // Y=F: terms (X=T) 0.4 then (X=F) 0.3, one addition
    let answer = net.answer_query("P(Y=T),1").unwrap();
    assert_close(answer.probability, 0.3, 1e-12);
    assert_eq!((answer.sum_count(), answer.product_count()), (2, 4));

    for method in 2..4 {
        let answer = net.answer_query(&format!("P(Y=T),{}", method)).unwrap();
        assert_close(answer.probability, 0.3, 1e-12);
    }
}

#[test]
pub fn test_concurrent_queries() {
    let net = Arc::new(load_alarm_net());
    let expected = net.answer_query("P(B=T|J=T,M=T),2").unwrap();

    let handles = (0..4).map(|_| {
        let net = Arc::clone(&net);
        thread::spawn(move || net.answer_query("P(B=T|J=T,M=T),2").unwrap())
    }).collect::<Vec<_>>();

    for handle in handles {
        let answer = handle.join().unwrap();
        assert_eq!(answer.probability, expected.probability);
        assert_eq!(answer.counter, expected.counter);
    }
}
