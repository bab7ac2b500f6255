use std::io::Write;
use rayon::prelude::*;
use serde_json;
use bayesnet::prelude::{ BayesNet, QueryAnswer, Settings };
use errors::*;

/// Outcome of one line of the input file
#[derive(Debug, Clone, Serialize)]
pub struct QueryRecord {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    pub sums: usize,
    pub products: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>
}

impl QueryRecord {
    fn from_result(query: &str, result: ::bayesnet::errors::Result<QueryAnswer>) -> QueryRecord {
        match result {
            Ok(answer) => QueryRecord {
                query: query.to_owned(),
                probability: Some(answer.probability),
                sums: answer.sum_count(),
                products: answer.product_count(),
                error: None
            },
            Err(e) => {
                error!("cannot answer {}: {}", query, e);
                QueryRecord {
                    query: query.to_owned(),
                    probability: None,
                    sums: 0,
                    products: 0,
                    error: Some(e.to_string())
                }
            }
        }
    }

    /// `probability,sums,products`, or `error: <message>`
    pub fn to_line(&self, precision: usize) -> String {
        match (self.probability, &self.error) {
            (Some(prob), _) => format!("{:.*},{},{}", precision, prob, self.sums, self.products),
            (None, &Some(ref msg)) => format!("error: {}", msg),
            (None, &None) => "error: no answer".to_owned()
        }
    }
}

/// Answer every query in parallel. Records keep the order of the queries and
/// a failed query doesn't stop the others.
pub fn answer_queries(net: &BayesNet, queries: &[String], settings: &Settings) -> Vec<QueryRecord> {
    queries.par_iter()
        .map(|q| QueryRecord::from_result(q, net.answer_query_with(q, settings)))
        .collect()
}

pub fn write_records<W: Write>(writer: &mut W, records: &[QueryRecord], settings: &Settings, as_json: bool) -> Result<()> {
    for record in records {
        if as_json {
            serde_json::to_writer(&mut *writer, record)?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "{}", record.to_line(settings.output_precision))?;
        }
    }

    Ok(())
}
