use once_cell::sync::Lazy;
use regex::{ self, Regex };
use errors::*;

static QUERY_PATTERN: Lazy<::std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^P\(([^|()]*)(\|([^|()]*))?\)(,(.*))?$"));

/// Strategy selected by the trailing `,m` of a conditional query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceMethod {
    /// `1`: sum the full joint over every hidden assignment
    Enumeration,
    /// `2`: variable elimination, hidden variables sorted by name
    FixedOrderElimination,
    /// `3`: variable elimination, order given by the interaction graph heuristic
    HeuristicElimination
}

impl InferenceMethod {
    pub fn from_selector(selector: &str) -> Result<InferenceMethod> {
        match selector {
            "1" => Ok(InferenceMethod::Enumeration),
            "2" => Ok(InferenceMethod::FixedOrderElimination),
            "3" => Ok(InferenceMethod::HeuristicElimination),
            _ => bail!(ErrorKind::UnknownMethodSelector(selector.to_owned()))
        }
    }
}

/// Variable and outcome names are kept as text, the network resolves them
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedQuery {
    /// `P(A=T,B=F)`
    Joint(Vec<(String, String)>),
    /// `P(A=T|B=F,C=T),2`
    Conditional {
        query: Vec<(String, String)>,
        evidence: Vec<(String, String)>,
        method: InferenceMethod
    }
}

pub fn parse_query(text: &str) -> Result<ParsedQuery> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let pattern = QUERY_PATTERN.as_ref().map_err(|e| e.clone())?;

    let caps = match pattern.captures(&compact) {
        Some(caps) => caps,
        None => bail!(ErrorKind::MalformedQuery(format!("'{}' is not of the form P(...)", text.trim())))
    };

    let query = parse_pairs(caps.get(1).map_or("", |m| m.as_str()))?;
    if query.len() == 0 {
        bail!(ErrorKind::MalformedQuery(format!("'{}' has no query variable", text.trim())));
    }

    match caps.get(5) {
        Some(selector) => Ok(ParsedQuery::Conditional {
            query,
            evidence: parse_pairs(caps.get(3).map_or("", |m| m.as_str()))?,
            method: InferenceMethod::from_selector(selector.as_str())?
        }),
        None => {
            if caps.get(2).is_some() {
                bail!(ErrorKind::MalformedQuery(format!("'{}' has evidence but no method selector", text.trim())));
            }
            Ok(ParsedQuery::Joint(query))
        }
    }
}

/// `A=T,B=F` into `[(A, T), (B, F)]`, an empty string gives no pair
fn parse_pairs(text: &str) -> Result<Vec<(String, String)>> {
    if text.len() == 0 {
        return Ok(Vec::new());
    }

    let mut pairs = Vec::new();
    for item in text.split(',') {
        let mut parts = item.splitn(2, '=');
        let name = parts.next().unwrap_or("");
        let outcome = parts.next().unwrap_or("");
        if name.len() == 0 || outcome.len() == 0 {
            bail!(ErrorKind::MalformedQuery(format!("'{}' is not a variable=outcome pair", item)));
        }
        pairs.push((name.to_owned(), outcome.to_owned()));
    }

    Ok(pairs)
}
