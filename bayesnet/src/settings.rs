use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde_yaml;
use errors::*;

/// Heuristic used by the third inference method to order hidden variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingHeuristic {
    MinFill,
    MinDegree
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// digits after the decimal point when an answer is written out
    pub output_precision: usize,
    pub heuristic: OrderingHeuristic,
    /// discard hidden variables that are not ancestors of a query or evidence variable
    pub prune_irrelevant: bool
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            output_precision: 5,
            heuristic: OrderingHeuristic::MinFill,
            prune_irrelevant: true
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
****************************** SETTINGS ******************************
output_precision: {}
heuristic: {:?}
prune_irrelevant: {}
**********************************************************************
"#,
    self.output_precision,
    self.heuristic,
    self.prune_irrelevant)
    }
}

/// Layout of a settings file:
///
/// ```yaml
/// settings:
///   output_precision: 5
///   heuristic: min_degree
/// ```
#[derive(Debug, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub settings: Settings
}

impl Configuration {
    pub fn from_file(fpath: &Path) -> Result<Configuration> {
        let reader = BufReader::new(File::open(fpath)
            .chain_err(|| format!("cannot open settings file {:?}", fpath))?);
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_str(content: &str) -> Result<Configuration> {
        Ok(serde_yaml::from_str(content)?)
    }
}
