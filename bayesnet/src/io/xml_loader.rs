use std::fs::File;
use std::io::{ BufReader, Read };
use std::path::Path;
use xml::EventReader;
use xml::reader::XmlEvent;
use errors::*;
use graph_models::network::BayesNet;

#[derive(Default)]
struct VariableRecord {
    name: Option<String>,
    outcomes: Vec<String>
}

#[derive(Default)]
struct DefinitionRecord {
    name: Option<String>,
    parents: Vec<String>,
    table: Option<String>
}

/// Load a network from an XML file, see `read_network`
pub fn load_network(fpath: &Path) -> Result<BayesNet> {
    let file = File::open(fpath).chain_err(|| format!("cannot open network file {:?}", fpath))?;
    read_network(BufReader::new(file)).chain_err(|| format!("cannot load network {:?}", fpath))
}

/// Read a network of the form:
///
/// ```xml
/// <NETWORK>
///   <VARIABLE><NAME>A</NAME><OUTCOME>T</OUTCOME><OUTCOME>F</OUTCOME></VARIABLE>
///   <DEFINITION><FOR>A</FOR><GIVEN>E</GIVEN><TABLE>0.3 0.7 0.1 0.9</TABLE></DEFINITION>
/// </NETWORK>
/// ```
///
/// Every variable is declared before the first dependency is attached, so the
/// order of the elements in the file doesn't matter.
pub fn read_network<R: Read>(reader: R) -> Result<BayesNet> {
    let mut variables: Vec<VariableRecord> = Vec::new();
    let mut definitions: Vec<DefinitionRecord> = Vec::new();
    let mut variable: Option<VariableRecord> = None;
    let mut definition: Option<DefinitionRecord> = None;
    let mut text = String::new();

    for e in EventReader::new(reader) {
        match e? {
            XmlEvent::StartElement { name, .. } => {
                text.clear();
                match name.local_name.as_str() {
                    "VARIABLE" => variable = Some(VariableRecord::default()),
                    "DEFINITION" => definition = Some(DefinitionRecord::default()),
                    _ => {}
                }
            }
            XmlEvent::Characters(content) | XmlEvent::CData(content) => {
                text.push_str(&content);
            }
            XmlEvent::EndElement { name } => {
                let content = text.trim().to_owned();
                text.clear();

                match name.local_name.as_str() {
                    "VARIABLE" => match variable.take() {
                        Some(record) => variables.push(record),
                        None => bail!(ErrorKind::MalformedNetwork("unbalanced VARIABLE element".to_owned()))
                    },
                    "DEFINITION" => match definition.take() {
                        Some(record) => definitions.push(record),
                        None => bail!(ErrorKind::MalformedNetwork("unbalanced DEFINITION element".to_owned()))
                    },
                    "NAME" => if let Some(ref mut record) = variable {
                        record.name = Some(content);
                    },
                    "OUTCOME" => if let Some(ref mut record) = variable {
                        record.outcomes.push(content);
                    },
                    "FOR" => if let Some(ref mut record) = definition {
                        record.name = Some(content);
                    },
                    "GIVEN" => if let Some(ref mut record) = definition {
                        record.parents.push(content);
                    },
                    "TABLE" => if let Some(ref mut record) = definition {
                        record.table = Some(content);
                    },
                    _ => {}
                }
            }
            _ => {}
        }
    }

    let mut net = BayesNet::new();
    for record in variables {
        let name = match record.name {
            Some(name) => name,
            None => bail!(ErrorKind::MalformedNetwork("VARIABLE without NAME".to_owned()))
        };
        debug!("declare variable {}: {:?}", name, record.outcomes);
        net.add_variable(&name, record.outcomes)?;
    }

    for record in definitions {
        let name = match record.name {
            Some(name) => name,
            None => bail!(ErrorKind::MalformedNetwork("DEFINITION without FOR".to_owned()))
        };
        let table = match record.table {
            Some(table) => table,
            None => bail!(ErrorKind::MalformedNetwork(format!("DEFINITION of '{}' without TABLE", name)))
        };

        let probabilities = table.split_whitespace()
            .map(|p| p.parse::<f64>())
            .collect::<::std::result::Result<Vec<_>, _>>()
            .chain_err(|| ErrorKind::MalformedNetwork(format!("invalid probability table of '{}'", name)))?;
        net.add_dependency(&name, &record.parents[..], probabilities)?;
    }

    Ok(net)
}
