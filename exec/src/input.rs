use std::fs::File;
use std::io::{ BufReader, Read };
use std::path::{ Path, PathBuf };
use errors::*;

/// Content of an input file: the network on the first non-empty line, then
/// one query per line.
#[derive(Debug)]
pub struct RunInput {
    pub network: PathBuf,
    pub queries: Vec<String>
}

impl RunInput {
    pub fn from_file(finput: &Path) -> Result<RunInput> {
        let mut content = String::new();
        BufReader::new(File::open(finput).chain_err(|| format!("cannot open input file {:?}", finput))?)
            .read_to_string(&mut content)?;

        let workdir = finput.parent().unwrap_or(Path::new("."));
        RunInput::from_str(&content, workdir).chain_err(|| format!("invalid input file {:?}", finput))
    }

    /// A relative network path that doesn't exist as given is looked up in `workdir`
    pub fn from_str(content: &str, workdir: &Path) -> Result<RunInput> {
        let mut lines = content.lines().map(|l| l.trim()).filter(|l| l.len() > 0);
        let network = match lines.next() {
            Some(line) => PathBuf::from(line),
            None => bail!(ErrorKind::EmptyInput(workdir.display().to_string()))
        };

        let network = if network.is_relative() && !network.exists() {
            workdir.join(network)
        } else {
            network
        };

        Ok(RunInput {
            network,
            queries: lines.map(|l| l.to_owned()).collect()
        })
    }
}
