// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate bayesnet;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate env_logger;
#[macro_use]
extern crate clap;
extern crate rayon;

use std::fs::File;
use std::io::{ stdout, BufWriter, Write };
use std::path::Path;
use std::time::Instant;

use bayesnet::prelude::{ load_network, Configuration, Settings };
use errors::*;

mod errors;
mod input;
mod runner;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        println!("error: {}", e);
        for e in e.iter().skip(1) {
            println!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            println!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let app_m = clap_app!(exec =>
        (about: "Answer probability queries over a discrete Bayesian network")
        (@arg input: -i +required +takes_value "input file: network path on the first line, then one query per line")
        (@arg output: -o +takes_value "output file [default=stdout]")
        (@arg settings: -c +takes_value "settings file")
        (@arg json: --json "write one JSON object per query")
    ).get_matches();

    let settings = match app_m.value_of("settings") {
        Some(fsettings) => Configuration::from_file(Path::new(fsettings))?.settings,
        None => Settings::default()
    };
    debug!("Current settings: {:?}", settings);

    let input = input::RunInput::from_file(Path::new(app_m.value_of("input").unwrap_or_default()))?;
    let net = load_network(&input.network)?;
    info!("loaded {} variables from {:?}", net.len(), input.network);

    let start = Instant::now();
    let records = runner::answer_queries(&net, &input.queries, &settings);
    let elapsed = start.elapsed();
    info!("answered {} queries in {}.{:03}s", records.len(), elapsed.as_secs(), elapsed.subsec_millis());

    let as_json = app_m.is_present("json");
    match app_m.value_of("output") {
        Some(foutput) => {
            let file = File::create(foutput).chain_err(|| format!("cannot create output file {}", foutput))?;
            let mut writer = BufWriter::new(file);
            runner::write_records(&mut writer, &records, &settings, as_json)?;
            writer.flush()?;
        },
        None => {
            let out = stdout();
            let mut writer = out.lock();
            runner::write_records(&mut writer, &records, &settings, as_json)?;
        }
    }

    Ok(())
}
