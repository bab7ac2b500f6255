// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate fnv;
extern crate regex;
extern crate once_cell;
extern crate xml;
extern crate algorithm;

pub mod errors;
pub mod graph_models;
pub mod query;
pub mod settings;
pub mod io;
pub mod prelude;
