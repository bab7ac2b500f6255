mod xml_loader;

pub use self::xml_loader::{ load_network, read_network };
