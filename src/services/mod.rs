pub mod config_parser;
pub mod lattice_printer;
pub mod line_classifier;
pub mod submap_registry;
pub mod variable_table;

pub use config_parser::ConfigParser;
pub use lattice_printer::LatticePrinter;
pub use submap_registry::SubmapRegistry;
