pub mod assemble;
pub mod config;
pub mod error;
pub mod params;
pub mod parse;
pub mod render;
pub mod request;

pub use assemble::{ApiDocument, DocumentInputs, Report, SpecificationSource, generate};
pub use params::ParameterDictionary;
pub use request::{CurlExecutor, ExampleRequest, OfflineExecutor, RequestExecutor};
