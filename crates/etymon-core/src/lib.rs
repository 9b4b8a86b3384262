pub mod enrich;
pub mod preprocess;
pub mod service;

pub use service::WordRootService;
