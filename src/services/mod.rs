pub mod distributor;
pub mod export_writer;
pub mod fetch_service;
pub mod normalizer;

pub use export_writer::ExportWriter;
pub use fetch_service::FetchService;
