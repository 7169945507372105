//! HTTP adapters for the directory's outbound ports.

mod enrichment;

pub use enrichment::HttpEnrichmentGateway;
