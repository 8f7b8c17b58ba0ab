mod service;

pub use service::TaxonomyQueryService;
