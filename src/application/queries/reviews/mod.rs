mod service;

pub use service::ReviewQueryService;
