mod pandal_service;

pub use pandal_service::PandalService;
