mod pandal_handler;

pub use pandal_handler::*;
