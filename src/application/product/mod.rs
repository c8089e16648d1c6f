//! Product catalogue use cases.

mod service;

pub use service::ProductService;
