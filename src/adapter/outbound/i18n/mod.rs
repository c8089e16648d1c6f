//! Localized message catalogues.

mod bundle;

pub use bundle::BundleMessageResolver;
