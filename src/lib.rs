//! Public library API for the `nvset` named-value container.

/// Named-value container types, errors, and marshalling helpers.
pub mod nvs;
