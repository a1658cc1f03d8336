//! Analysis API: validate, forward to the classifier, relay the result.

pub mod handlers;
pub mod validation;
