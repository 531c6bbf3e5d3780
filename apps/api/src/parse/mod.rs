//! Resume parsing pipeline: take an uploaded PDF, pull the raw text out of
//! it, then scan that text for contact details and known skills.

pub mod extractor;
pub mod fields;
pub mod handlers;
