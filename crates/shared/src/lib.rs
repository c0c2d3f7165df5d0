//! Types shared between the post client library and its front ends.

pub mod domain;
pub mod error;
