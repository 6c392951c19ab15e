//! End-to-end engine tests.

mod pipeline;
mod properties;
