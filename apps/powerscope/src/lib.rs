//! # powerscope
//!
//! Library half of the `powerscope` binary: the clap command tree and the
//! command implementations, exposed so integration tests can reach them.

pub mod cli;
