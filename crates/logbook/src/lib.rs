//! logbook library
//!
//! This module exports the site generation pieces of logbook for use in
//! integration tests and as a library. History extraction lives in the
//! `logbook-git` crate.

pub mod config;
pub mod markdown;
pub mod site;
pub mod template;
