//! RDAP endpoint knowledge, kept in one place for the domain checker.

pub mod registry;
