//! Test Module
//!
//! Cross-module test suites for the complaint intake core.
//!
//! ## Test Categories
//! - `brain_tests`: Classification, sentiment and chat reply properties
//! - `intake_tests`: Complaint filing, status updates, feedback and chat turns
//! - `config_tests`: Environment configuration and catalog loading
