//! Unit and service-level tests for the task module.

mod service_tests;
