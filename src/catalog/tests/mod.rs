//! Unit tests for the monkey catalog.

mod record_tests;
