//! Unit tests for the todo lifecycle module.
