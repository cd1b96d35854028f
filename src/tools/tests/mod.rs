//! Unit tests for the todo tool registry.
