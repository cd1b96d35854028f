//! Unit tests for HTTP error mapping.
