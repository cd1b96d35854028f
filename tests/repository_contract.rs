//! Store contract tests run against every todo repository adapter.
//!
//! Tests are organized into modules by functionality:
//! - `crud_tests`: Creation, lookup, listing and deletion
//! - `mutation_tests`: Text replacement and completion stamps
//! - `deadline_tests`: Timed-out calls against the `SQLite` store

mod repository_contract {
    pub mod helpers;

    mod crud_tests;
    mod deadline_tests;
    mod mutation_tests;
}
