//! Query services over the monkey catalog.

mod catalog;

pub use catalog::MonkeyCatalog;
