//! In-memory adapters for todo lifecycle storage.

mod todo;

pub use todo::InMemoryTodoRepository;
