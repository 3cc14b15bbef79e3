mod in_memory_quote;
mod sqlite_quote;

pub use in_memory_quote::InMemoryQuoteRepository;
pub use sqlite_quote::SqliteQuoteRepository;
