pub mod autocomplete;
pub mod client;
pub mod debounce;

pub use autocomplete::{Autocomplete, SearchView};
pub use client::{HttpSearchClient, SearchClient};
pub use debounce::Debouncer;
