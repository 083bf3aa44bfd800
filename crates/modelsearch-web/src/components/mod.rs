pub mod header;
pub mod model_search;
