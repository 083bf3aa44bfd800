pub mod library;
pub mod ollama;
