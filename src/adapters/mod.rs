pub mod ollama_client_http;

pub use ollama_client_http::HttpOllamaClient;
