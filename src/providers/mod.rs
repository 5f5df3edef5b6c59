pub mod extraction;
pub mod generation;
pub mod retrieval;

pub use extraction::{DocumentType, RemoteTextExtractor, TextExtractor};
pub use generation::{GroqTextGenerator, TextGenerator};
pub use retrieval::{DocumentIndex, EmbeddingProvider, GoogleEmbeddingProvider};
