use async_trait::async_trait;

use study_assistant_server::errors::AppResult;
use study_assistant_server::providers::extraction::{DocumentType, TextExtractor};
use study_assistant_server::providers::generation::TextGenerator;
use study_assistant_server::providers::retrieval::EmbeddingProvider;

mockall::mock! {
    pub Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, prompt: &str) -> AppResult<String>;
    }
}

mockall::mock! {
    pub Embedder {}

    #[async_trait]
    impl EmbeddingProvider for Embedder {
        async fn embed(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>>;
    }
}

mockall::mock! {
    pub Extractor {}

    #[async_trait]
    impl TextExtractor for Extractor {
        async fn extract(
            &self,
            file_name: &str,
            file_type: DocumentType,
            data: &[u8],
        ) -> AppResult<String>;
    }
}

/// One embedding vector per input text; good enough for index plumbing.
pub fn stub_embedder() -> MockEmbedder {
    let mut embedder = MockEmbedder::new();
    embedder
        .expect_embed()
        .returning(|texts| Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect()));
    embedder
}

pub const DOCUMENT_TEXT: &str =
    "Paris is the capital of France. A linear scan over n items takes O(n) time.";

pub const RAW_QUIZ: &str = "\
Q1: What is the capital of France?
A. London
B. Paris <-- correct
C. Berlin
D. Madrid
Q2: What is 2 + 2?
A. 3
B. 4 <-- correct
C. 5
D. 6
Q3: What is the time complexity of a linear scan?
A. O(1)
B. O(n log n)
C. O(n) <-- correct
D. O(n^2)
";
