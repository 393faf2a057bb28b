use std::sync::Arc;

use crate::domain::{
    credential::services::ProviderKeyRing, food_vision::ports::LLMClient,
    image::services::ImageIngestor, session::services::RecognitionSession,
};

pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) key_ring: Arc<ProviderKeyRing>,
    pub(crate) ingestor: Arc<ImageIngestor>,
    pub(crate) session: Arc<RecognitionSession>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(
        llm_client: LLM,
        key_ring: ProviderKeyRing,
        ingestor: ImageIngestor,
        session: RecognitionSession,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            key_ring: Arc::new(key_ring),
            ingestor: Arc::new(ingestor),
            session: Arc::new(session),
        }
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            key_ring: Arc::clone(&self.key_ring),
            ingestor: Arc::clone(&self.ingestor),
            session: Arc::clone(&self.session),
        }
    }
}
