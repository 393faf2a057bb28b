use crate::{
    domain::{
        common::{FoodVisionConfig, entities::app_errors::CoreError, services::Service},
        credential::services::ProviderKeyRing,
        image::services::ImageIngestor,
        session::services::RecognitionSession,
    },
    infrastructure::llm::{GeminiConfig, GeminiLLMClient},
};

pub type FoodVisionService = Service<GeminiLLMClient>;

/// Wires the production service. Fails when the configured key set is unusable.
pub fn create_service(config: FoodVisionConfig) -> Result<FoodVisionService, CoreError> {
    let key_ring = ProviderKeyRing::new(config.llm.api_keys);
    key_ring.ensure_usable()?;

    let llm_client = GeminiLLMClient::new(GeminiConfig {
        model_name: config.llm.gemini_model,
        base_url: config.llm.gemini_base_url,
        timeout: config.llm.timeout,
    })?;

    tracing::info!(credentials = key_ring.len(), "food vision service initialized");

    Ok(Service::new(
        llm_client,
        key_ring,
        ImageIngestor::new(&config.ingest),
        RecognitionSession::new(config.session.ttl, config.session.max_clients),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{IngestConfig, LLMConfig, SessionConfig};

    fn config(api_keys: Vec<&str>) -> FoodVisionConfig {
        FoodVisionConfig {
            llm: LLMConfig {
                api_keys: api_keys.into_iter().map(str::to_string).collect(),
                gemini_model: "gemini-1.5-flash".to_string(),
                gemini_base_url: "http://localhost:9".to_string(),
                timeout: None,
            },
            ingest: IngestConfig::default(),
            session: SessionConfig::default(),
        }
    }

    #[test]
    fn test_create_service_requires_credentials() {
        assert_eq!(
            create_service(config(vec![])).err(),
            Some(CoreError::NoCredentialAvailable)
        );
        assert_eq!(
            create_service(config(vec!["key-a", ""])).err(),
            Some(CoreError::NoCredentialAvailable)
        );
    }

    #[test]
    fn test_create_service_with_keys() {
        let service = create_service(config(vec!["key-a", "key-b"])).unwrap();
        assert_eq!(service.key_ring.len(), 2);
    }
}
