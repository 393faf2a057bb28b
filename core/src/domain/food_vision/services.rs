use std::sync::Arc;

use tokio::task;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_vision::{
        entities::{DetectedFood, FoodInfo},
        ports::{FoodRecognitionService, LLMClient},
        value_objects::{DetectFoodInput, FoodInfoInput},
    },
    image::entities::TemporaryAsset,
    prompt::services::PromptComposer,
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn ingest(&self, image_data: Vec<u8>) -> Result<TemporaryAsset, CoreError> {
        let ingestor = Arc::clone(&self.ingestor);
        task::spawn_blocking(move || ingestor.ingest(&image_data))
            .await
            .map_err(|e| CoreError::TemporaryAssetError(format!("ingest task failed: {}", e)))?
    }

    async fn name_food(&self, asset: &TemporaryAsset, language: &str) -> Result<String, CoreError> {
        let credential = self.key_ring.pick()?;
        let prompt = PromptComposer::detection_prompt(language);

        let raw = self
            .llm_client
            .generate_with_image(&credential, prompt, asset.path())
            .await?;

        non_empty(raw)
    }

    async fn run_detection(&self, input: DetectFoodInput) -> Result<DetectedFood, CoreError> {
        let asset = self.ingest(input.image_data).await?;

        // The asset is released whether or not the provider call succeeded.
        let outcome = self.name_food(&asset, &input.language).await;
        if let Err(e) = asset.release() {
            warn!("{}", e);
        }

        let food_name = outcome?;
        self.session.set(&input.scope, food_name.clone());

        Ok(DetectedFood { food_name })
    }

    async fn run_info(&self, input: FoodInfoInput) -> Result<FoodInfo, CoreError> {
        let food_name = self
            .session
            .get_or_default(&input.scope, input.food_name.as_deref())?;

        let credential = self.key_ring.pick()?;
        let prompt = PromptComposer::info_prompt(&food_name, &input.info_type, &input.language);

        let raw = self.llm_client.generate_with_text(&credential, prompt).await?;

        Ok(FoodInfo {
            food_name,
            info_type: input.info_type,
            response: non_empty(raw)?,
        })
    }
}

fn non_empty(raw: String) -> Result<String, CoreError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CoreError::ProviderCallFailed(
            "empty response from provider".to_string(),
        ));
    }

    Ok(text.to_string())
}

impl<LLM> FoodRecognitionService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(image_bytes = input.image_data.len(), language = %input.language))]
    async fn detect_food(&self, input: DetectFoodInput) -> Result<DetectedFood, CoreError> {
        match self.run_detection(input).await {
            Ok(detected) => {
                info!(food_name = %detected.food_name, "food detected");
                Ok(detected)
            }
            Err(e) => {
                error!("Error in detect_food: {}", e);
                Err(e)
            }
        }
    }

    #[instrument(skip_all, fields(info_type = %input.info_type, language = %input.language))]
    async fn get_food_info(&self, input: FoodInfoInput) -> Result<FoodInfo, CoreError> {
        self.run_info(input).await.inspect_err(|e| {
            error!("Error in get_food_info: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        path::{Path, PathBuf},
        sync::Mutex,
        time::Duration,
    };

    use image::ImageFormat;

    use super::*;
    use crate::{
        domain::{
            common::IngestConfig,
            credential::{services::ProviderKeyRing, value_objects::Credential},
            image::services::ImageIngestor,
            session::{services::RecognitionSession, value_objects::SessionScope},
        },
        test_support::encode_fixture,
    };

    #[derive(Debug, Clone)]
    struct RecordedCall {
        credential: String,
        prompt: String,
        image_path: Option<PathBuf>,
        image_existed: bool,
    }

    struct StubLLMClient {
        image_reply: Result<String, CoreError>,
        text_reply: Result<String, CoreError>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl StubLLMClient {
        fn new(image_reply: Result<&str, CoreError>, text_reply: Result<&str, CoreError>) -> Self {
            Self {
                image_reply: image_reply.map(str::to_string),
                text_reply: text_reply.map(str::to_string),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl LLMClient for StubLLMClient {
        async fn generate_with_image(
            &self,
            credential: &Credential,
            prompt: String,
            image_path: &Path,
        ) -> Result<String, CoreError> {
            self.calls.lock().unwrap().push(RecordedCall {
                credential: credential.expose().to_string(),
                prompt,
                image_path: Some(image_path.to_path_buf()),
                image_existed: image_path.exists(),
            });
            self.image_reply.clone()
        }

        async fn generate_with_text(
            &self,
            credential: &Credential,
            prompt: String,
        ) -> Result<String, CoreError> {
            self.calls.lock().unwrap().push(RecordedCall {
                credential: credential.expose().to_string(),
                prompt,
                image_path: None,
                image_existed: false,
            });
            self.text_reply.clone()
        }
    }

    fn service_with(
        stub: StubLLMClient,
        keys: &[&str],
        dir: &tempfile::TempDir,
    ) -> Service<StubLLMClient> {
        Service::new(
            stub,
            ProviderKeyRing::new(keys.iter().copied()),
            ImageIngestor::new(&IngestConfig {
                temp_dir: Some(dir.path().to_path_buf()),
                ..IngestConfig::default()
            }),
            RecognitionSession::new(Duration::from_secs(60), 64),
        )
    }

    fn detect_input(image_data: Vec<u8>) -> DetectFoodInput {
        DetectFoodInput {
            image_data,
            language: "english".to_string(),
            scope: SessionScope::Global,
        }
    }

    fn info_input(food_name: Option<&str>, info_type: &str) -> FoodInfoInput {
        FoodInfoInput {
            food_name: food_name.map(str::to_string),
            info_type: info_type.to_string(),
            language: "english".to_string(),
            scope: SessionScope::Global,
        }
    }

    fn dir_is_empty(dir: &tempfile::TempDir) -> bool {
        std::fs::read_dir(dir.path()).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_detect_then_info_uses_remembered_food() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(
            StubLLMClient::new(Ok("  Jollof rice\n"), Ok(" About 350 kcal per plate. ")),
            &["key-a"],
            &dir,
        );

        let detected = service
            .detect_food(detect_input(encode_fixture(ImageFormat::Jpeg)))
            .await
            .unwrap();
        assert_eq!(detected.food_name, "Jollof rice");

        let info = service
            .get_food_info(info_input(Some(""), "Calories content"))
            .await
            .unwrap();
        assert_eq!(
            info,
            FoodInfo {
                food_name: "Jollof rice".to_string(),
                info_type: "Calories content".to_string(),
                response: "About 350 kcal per plate.".to_string(),
            }
        );

        let calls = service.llm_client.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].image_existed);
        assert!(calls[0].prompt.contains("one or two words"));
        assert_eq!(calls[0].credential, "key-a");
        assert!(calls[1].prompt.contains("Calories content"));
        assert!(calls[1].prompt.contains("Jollof rice"));
    }

    #[tokio::test]
    async fn test_asset_removed_after_successful_detection() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(StubLLMClient::new(Ok("Suya"), Ok("")), &["key-a"], &dir);

        service
            .detect_food(detect_input(encode_fixture(ImageFormat::Png)))
            .await
            .unwrap();

        let path = service.llm_client.calls()[0].image_path.clone().unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(!path.exists());
        assert!(dir_is_empty(&dir));
    }

    #[tokio::test]
    async fn test_asset_removed_after_provider_failure() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(
            StubLLMClient::new(
                Err(CoreError::ProviderCallFailed("quota exceeded".to_string())),
                Ok(""),
            ),
            &["key-a"],
            &dir,
        );

        let err = service
            .detect_food(detect_input(encode_fixture(ImageFormat::Jpeg)))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::ProviderCallFailed("quota exceeded".to_string()));

        let call = &service.llm_client.calls()[0];
        assert!(call.image_existed);
        assert!(!call.image_path.as_ref().unwrap().exists());
        assert_eq!(service.session.last(&SessionScope::Global), None);
    }

    #[tokio::test]
    async fn test_asset_removed_when_no_credential() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(StubLLMClient::new(Ok("Suya"), Ok("")), &[""], &dir);

        let err = service
            .detect_food(detect_input(encode_fixture(ImageFormat::Jpeg)))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NoCredentialAvailable);
        assert!(service.llm_client.calls().is_empty());
        assert!(dir_is_empty(&dir));
    }

    #[tokio::test]
    async fn test_invalid_upload_never_reaches_provider() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(StubLLMClient::new(Ok("Suya"), Ok("")), &["key-a"], &dir);

        let err = service
            .detect_food(detect_input(b"just some text".to_vec()))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidImageFormat);

        let err = service
            .detect_food(detect_input(encode_fixture(ImageFormat::Bmp)))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::UnsupportedFormat("Bmp".to_string()));

        assert!(service.llm_client.calls().is_empty());
        assert!(dir_is_empty(&dir));
    }

    #[tokio::test]
    async fn test_empty_detection_does_not_overwrite_memory() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(StubLLMClient::new(Ok("   "), Ok("")), &["key-a"], &dir);
        service.session.set(&SessionScope::Global, "Egusi soup");

        let err = service
            .detect_food(detect_input(encode_fixture(ImageFormat::Jpeg)))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ProviderCallFailed(_)));
        assert_eq!(
            service.session.last(&SessionScope::Global),
            Some("Egusi soup".to_string())
        );
    }

    #[tokio::test]
    async fn test_info_without_context_fails_before_provider() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(StubLLMClient::new(Ok(""), Ok("text")), &["key-a"], &dir);

        let err = service
            .get_food_info(info_input(None, "Ingredients"))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NoFoodContext);
        assert!(service.llm_client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_info_with_explicit_name_and_uncatalogued_type() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(
            StubLLMClient::new(Ok(""), Ok("Eaten at parties.")),
            &["key-a"],
            &dir,
        );

        let info = service
            .get_food_info(info_input(Some("Puff puff"), "Party etiquette"))
            .await
            .unwrap();

        assert_eq!(info.food_name, "Puff puff");
        assert_eq!(info.info_type, "Party etiquette");
        assert!(service.llm_client.calls()[0].prompt.contains("Party etiquette"));
    }

    #[tokio::test]
    async fn test_info_provider_failure_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(
            StubLLMClient::new(
                Ok(""),
                Err(CoreError::ProviderCallFailed("503".to_string())),
            ),
            &["key-a"],
            &dir,
        );

        let err = service
            .get_food_info(info_input(Some("Suya"), "Origin and history"))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::ProviderCallFailed("503".to_string()));
    }

    #[tokio::test]
    async fn test_detection_is_scoped_per_client() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(StubLLMClient::new(Ok("Suya"), Ok("Spicy.")), &["key-a"], &dir);
        let alice = SessionScope::Client("alice".to_string());

        service
            .detect_food(DetectFoodInput {
                scope: alice.clone(),
                ..detect_input(encode_fixture(ImageFormat::Jpeg))
            })
            .await
            .unwrap();

        let info = service
            .get_food_info(FoodInfoInput {
                scope: alice,
                ..info_input(None, "Ingredients")
            })
            .await
            .unwrap();
        assert_eq!(info.food_name, "Suya");

        let err = service
            .get_food_info(info_input(None, "Ingredients"))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NoFoodContext);
    }
}
