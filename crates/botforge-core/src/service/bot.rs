//! Generation service.
//!
//! Orchestrates the full generation flow: validate the configuration,
//! generate the code, persist the record, and expose read/delete access to
//! stored records. Generic over the repository trait so tests can substitute
//! an in-memory fake -- botforge-core never depends on botforge-infra.

use botforge_types::bot::{BotConfig, GeneratedBot, GeneratedBotId, GeneratedBotSummary, GenerationResponse};
use botforge_types::error::BotError;
use botforge_types::template::TemplateSummary;

use crate::generator::CodeGenerator;
use crate::repository::bot::GeneratedBotRepository;

/// Service wiring the code generator to a record store.
pub struct GeneratorService<R: GeneratedBotRepository> {
    repo: R,
    generator: CodeGenerator,
}

impl<R: GeneratedBotRepository> GeneratorService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            generator: CodeGenerator::new(),
        }
    }

    /// Discovery listing of the template catalog.
    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        self.generator.list_templates()
    }

    /// Generate bot code and persist a record of the request.
    ///
    /// The record is written only after generation succeeds; a generation
    /// fault never leaves a partial record behind.
    pub async fn generate_bot(
        &self,
        config: BotConfig,
    ) -> Result<GenerationResponse, BotError> {
        if config.name.trim().is_empty() {
            return Err(BotError::InvalidConfig("name cannot be empty".to_string()));
        }

        let artifact = self.generator.generate(&config)?;

        let record = GeneratedBot::from_config(config, artifact.code);
        self.repo
            .insert(&record)
            .await
            .map_err(|e| BotError::Storage(e.to_string()))?;

        tracing::info!(
            bot_id = %record.id,
            template = %artifact.template,
            "generated bot stored"
        );

        Ok(GenerationResponse {
            success: true,
            bot_id: record.id,
            code: record.code,
            requirements: artifact.requirements,
            setup_instructions: artifact.setup_instructions,
        })
    }

    /// List stored records, newest first (no code field).
    pub async fn list_bots(&self) -> Result<Vec<GeneratedBotSummary>, BotError> {
        let bots = self
            .repo
            .list()
            .await
            .map_err(|e| BotError::Storage(e.to_string()))?;
        Ok(bots.iter().map(GeneratedBot::summary).collect())
    }

    /// Fetch the full record for an id.
    pub async fn get_bot(&self, id: &GeneratedBotId) -> Result<GeneratedBot, BotError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(BotError::from)?
            .ok_or(BotError::NotFound)
    }

    /// Delete a record. A missing id is a reportable `NotFound`, not a fault.
    pub async fn delete_bot(&self, id: &GeneratedBotId) -> Result<(), BotError> {
        let deleted = self.repo.delete(id).await.map_err(BotError::from)?;
        if deleted == 0 {
            return Err(BotError::NotFound);
        }
        tracing::info!(bot_id = %id, "generated bot deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botforge_types::bot::DEFAULT_TOKEN_VAR;
    use botforge_types::error::RepositoryError;
    use std::sync::Mutex;

    /// In-memory repository fake, newest-first like the SQLite implementation.
    #[derive(Default)]
    struct InMemoryRepository {
        records: Mutex<Vec<GeneratedBot>>,
    }

    impl GeneratedBotRepository for InMemoryRepository {
        async fn insert(&self, bot: &GeneratedBot) -> Result<(), RepositoryError> {
            self.records.lock().unwrap().push(bot.clone());
            Ok(())
        }

        async fn list(&self) -> Result<Vec<GeneratedBot>, RepositoryError> {
            let mut records = self.records.lock().unwrap().clone();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(records)
        }

        async fn get_by_id(
            &self,
            id: &GeneratedBotId,
        ) -> Result<Option<GeneratedBot>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|b| &b.id == id)
                .cloned())
        }

        async fn delete(&self, id: &GeneratedBotId) -> Result<u64, RepositoryError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|b| &b.id != id);
            Ok((before - records.len()) as u64)
        }
    }

    fn service() -> GeneratorService<InMemoryRepository> {
        GeneratorService::new(InMemoryRepository::default())
    }

    fn config(name: &str, commands: &[&str]) -> BotConfig {
        BotConfig {
            name: name.to_string(),
            description: "test".to_string(),
            features: vec!["echo".to_string()],
            commands: commands.iter().map(|c| c.to_string()).collect(),
            has_inline_buttons: false,
            has_webhook: false,
            has_database: false,
            token_var_name: DEFAULT_TOKEN_VAR.to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_then_get_round_trip() {
        let service = service();
        let cfg = config("Round Trip", &["start", "foo"]);

        let response = service.generate_bot(cfg.clone()).await.unwrap();
        assert!(response.success);

        let record = service.get_bot(&response.bot_id).await.unwrap();
        assert_eq!(record.name, cfg.name);
        assert_eq!(record.description, cfg.description);
        assert_eq!(record.features, cfg.features);
        assert_eq!(record.code, response.code);
    }

    #[tokio::test]
    async fn test_empty_name_rejected_before_generation() {
        let service = service();
        let cfg = config("   ", &[]);

        let err = service.generate_bot(cfg).await.unwrap_err();
        assert!(matches!(err, BotError::InvalidConfig(_)));
        assert!(service.list_bots().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_bots_newest_first_without_code() {
        let service = service();
        let first = service.generate_bot(config("First", &[])).await.unwrap();
        let second = service.generate_bot(config("Second", &[])).await.unwrap();

        let summaries = service.list_bots().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, second.bot_id);
        assert_eq!(summaries[1].id, first.bot_id);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let service = service();
        let response = service.generate_bot(config("Doomed", &[])).await.unwrap();

        service.delete_bot(&response.bot_id).await.unwrap();
        let err = service.delete_bot(&response.bot_id).await.unwrap_err();
        assert!(matches!(err, BotError::NotFound));
    }

    #[tokio::test]
    async fn test_get_unknown_id_reports_not_found() {
        let service = service();
        let err = service.get_bot(&GeneratedBotId::new()).await.unwrap_err();
        assert!(matches!(err, BotError::NotFound));
    }

    #[tokio::test]
    async fn test_each_generation_gets_fresh_id() {
        let service = service();
        let a = service.generate_bot(config("A", &[])).await.unwrap();
        let b = service.generate_bot(config("B", &[])).await.unwrap();
        assert_ne!(a.bot_id, b.bot_id);
    }
}
