use tracing::info;

use crate::{
    domain::{
        common::{DatasetConfig, NutriscopeConfig, entities::app_errors::CoreError, services::Service},
        dataset::{entities::Table, ports::DatasetRepository},
    },
    infrastructure::{
        dataset::{CsvMacronutrientRepository, SampleDishRepository},
        llm::OpenAILLMClient,
    },
};

pub type NutriscopeService = Service<OpenAILLMClient>;

pub fn load_dataset(config: &DatasetConfig) -> Result<Table, CoreError> {
    match config {
        DatasetConfig::Sample { seed, size } => {
            SampleDishRepository::new(*seed, *size).load_table()
        }
        DatasetConfig::Csv { path } => CsvMacronutrientRepository::new(path.clone()).load_table(),
    }
}

/// Builds the service once at process entry. The source table is loaded here
/// and never reloaded.
pub fn create_service(config: NutriscopeConfig) -> Result<NutriscopeService, CoreError> {
    let table = load_dataset(&config.dataset)?;
    info!(
        kind = ?table.schema().kind,
        rows = table.len(),
        "dataset ready"
    );

    let llm_client = OpenAILLMClient::new(
        config.llm.openai_api_key,
        config.llm.openai_model,
        config.llm.openai_base_url,
    );

    Ok(Service::new(table, llm_client))
}
