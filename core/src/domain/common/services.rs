use std::sync::Arc;

use crate::domain::{completion::ports::LLMClient, dataset::entities::Table};

/// Application service. Holds the source table loaded at startup and the
/// completion client; every domain service trait is implemented on it.
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) table: Arc<Table>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(table: Table, llm_client: LLM) -> Self {
        Self {
            table: Arc::new(table),
            llm_client: Arc::new(llm_client),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
