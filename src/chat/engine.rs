//! The condense-plus-context chat engine
//!
//! Each turn runs the same sequence: personalize the message with any
//! saved assessment result, condense follow-ups into a standalone
//! retrieval query, pull the closest corpus chunks, then generate against
//! the assembled context with the full conversation replayed.

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::assessment::ResultStore;
use crate::chat::memory::ChatMemory;
use crate::chat::prompts;
use crate::config::AppConfig;
use crate::corpus::build_index;
use crate::corpus::CorpusLoader;
use crate::corpus::ScoredChunk;
use crate::corpus::VectorIndex;
use crate::embeddings::EmbeddingService;
use crate::errors::Result;
use crate::llm::ChatMessage;
use crate::llm::LlmService;
use crate::rag::ContextAssembler;
use crate::rag::Retriever;

/// A generated reply with the sources behind it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    pub sources: Vec<ScoredChunk>,
}

/// RAG chat engine for career advice
pub struct ChatEngine {
    retriever: Retriever,
    assembler: ContextAssembler,
    llm_service: Arc<LlmService>,
    result_store: ResultStore,
    temperature: f32,
    max_tokens: usize,
    retrieval_limit: usize,
    memory_token_limit: usize,
}

impl ChatEngine {
    /// Wire an engine from already-built services
    pub fn new(
        llm_service: Arc<LlmService>,
        embedding_service: Arc<EmbeddingService>,
        index: Arc<VectorIndex>,
        result_store: ResultStore,
        config: &AppConfig,
    ) -> Self {
        Self {
            retriever: Retriever::new(embedding_service, index),
            assembler: ContextAssembler::new(config.max_context_chars()),
            llm_service,
            result_store,
            temperature: config.temperature(),
            max_tokens: config.max_tokens(),
            retrieval_limit: config.retrieval_limit(),
            memory_token_limit: config.memory_token_limit(),
        }
    }

    /// Build a fully wired engine: clients, result store, and a fresh
    /// corpus index
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let embedding_service = Arc::new(EmbeddingService::new(config)?);
        let llm_service = Arc::new(LlmService::new(config)?);
        let result_store = ResultStore::new(config.results_path());

        // The score sheet lives under docs/ but is state, not advice
        let loader = CorpusLoader::new(config.docs_dir(), config.chunk_chars())
            .exclude(config.results_path());
        let index = Arc::new(build_index(&loader, &embedding_service).await?);
        info!(
            "Chat engine ready: {} indexed chunk(s), model {}",
            index.len(),
            llm_service.model()
        );

        Ok(Self::new(
            llm_service,
            embedding_service,
            index,
            result_store,
            config,
        ))
    }

    /// Opening message for a fresh conversation
    pub fn greeting(&self) -> &'static str {
        prompts::GREETING
    }

    /// A memory sized to this engine's token budget
    pub fn new_memory(&self) -> ChatMemory {
        ChatMemory::new(self.memory_token_limit)
    }

    /// Number of chunks available for retrieval
    pub fn index_size(&self) -> usize {
        self.retriever.index_size()
    }

    pub fn result_store(&self) -> &ResultStore {
        &self.result_store
    }

    /// Run one conversation turn
    pub async fn respond(&self, memory: &mut ChatMemory, user_message: &str) -> Result<ChatReply> {
        // Step 1: personalize with whatever result is on disk
        let scores = self.result_store.load()?;
        let personalized = prompts::personalize(user_message, scores.as_ref());
        debug!("Step 1: personalized message ({} chars)", personalized.len());

        // Step 2: condense follow-ups into a standalone retrieval query
        let standalone = if memory.is_empty() {
            personalized.clone()
        } else {
            let condense = prompts::condense_prompt(&memory.history_text(), &personalized);
            self.llm_service
                .generate_with_params(&condense, self.temperature, self.max_tokens)
                .await?
        };
        debug!("Step 2: standalone question ready");

        // Step 3: retrieve supporting chunks
        let sources = self
            .retriever
            .retrieve(&standalone, self.retrieval_limit)
            .await?;
        debug!("Step 3: retrieved {} source(s)", sources.len());

        // Step 4: generate against context plus the replayed conversation.
        // The condensed question is only for retrieval; the model sees the
        // personalized message the user actually sent.
        let context = self.assembler.assemble(&sources);
        let mut messages = Vec::with_capacity(memory.len() + 2);
        messages.push(ChatMessage::system(build_system_prompt(&context)));
        messages.extend_from_slice(memory.messages());
        messages.push(ChatMessage::user(personalized.clone()));

        let answer = self
            .llm_service
            .chat_with_params(&messages, self.temperature, self.max_tokens)
            .await?;
        debug!("Step 4: generated answer ({} chars)", answer.len());

        // Step 5: remember the exchange
        memory.push(ChatMessage::user(personalized));
        memory.push(ChatMessage::assistant(answer.clone()));

        Ok(ChatReply { answer, sources })
    }
}

/// Persona plus the context-bearing instruction block
fn build_system_prompt(context: &str) -> String {
    format!(
        "{}\n\n{}",
        prompts::SYSTEM_PROMPT,
        prompts::context_prompt(context)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_carries_persona_and_context() {
        let system = build_system_prompt("[Source 1: a.txt]\nEngineers build things.");
        assert!(system.contains("expert career advisor"));
        assert!(system.contains("I DON'T KNOW"));
        assert!(system.contains("[Source 1: a.txt]\nEngineers build things."));
    }

    #[tokio::test]
    #[ignore = "Requires running Ollama"]
    async fn test_live_conversation_turn() -> crate::Result<()> {
        let config = AppConfig::default();
        let engine = ChatEngine::from_config(&config).await?;
        let mut memory = engine.new_memory();

        let reply = engine
            .respond(&mut memory, "What careers suit an Artistic type?")
            .await?;
        assert!(!reply.answer.is_empty());
        assert_eq!(memory.len(), 2);
        Ok(())
    }
}
