use anyhow::Result;
use finpre_common::FinpreConfig;
use finpre_core::{Engine, EngineSpawnOk, Event, GeminiBackend, GenerationClient, Op};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns the background generation engine and forwards its events to a
/// channel the UI loop can drain without blocking.
pub struct GeneratorHandle {
    engine: Engine,
    pub rx: mpsc::Receiver<Event>,
}

impl GeneratorHandle {
    pub async fn spawn(config: &FinpreConfig) -> Result<Self> {
        // A missing credential is not a startup error: the viewer opens
        // normally and the failure surfaces per submission, pre-flight.
        let api_key = config.resolve_api_key().unwrap_or_default();
        let client: Arc<dyn GenerationClient> =
            Arc::new(GeminiBackend::new_with_model(api_key, config.model.clone()));

        let EngineSpawnOk { engine } = Engine::spawn(client).await?;

        let (tx, rx) = mpsc::channel(256);
        let engine_events = engine.clone();
        tokio::spawn(async move {
            while let Some(event) = engine_events.next_event().await {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });
        Ok(Self { engine, rx })
    }

    pub fn submit_topic_bg(&self, topic: String) {
        let engine = self.engine.clone();
        tokio::spawn(async move {
            let _ = engine.submit(Op::Generate { topic }).await;
        });
    }
}
