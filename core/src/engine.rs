use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::info;

use crate::client::GenerationClient;
use finpre_common::Presentation;

/// Requests submitted to the engine.
#[derive(Debug, Clone)]
pub enum Op {
    Generate { topic: String },
    Shutdown,
}

/// Events emitted back to the UI.
#[derive(Debug, Clone)]
pub enum Event {
    TaskStarted,
    TaskComplete { presentation: Presentation },
    Error { message: String },
    ShutdownComplete,
}

/// Handle to the background generation task. Ops are processed strictly in
/// order by one task, so at most one remote call is outstanding at a time.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<Inner>,
}

struct Inner {
    tx_submit: mpsc::Sender<Op>,
    rx_event: Mutex<mpsc::Receiver<Event>>,
}

pub struct EngineSpawnOk {
    pub engine: Engine,
}

impl Engine {
    pub async fn spawn(client: Arc<dyn GenerationClient>) -> Result<EngineSpawnOk> {
        let (tx_submit, mut rx_submit) = mpsc::channel::<Op>(64);
        let (tx_event, rx_event) = mpsc::channel::<Event>(256);

        tokio::spawn(async move {
            while let Some(op) = rx_submit.recv().await {
                match op {
                    Op::Generate { topic } => {
                        let _ = tx_event.send(Event::TaskStarted).await;
                        info!("generation started");
                        match client.generate(&topic).await {
                            Ok(presentation) => {
                                info!(slides = presentation.slide_count(), "generation finished");
                                let _ = tx_event
                                    .send(Event::TaskComplete { presentation })
                                    .await;
                            }
                            Err(e) => {
                                info!(error = %e, "generation failed");
                                let _ = tx_event
                                    .send(Event::Error {
                                        message: e.to_string(),
                                    })
                                    .await;
                            }
                        }
                    }
                    Op::Shutdown => {
                        let _ = tx_event.send(Event::ShutdownComplete).await;
                        break;
                    }
                }
            }
        });

        let inner = Arc::new(Inner {
            tx_submit,
            rx_event: Mutex::new(rx_event),
        });
        Ok(EngineSpawnOk {
            engine: Engine { inner },
        })
    }

    pub async fn submit(&self, op: Op) -> Result<()> {
        self.inner
            .tx_submit
            .send(op)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }

    pub async fn next_event(&self) -> Option<Event> {
        let mut rx = self.inner.rx_event.lock().await;
        rx.recv().await
    }
}
