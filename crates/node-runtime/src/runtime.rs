//! # Node Runtime
//!
//! Owns the validation context and the periodic cache report task.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::container::{NodeConfig, ValidationContext};

/// The running node.
pub struct NodeRuntime {
    context: ValidationContext,
    report_interval: Duration,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    report_task: Option<JoinHandle<()>>,
}

impl NodeRuntime {
    /// Create the runtime and size the verification caches.
    pub fn new(config: &NodeConfig) -> Result<Self> {
        let context =
            ValidationContext::new(config).context("Failed to initialize verification caches")?;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            context,
            report_interval: config.report_interval,
            shutdown_tx,
            shutdown_rx,
            report_task: None,
        })
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Start background tasks. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        if self.report_task.is_some() {
            return;
        }

        let context = self.context.clone();
        let interval = self.report_interval;
        let mut shutdown = self.shutdown_rx.clone();

        self.report_task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        context.log_report();
                    }
                    _ = shutdown.changed() => {
                        info!("[cache-report] Shutdown signal received");
                        break;
                    }
                }
            }
        }));

        info!("Verification caches ready");
    }

    /// Signal background tasks and wait until they have exited.
    pub async fn stop(&mut self) {
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        if let Some(task) = self.report_task.take() {
            if let Err(e) = task.await {
                error!("[cache-report] Task failed: {}", e);
            }
        }
    }

    /// Stop background tasks, log the final report and release the caches.
    pub async fn shutdown(mut self) {
        info!("Initiating graceful shutdown...");
        self.stop().await;

        let report = self.context.caches().report();
        match serde_json::to_string(&report) {
            Ok(json) => info!("Final cache report: {}", json),
            Err(e) => error!("Failed to serialize cache report: {}", e),
        }

        self.context.teardown();
        info!("Shutdown complete");
    }
}
