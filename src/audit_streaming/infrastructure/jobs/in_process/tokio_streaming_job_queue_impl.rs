use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, error, warn};

use crate::audit_streaming::{
    domain::{
        model::{
            commands::stream_audit_event_command::StreamAuditEventCommand,
            enums::{
                audit_streaming_domain_error::AuditStreamingDomainError,
                streaming_outcome::StreamingOutcome,
            },
        },
        services::audit_event_streaming_service::AuditEventStreamingService,
    },
    infrastructure::jobs::streaming_job_dispatcher::StreamingJobDispatcher,
};

#[derive(Clone, Debug)]
pub struct StreamingJobQueueSettings {
    pub workers: usize,
    pub capacity: usize,
    pub max_attempts: u32,
    pub retry_base: Duration,
}

type SharedReceiver = Arc<Mutex<mpsc::Receiver<StreamAuditEventCommand>>>;

/// Bounded in-process job queue drained by a fixed pool of worker tasks.
pub struct TokioStreamingJobQueueImpl {
    sender: mpsc::Sender<StreamAuditEventCommand>,
}

impl TokioStreamingJobQueueImpl {
    /// Spawns the workers on the current runtime.
    pub fn start(
        service: Arc<dyn AuditEventStreamingService>,
        settings: StreamingJobQueueSettings,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(settings.capacity.max(1));
        let receiver: SharedReceiver = Arc::new(Mutex::new(receiver));

        for worker_id in 0..settings.workers.max(1) {
            tokio::spawn(run_worker(
                worker_id,
                receiver.clone(),
                service.clone(),
                settings.clone(),
            ));
        }

        Self { sender }
    }
}

#[async_trait]
impl StreamingJobDispatcher for TokioStreamingJobQueueImpl {
    async fn dispatch(
        &self,
        command: StreamAuditEventCommand,
    ) -> Result<(), AuditStreamingDomainError> {
        self.sender
            .try_send(command)
            .map_err(|e| AuditStreamingDomainError::QueueUnavailable(e.to_string()))
    }
}

async fn run_worker(
    worker_id: usize,
    receiver: SharedReceiver,
    service: Arc<dyn AuditEventStreamingService>,
    settings: StreamingJobQueueSettings,
) {
    loop {
        let next = receiver.lock().await.recv().await;
        let Some(command) = next else {
            debug!(worker_id, "streaming queue closed, worker stopping");
            break;
        };
        process_with_retry(service.as_ref(), command, &settings).await;
    }
}

/// Runs one job, retrying infrastructure failures with exponential backoff.
///
/// Returns `None` when every attempt failed and the job was dropped.
pub async fn process_with_retry(
    service: &dyn AuditEventStreamingService,
    command: StreamAuditEventCommand,
    settings: &StreamingJobQueueSettings,
) -> Option<StreamingOutcome> {
    let max_attempts = settings.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match service.handle_stream(command.clone()).await {
            Ok(outcome) => {
                debug!(
                    audit_event_type = command.event_type().value(),
                    attempt,
                    ?outcome,
                    "streaming job finished"
                );
                return Some(outcome);
            }
            Err(error) if attempt < max_attempts => {
                let delay = backoff_delay(settings.retry_base, attempt);
                warn!(
                    audit_event_type = command.event_type().value(),
                    attempt,
                    retry_in_ms = delay.as_millis() as u64,
                    error = %error,
                    "streaming job failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => {
                error!(
                    audit_event_type = command.event_type().value(),
                    attempts = attempt,
                    error = %error,
                    "streaming job dropped after exhausting retries"
                );
                return None;
            }
        }
    }
}

fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let exponential = base.saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)));
    let jitter_ceiling = (base.as_millis() / 2) as u64;
    let jitter = rand::thread_rng().gen_range(0..=jitter_ceiling);
    exponential + Duration::from_millis(jitter)
}
