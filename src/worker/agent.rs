use crate::config::AgentConfig;
use crate::scheduler::protocol::{ENDPOINT_TASK, TaskResponse, TaskResultRequest};
use crate::scheduler::types::{Task, TaskId};

use anyhow::Result;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const REPORT_ATTEMPTS: usize = 3;

/// A pool of polling loops sharing one HTTP client.
pub struct WorkerAgent {
    http_client: reqwest::Client,
    task_url: String,
    worker_count: usize,
    delay: Duration,
}

impl WorkerAgent {
    pub fn new(config: &AgentConfig) -> Arc<Self> {
        Arc::new(Self {
            http_client: reqwest::Client::new(),
            task_url: format!("{}{}", config.orchestrator_url, ENDPOINT_TASK),
            worker_count: config.computing_power,
            delay: config.delay,
        })
    }

    /// Spawns the polling loops and returns their handles.
    /// Each loop runs until its handle is aborted.
    pub fn start(self: Arc<Self>) -> Vec<tokio::task::JoinHandle<()>> {
        tracing::info!(
            "Starting {} workers polling {} every {:?}",
            self.worker_count,
            self.task_url,
            self.delay
        );

        (0..self.worker_count)
            .map(|worker_id| {
                let agent = self.clone();
                tokio::spawn(async move {
                    agent.worker_loop(worker_id).await;
                })
            })
            .collect()
    }

    async fn worker_loop(&self, worker_id: usize) {
        tracing::info!("Worker {} started", worker_id);

        loop {
            let next_run = Instant::now() + self.delay;

            match self.run_once().await {
                Ok(true) => tracing::debug!("Worker {} finished a task", worker_id),
                Ok(false) => tracing::trace!("Worker {} found no task", worker_id),
                Err(e) => tracing::warn!("Worker {} iteration failed: {}", worker_id, e),
            }

            tokio::time::sleep_until(next_run).await;
        }
    }

    /// One poll: fetch, perform, report. Returns `false` when no task was available.
    pub async fn run_once(&self) -> Result<bool> {
        let Some(task) = self.fetch_task().await? else {
            return Ok(false);
        };

        tracing::info!(
            "Performing task {}: {} {} {} ({} ms)",
            task.id,
            task.operand1,
            task.operator,
            task.operand2,
            task.estimated_duration
        );

        let result = perform_task(&task).await;
        self.report_result(&task.id, result).await?;

        Ok(true)
    }

    /// Claims one task. `Ok(None)` when the orchestrator has nothing unclaimed.
    pub async fn fetch_task(&self) -> Result<Option<Task>> {
        let response = self
            .http_client
            .get(&self.task_url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body: TaskResponse = response.json().await?;
                Ok(Some(body.task))
            }
            status => Err(anyhow::anyhow!("Task fetch failed: {}", status)),
        }
    }

    /// Sends the result of `task_id`. An unknown or already resolved id is an error.
    pub async fn report_result(&self, task_id: &TaskId, result: f64) -> Result<()> {
        let payload = TaskResultRequest {
            id: task_id.clone(),
            result,
        };

        let response = self
            .post_with_retry(&payload, REQUEST_TIMEOUT, REPORT_ATTEMPTS)
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Result for task {} rejected: {}",
                task_id,
                response.status()
            ));
        }

        tracing::debug!("Reported {} for task {}", result, task_id);
        Ok(())
    }

    /// Retries transport failures with exponential backoff and jitter.
    /// Any HTTP response, successful or not, is returned as is.
    async fn post_with_retry<T: serde::Serialize>(
        &self,
        payload: &T,
        timeout: Duration,
        attempts: usize,
    ) -> Result<reqwest::Response> {
        let mut delay_ms = 150u64;

        for attempt in 0..attempts {
            let response = self
                .http_client
                .post(&self.task_url)
                .json(payload)
                .timeout(timeout)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == attempts {
                        return Err(anyhow::anyhow!(e));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(anyhow::anyhow!("Retry attempts exhausted"))
    }
}

/// Computes the task and returns no earlier than its `estimated_duration`.
pub async fn perform_task(task: &Task) -> f64 {
    let ready_at = Instant::now() + Duration::from_millis(task.estimated_duration);
    let result = task.compute();
    tokio::time::sleep_until(ready_at).await;
    result
}
