//! HTTP implementation of the scheduler client port.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::errors::SchedulerError;
use crate::domain::models::{
    DrainPolicy, InstanceStatus, JobKey, MaintenanceMode, SchedulerConfig,
};
use crate::domain::ports::SchedulerClient;

/// Scheduler admin API client over HTTP.
///
/// Connection pooling comes from the shared `reqwest::Client`. Requests are
/// never retried here; retry is expressed only as the monitor's repeated
/// state polling.
pub struct HttpSchedulerClient {
    http: ReqwestClient,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
struct HostsRequest<'a> {
    hosts: &'a [String],
}

#[derive(Serialize)]
struct SlaDrainRequest<'a> {
    hosts: &'a [String],
    #[serde(flatten)]
    policy: &'a DrainPolicy,
}

#[derive(Deserialize)]
struct MaintenanceStatusResponse {
    statuses: HashMap<String, String>,
}

#[derive(Serialize)]
struct InstancesRequest<'a> {
    instances: &'a [u32],
}

#[derive(Deserialize)]
struct ActiveInstancesResponse {
    instances: Vec<u32>,
}

#[derive(Deserialize)]
struct InstanceStatusResponse {
    statuses: HashMap<u32, InstanceStatus>,
}

impl HttpSchedulerClient {
    pub fn new(config: &SchedulerConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.addr.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.username {
            Some(user) => request.basic_auth(user, self.password.as_deref()),
            None => request,
        }
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, SchedulerError> {
        let url = self.url(path);
        debug!("POST {url}");
        let response = self
            .authorize(self.http.post(&url))
            .json(body)
            .send()
            .await
            .map_err(|e| SchedulerError::Transport(e.to_string()))?;
        check_status(response).await
    }

    async fn get(&self, path: &str) -> Result<Response, SchedulerError> {
        let url = self.url(path);
        debug!("GET {url}");
        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| SchedulerError::Transport(e.to_string()))?;
        check_status(response).await
    }

    fn job_path(job: &JobKey, suffix: &str) -> String {
        format!(
            "/api/v1/jobs/{}/{}/{}{}",
            job.environment, job.role, job.name, suffix
        )
    }
}

async fn check_status(response: Response) -> Result<Response, SchedulerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string());
    Err(SchedulerError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl SchedulerClient for HttpSchedulerClient {
    async fn drain_hosts(&self, hosts: &[String]) -> Result<(), SchedulerError> {
        self.post_json("/api/v1/maintenance/drain", &HostsRequest { hosts })
            .await?;
        Ok(())
    }

    async fn sla_drain_hosts(
        &self,
        hosts: &[String],
        policy: &DrainPolicy,
    ) -> Result<(), SchedulerError> {
        self.post_json(
            "/api/v1/maintenance/sla-drain",
            &SlaDrainRequest { hosts, policy },
        )
        .await?;
        Ok(())
    }

    async fn start_maintenance(&self, hosts: &[String]) -> Result<(), SchedulerError> {
        self.post_json("/api/v1/maintenance/start", &HostsRequest { hosts })
            .await?;
        Ok(())
    }

    async fn end_maintenance(&self, hosts: &[String]) -> Result<(), SchedulerError> {
        self.post_json("/api/v1/maintenance/end", &HostsRequest { hosts })
            .await?;
        Ok(())
    }

    async fn maintenance_status(
        &self,
        hosts: &[String],
    ) -> Result<HashMap<String, MaintenanceMode>, SchedulerError> {
        let response = self
            .post_json("/api/v1/maintenance/status", &HostsRequest { hosts })
            .await?;
        let body: MaintenanceStatusResponse = response
            .json()
            .await
            .map_err(|e| SchedulerError::Decode(e.to_string()))?;

        let mut statuses = HashMap::with_capacity(body.statuses.len());
        for (host, mode) in body.statuses {
            let mode = mode
                .parse::<MaintenanceMode>()
                .map_err(|e| SchedulerError::Decode(e.to_string()))?;
            statuses.insert(host, mode);
        }
        Ok(statuses)
    }

    async fn kill_instances(
        &self,
        job: &JobKey,
        instances: &[u32],
    ) -> Result<(), SchedulerError> {
        self.post_json(
            &Self::job_path(job, "/instances/kill"),
            &InstancesRequest { instances },
        )
        .await?;
        Ok(())
    }

    async fn kill_job(&self, job: &JobKey) -> Result<(), SchedulerError> {
        self.post_json(&Self::job_path(job, "/kill"), &serde_json::json!({}))
            .await?;
        Ok(())
    }

    async fn restart_job(&self, job: &JobKey) -> Result<(), SchedulerError> {
        self.post_json(&Self::job_path(job, "/restart"), &serde_json::json!({}))
            .await?;
        Ok(())
    }

    async fn active_instances(&self, job: &JobKey) -> Result<Vec<u32>, SchedulerError> {
        let response = self.get(&Self::job_path(job, "/instances")).await?;
        let body: ActiveInstancesResponse = response
            .json()
            .await
            .map_err(|e| SchedulerError::Decode(e.to_string()))?;
        Ok(body.instances)
    }

    async fn instance_status(
        &self,
        job: &JobKey,
        instances: &[u32],
    ) -> Result<HashMap<u32, InstanceStatus>, SchedulerError> {
        let response = self
            .post_json(
                &Self::job_path(job, "/instances/status"),
                &InstancesRequest { instances },
            )
            .await?;
        let body: InstanceStatusResponse = response
            .json()
            .await
            .map_err(|e| SchedulerError::Decode(e.to_string()))?;
        Ok(body.statuses)
    }
}
