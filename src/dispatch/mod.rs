//! # Print Dispatcher
//!
//! Submits rendered label documents to the operating system's print queue.
//! The spooler itself is a black box behind the [`Spooler`] trait: the
//! production implementation shells out to CUPS (`lp` / `lpstat`), tests
//! substitute a mock.
//!
//! Submission is fire-and-forget: [`submit_all`] spawns one task per
//! document and hands back the join handles. One container's failure never
//! blocks or rolls back a sibling's submission, and there is no retry here;
//! callers that want completion guarantees await the handles, everyone else
//! relies on the logs.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::EtiquetaError;

/// Identifier of a queued print job, as reported by the spooler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobId(pub String);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// OS print-queue boundary.
#[async_trait]
pub trait Spooler: Send + Sync {
    /// Enumerate the queue names the OS knows about. Best effort: an
    /// unreachable spooler enumerates nothing rather than failing.
    async fn printer_names(&self) -> Vec<String>;

    /// Submit raw printer bytes to a named queue.
    async fn submit(&self, printer: &str, data: &[u8]) -> Result<JobId, EtiquetaError>;
}

/// CUPS-backed spooler.
///
/// Uses `lpstat -e` for enumeration and `lp -d <queue> -o raw` for
/// submission, with the document piped through stdin. `-o raw` keeps CUPS
/// filters from re-rendering the EPL/ZPL text.
pub struct CupsSpooler;

#[async_trait]
impl Spooler for CupsSpooler {
    async fn printer_names(&self) -> Vec<String> {
        match Command::new("lpstat").arg("-e").output().await {
            Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    async fn submit(&self, printer: &str, data: &[u8]) -> Result<JobId, EtiquetaError> {
        let mut child = Command::new("lp")
            .args(["-d", printer, "-o", "raw", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EtiquetaError::Spooler(format!("failed to launch lp: {}", e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EtiquetaError::Spooler("lp stdin unavailable".to_string()))?;
        stdin.write_all(data).await?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| EtiquetaError::Spooler(format!("lp did not finish: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EtiquetaError::Spooler(format!(
                "lp exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_job_id(&stdout).unwrap_or_else(|| JobId(Uuid::new_v4().to_string())))
    }
}

/// Extract the job id from `lp` output, e.g.
/// `request id is GK420d-42 (1 file(s))` → `GK420d-42`.
fn parse_job_id(stdout: &str) -> Option<JobId> {
    let rest = stdout.split("request id is ").nth(1)?;
    let id = rest.split_whitespace().next()?;
    Some(JobId(id.to_string()))
}

/// Fan out one independent submission per document.
///
/// Returns the spawned handles in document order. Outcomes are logged
/// either way, so dropping the handles loses nothing but the ability to
/// await completion.
pub fn submit_all(
    spooler: Arc<dyn Spooler>,
    printer: &str,
    documents: Vec<Vec<u8>>,
) -> Vec<JoinHandle<Result<JobId, EtiquetaError>>> {
    documents
        .into_iter()
        .enumerate()
        .map(|(index, data)| {
            let spooler = spooler.clone();
            let printer = printer.to_string();
            tokio::spawn(async move {
                match spooler.submit(&printer, &data).await {
                    Ok(job) => {
                        tracing::info!(printer = %printer, job = %job, label = index, "label queued");
                        Ok(job)
                    }
                    Err(e) => {
                        tracing::warn!(printer = %printer, label = index, error = %e, "label submission failed");
                        Err(e)
                    }
                }
            })
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
