// src/runner.rs
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{Result, SimError};
use crate::models::ResponseEnvelope;
use crate::options::OptionSet;
use crate::output;

/// File the child's stdout is redirected into.
const STDOUT_FILE: &str = "stdout.out";
/// File the executable writes numeric rows into, named via the reserved
/// results flag.
const RESULTS_FILE: &str = "output.out";

/// Per-run scratch directory. Dropping the guard removes the directory,
/// success or failure, so concurrent runs never see each other's files.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn create(root: &Path, run_id: Uuid) -> Result<Self> {
        let path = root.join(format!("run-{}", run_id));
        std::fs::create_dir_all(&path)?;
        Ok(ScratchDir { path })
    }

    pub fn log_path(&self) -> PathBuf {
        self.path.join(STDOUT_FILE)
    }

    pub fn results_path(&self) -> PathBuf {
        self.path.join(RESULTS_FILE)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            log::warn!("failed to remove scratch dir {}: {}", self.path.display(), e);
        }
    }
}

/// Run one simulation: stage a scratch directory, spawn the executable
/// with the rendered argument vector, wait for it (bounded), then read
/// back the log and the numeric rows.
pub async fn run_simulation(
    config: &AppConfig,
    mut options: OptionSet,
) -> Result<ResponseEnvelope> {
    let run_id = Uuid::new_v4();
    let scratch = ScratchDir::create(&config.scratch_root, run_id)?;
    options.set_results_path(&scratch.results_path());

    let args = options.to_args();
    log::info!(
        "run {} started at {}: {} {}",
        run_id,
        chrono::Utc::now().to_rfc3339(),
        config.executable.display(),
        args.join(" ")
    );

    let started = Instant::now();
    let log_file = std::fs::File::create(scratch.log_path())?;
    let mut child = Command::new(&config.executable)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log_file))
        .spawn()
        .map_err(|source| SimError::Spawn {
            path: config.executable.display().to_string(),
            source,
        })?;

    let timeout = Duration::from_secs(config.timeout_secs);
    let status = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(status) => status?,
        Err(_) => {
            let _ = child.kill().await;
            return Err(SimError::Timeout(config.timeout_secs));
        }
    };

    // The executable may write partial output and exit non-zero; the
    // response is built from whatever it left behind.
    if !status.success() {
        log::warn!("run {} exited with {}", run_id, status);
    }

    let verbose = output::read_log(&scratch.log_path())?;
    let rows = output::read_rows(&scratch.results_path())?;

    log::info!(
        "run {} completed in {}ms with {} output rows",
        run_id,
        started.elapsed().as_millis(),
        rows.len()
    );

    Ok(ResponseEnvelope {
        verbose,
        output: rows,
    })
}
