//! Ollama backend calling the local `ollama` binary
//!
//! Runs `<executable> run <model>` with the prompt on stdin and reads the
//! answer from stdout.

use super::ModelRunner;
use crate::config::ModelConfig;
use crate::error::{SummarizeError, SummarizeResult};
use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// How often a child with a deadline is polled
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Default)]
pub struct OllamaCli;

impl OllamaCli {
    pub fn new() -> Self {
        Self
    }
}

/// Captured result of one process run
#[derive(Debug)]
struct ProcessOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl ModelRunner for OllamaCli {
    fn generate(&self, config: &ModelConfig, prompt: &str) -> SummarizeResult<String> {
        let output = run_process(config, prompt)?;

        if !output.status.success() {
            warn!("❌ Ollama exited with {}", output.status);
            return Err(SummarizeError::Process {
                status: output.status.code(),
                stderr: output.stderr.trim().to_string(),
            });
        }

        let stdout = output.stdout.trim();
        if !stdout.is_empty() {
            return Ok(stdout.to_string());
        }

        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            debug!("Ollama wrote nothing to stdout, using stderr");
            return Ok(stderr.to_string());
        }

        Err(SummarizeError::EmptyOutput)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

fn run_process(config: &ModelConfig, prompt: &str) -> SummarizeResult<ProcessOutput> {
    debug!(
        "Spawning {} run {}",
        config.ollama_path.display(),
        config.model
    );

    let mut child = Command::new(&config.ollama_path)
        .arg("run")
        .arg(&config.model)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            error!("❌ Failed to spawn {}: {}", config.ollama_path.display(), e);
            if e.kind() == ErrorKind::NotFound {
                SummarizeError::ExecutableNotFound(config.ollama_path.clone())
            } else {
                SummarizeError::Io(e)
            }
        })?;

    // Feed stdin from its own thread so a chatty child can't deadlock us
    let stdin = child.stdin.take();
    let prompt_owned = prompt.to_string();
    let writer = thread::spawn(move || -> std::io::Result<()> {
        if let Some(mut stdin) = stdin {
            stdin.write_all(prompt_owned.as_bytes())?;
            stdin.flush()?;
        }
        Ok(())
    });
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match config.timeout {
        Some(limit) => wait_with_deadline(&mut child, limit)?,
        None => child.wait()?,
    };

    match writer.join() {
        Ok(Ok(())) => {}
        // The child may exit without reading its whole input
        Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Ollama closed stdin early");
        }
        Ok(Err(e)) => return Err(e.into()),
        Err(_) => return Err(std::io::Error::other("stdin writer panicked").into()),
    }

    Ok(ProcessOutput {
        status,
        stdout: collect(stdout)?,
        stderr: collect(stderr)?,
    })
}

fn wait_with_deadline(child: &mut Child, limit: Duration) -> SummarizeResult<ExitStatus> {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if started.elapsed() >= limit {
            warn!("⏱️ Ollama still running after {:?}, killing it", limit);
            let _ = child.kill();
            let _ = child.wait();
            return Err(SummarizeError::Timeout(limit));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<std::io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn collect(handle: JoinHandle<std::io::Result<Vec<u8>>>) -> SummarizeResult<String> {
    let bytes = handle
        .join()
        .map_err(|_| std::io::Error::other("output reader panicked"))??;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
