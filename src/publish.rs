//! Playlist publishing
//!
//! Optionally commits and pushes the generated playlist to a git remote.
//! Runs only after a non-empty playlist has been written; any failure is
//! logged and never invalidates the generated file.

use std::path::Path;
use tokio::process::Command;

use crate::config::PublishConfig;

/// Stage, commit and push the playlist file. Stops at the first failing
/// git step with a warning.
pub async fn publish(path: &Path, cfg: &PublishConfig) {
    tracing::info!("Publishing playlist to {} {}", cfg.remote, cfg.branch);

    let file = path.to_string_lossy();
    let steps: [Vec<&str>; 3] = [
        vec!["add", file.as_ref()],
        vec!["commit", "-m", cfg.commit_message.as_str()],
        vec!["push", cfg.remote.as_str(), cfg.branch.as_str()],
    ];

    for args in &steps {
        match Command::new("git").args(args).output().await {
            Ok(out) if out.status.success() => {}
            Ok(out) => {
                tracing::warn!(
                    "git {} failed: {}",
                    args[0],
                    String::from_utf8_lossy(&out.stderr).trim()
                );
                return;
            }
            Err(e) => {
                tracing::warn!("git {} could not be run: {}", args[0], e);
                return;
            }
        }
    }

    tracing::info!("Playlist published");
}
