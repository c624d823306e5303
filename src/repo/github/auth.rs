use std::process::Command;

use anyhow::{Result, anyhow};

fn env_token() -> Result<Option<String>> {
    match std::env::var("GITHUB_TOKEN") {
        Ok(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(anyhow!("GITHUB_TOKEN is empty after trimming; please re-export"));
            }
            Ok(Some(trimmed.to_string()))
        }
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(anyhow!("failed to read GITHUB_TOKEN: {e}")),
    }
}

fn gh_cli_token() -> Result<String> {
    let mut cmd = Command::new("gh");
    cmd.args(["auth", "token"]);
    if let Ok(host) = std::env::var("GH_HOST") {
        let host = host.trim();
        if !host.is_empty() {
            cmd.args(["--hostname", host]);
        }
    }

    let output = cmd
        .output()
        .map_err(|e| anyhow!("failed to execute `gh auth token`: {e}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "`gh auth token` failed (exit {}): {}",
            output.status,
            stderr.trim()
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let token = stdout.trim();
    if token.is_empty() {
        return Err(anyhow!("`gh auth token` returned empty stdout"));
    }
    Ok(token.to_string())
}

/// Resolve the GitHub token: `GITHUB_TOKEN` first, then `gh auth token`
/// (honoring `GH_HOST` for enterprise hosts).
pub fn resolve_token() -> Result<String> {
    if let Some(token) = env_token()? {
        return Ok(token);
    }
    gh_cli_token()
}
