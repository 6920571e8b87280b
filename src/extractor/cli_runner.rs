//! AI CLI呼び出し
//!
//! プロバイダのCLIを子プロセスとして起動し、標準出力を応答として受け取る。
//! 応答待ちはタイムアウト付きで、超過時は子プロセスを終了させる。

use crate::error::{Result, UsfindError};
use std::time::Duration;
use tokio::process::Command;

/// CLIを実行して標準出力を返す
pub async fn run_ai_cli(command: &str, args: &[String], timeout: Duration) -> Result<String> {
    // Windowsではcmd /c経由
    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.arg("/c").arg(command);
        c
    };

    #[cfg(not(windows))]
    let mut cmd = Command::new(command);

    cmd.args(args).kill_on_drop(true);

    tracing::debug!(command, "AI CLIを起動");

    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| UsfindError::Timeout(timeout.as_secs()))?
        .map_err(|e| UsfindError::ApiCall(format!("{} 実行エラー: {}", command, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(UsfindError::ApiCall(format!(
            "{} failed (code {:?}): {}",
            command,
            output.status.code(),
            stderr.trim()
        )));
    }

    let response = String::from_utf8_lossy(&output.stdout).to_string();

    let preview: String = response.chars().take(500).collect();
    tracing::debug!(len = response.len(), %preview, "AI CLI応答");

    Ok(response)
}
