use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

pub(crate) fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut child = clipboard_cmd()
        .stdin(Stdio::piped())
        .spawn()
        .context("failed to start the clipboard helper")?;
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(data)
        .context("failed to write to the clipboard helper")?;
    let status = child
        .wait()
        .context("failed to wait for the clipboard helper")?;
    if !status.success() {
        anyhow::bail!("the clipboard helper exited unsuccessfully ({status})");
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
