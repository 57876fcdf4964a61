use crate::error::{Result, ShortlyError};
use std::io::Write;
use std::process::{Command, Stdio};

/// An external program that reads clipboard contents from stdin.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardProgram {
    pub name: &'static str,
    pub args: &'static [&'static str],
}

const fn program(name: &'static str, args: &'static [&'static str]) -> ClipboardProgram {
    ClipboardProgram { name, args }
}

/// Clipboard programs to try, in order, for the current OS.
/// - macOS: pbcopy
/// - Linux: wl-copy, then xclip, then xsel
/// - Windows: clip.exe
pub fn clipboard_programs() -> &'static [ClipboardProgram] {
    #[cfg(target_os = "macos")]
    {
        const PROGRAMS: &[ClipboardProgram] = &[program("pbcopy", &[])];
        PROGRAMS
    }

    #[cfg(target_os = "linux")]
    {
        const PROGRAMS: &[ClipboardProgram] = &[
            program("wl-copy", &[]),
            program("xclip", &["-selection", "clipboard"]),
            program("xsel", &["--clipboard", "--input"]),
        ];
        PROGRAMS
    }

    #[cfg(target_os = "windows")]
    {
        const PROGRAMS: &[ClipboardProgram] = &[program("clip", &[])];
        PROGRAMS
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        &[]
    }
}

/// Copies text to the system clipboard using the first program that can be spawned.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let programs = clipboard_programs();
    if programs.is_empty() {
        return Err(ShortlyError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_spawn_error = None;
    for candidate in programs {
        match Command::new(candidate.name)
            .args(candidate.args)
            .stdin(Stdio::piped())
            .spawn()
        {
            Ok(child) => return pipe_into(child, candidate.name, text),
            Err(e) => last_spawn_error = Some(format!("{}: {}", candidate.name, e)),
        }
    }

    Err(ShortlyError::Api(format!(
        "No clipboard program available ({})",
        last_spawn_error.unwrap_or_default()
    )))
}

fn pipe_into(mut child: std::process::Child, program: &str, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ShortlyError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| ShortlyError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ShortlyError::Api(format!("{} exited with error", program)))
    }
}
