use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Print `output` on success; report the error chain on failure.
    pub fn from_output(output: anyhow::Result<String>) -> Self {
        match output {
            Ok(output) => Self::stdout(format_args!("{output}")),
            Err(e) => Self::stderr(format_args!("{} {e:#}", crate::output_utils::RED_X)),
        }
    }
}
