// src/system/executor.rs

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command as StdCommand, Output};
use thiserror::Error;

/// Failures running an external command.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The command line has unbalanced quotes.
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    /// The command line is empty.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The program could not be spawned.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The program ran and reported failure.
    #[error("Command '{command}' exited with a non-zero status: {stderr}")]
    NonZeroExitStatus { command: String, stderr: String },
}

/// Splits a command line into program and arguments using shell quoting rules.
pub fn split_command_line(command_line: &str) -> Result<Vec<String>, ExecutionError> {
    let parts = shlex::split(command_line.trim())
        .ok_or_else(|| ExecutionError::CommandParse(command_line.to_string()))?;
    if parts.is_empty() {
        return Err(ExecutionError::EmptyCommand);
    }
    Ok(parts)
}

/// Runs a program with its arguments and returns its standard output.
///
/// No shell is involved: every element of `argv` reaches the program as one
/// argument. A non-zero exit status is an error carrying the captured stderr.
pub fn execute_captured(argv: &[String], cwd: Option<&Path>) -> Result<String, ExecutionError> {
    let (program, args) = argv.split_first().ok_or(ExecutionError::EmptyCommand)?;
    let display = shlex::try_join(argv.iter().map(String::as_str))
        .unwrap_or_else(|_| argv.join(" "));

    let build = |program: &str, args: &[String]| {
        let mut command = StdCommand::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dunce::simplified(dir));
        }
        command
    };

    log::debug!("Executing: {}", display);
    // Windows built-ins such as `echo` only exist inside cmd.exe.
    let output: Output = match build(program.as_str(), args).output() {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound && cfg!(target_os = "windows") => {
            log::debug!("Command '{}' not found. Retrying with cmd /C.", program);
            let mut cmd_args = vec!["/C".to_string()];
            cmd_args.extend(argv.iter().cloned());
            build("cmd", cmd_args.as_slice())
                .output()
                .map_err(|e| ExecutionError::CommandFailed(display.clone(), e))?
        }
        Err(e) => return Err(ExecutionError::CommandFailed(display, e)),
    };

    if !output.status.success() {
        return Err(ExecutionError::NonZeroExitStatus {
            command: display,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command_line_honours_quotes() {
        let parts = split_command_line(r#"mysql --execute="SHOW DATABASES" shop"#).unwrap();
        assert_eq!(parts, vec!["mysql", "--execute=SHOW DATABASES", "shop"]);
    }

    #[test]
    fn test_split_command_line_errors() {
        assert!(matches!(
            split_command_line("echo 'unterminated"),
            Err(ExecutionError::CommandParse(_))
        ));
        assert!(matches!(
            split_command_line("   "),
            Err(ExecutionError::EmptyCommand)
        ));
    }

    #[test]
    fn test_missing_program_is_reported() {
        let argv = vec!["stackctl-no-such-program".to_string()];
        assert!(matches!(
            execute_captured(&argv, None),
            Err(ExecutionError::CommandFailed(..))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let argv = vec!["echo".to_string(), "hello world".to_string()];
        assert_eq!(execute_captured(&argv, None).unwrap(), "hello world");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_an_error() {
        let argv = vec!["false".to_string()];
        assert!(matches!(
            execute_captured(&argv, None),
            Err(ExecutionError::NonZeroExitStatus { .. })
        ));
    }
}
