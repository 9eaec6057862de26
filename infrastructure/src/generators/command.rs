//! External command generator
//!
//! Runs a program once per prompt: the prompt goes to the child's stdin and
//! whatever it prints on stdout is the response. Any CLI that reads a
//! prompt from stdin works (`llm`, `ollama run <model>`, a shell script).

use debate_domain::{GenerationError, Generator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Maximum stderr kept in an error message
const MAX_STDERR_LEN: usize = 2048;

/// Generator backed by an external program
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    resolved: PathBuf,
    args: Vec<String>,
}

impl CommandGenerator {
    /// Resolve `program` on `PATH` (or as a path) and build the generator
    ///
    /// Fails with [`GenerationError::Unavailable`] when the program cannot be found.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Result<Self, GenerationError> {
        let program = program.into();
        let resolved = which::which(&program)
            .map_err(|e| GenerationError::Unavailable(format!("{}: {}", program, e)))?;
        debug!("Resolved generator command {} -> {}", program, resolved.display());

        Ok(Self {
            program,
            resolved,
            args,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Generator for CommandGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut child = Command::new(&self.resolved)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Feed stdin from a separate thread so a chatty child cannot fill
        // its stdout pipe while we are still writing the prompt.
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_string();
            std::thread::spawn(move || stdin.write_all(prompt.as_bytes()))
        });

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(result) => {
                    // A child that exits without reading all input closes the pipe early
                    if let Err(e) = result
                        && e.kind() != std::io::ErrorKind::BrokenPipe
                    {
                        return Err(e.into());
                    }
                }
                Err(_) => {
                    return Err(GenerationError::RequestFailed(format!(
                        "{}: stdin writer panicked",
                        self.program
                    )));
                }
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let mut stderr = stderr.trim().to_string();
            if stderr.len() > MAX_STDERR_LEN {
                let mut cut = MAX_STDERR_LEN;
                while !stderr.is_char_boundary(cut) {
                    cut -= 1;
                }
                stderr.truncate(cut);
                stderr.push_str("... (truncated)");
            }
            return Err(GenerationError::RequestFailed(format!(
                "{} exited with {}: {}",
                self.program, output.status, stderr
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            GenerationError::InvalidOutput(format!("{} wrote non UTF-8 output: {}", self.program, e))
        })?;

        // Drop the trailing newline most CLIs print
        Ok(stdout.trim_end().to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandGenerator {
        CommandGenerator::new("sh", vec!["-c".to_string(), script.to_string()]).unwrap()
    }

    #[test]
    fn test_prompt_is_passed_on_stdin() {
        let generator = CommandGenerator::new("cat", vec![]).unwrap();
        let response = generator.generate("Topic: AI\nRound 1").unwrap();
        assert_eq!(response, "Topic: AI\nRound 1");
    }

    #[test]
    fn test_trailing_newline_is_trimmed() {
        let generator = sh("cat >/dev/null; printf 'pro_agent\\nStronger case\\n'");
        let response = generator.generate("who won?").unwrap();
        assert_eq!(response, "pro_agent\nStronger case");
    }

    #[test]
    fn test_non_zero_exit_is_request_failure() {
        let generator = sh("echo 'model not loaded' >&2; exit 3");
        let err = generator.generate("prompt").unwrap_err();
        match err {
            GenerationError::RequestFailed(msg) => {
                assert!(msg.contains("model not loaded"));
                assert!(msg.starts_with("sh exited with"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let err = CommandGenerator::new("debate-council-no-such-program", vec![]).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_child_ignoring_stdin_still_answers() {
        let generator = sh("echo ignored");
        let long_prompt = "x".repeat(1 << 20);
        assert_eq!(generator.generate(&long_prompt).unwrap(), "ignored");
    }

    #[test]
    fn test_accessors() {
        let generator = sh("true");
        assert_eq!(generator.program(), "sh");
        assert_eq!(generator.args()[0], "-c");
    }
}
