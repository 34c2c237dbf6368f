use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Exit code reported when the operator interrupts a run (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCall {
    pub program: String,
    pub args: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Exited(i32),
    Interrupted,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        matches!(self, CommandResult::Exited(0))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Exited(code) => *code,
            CommandResult::Interrupted => INTERRUPTED_EXIT_CODE,
        }
    }
}

pub trait CommandRunner {
    fn run(&self, command: CommandCall) -> CommandResult;
}

/// Spawns each command with inherited stdio and blocks until it exits.
#[derive(Default)]
pub struct RealCommandRunner {
    interrupt: Arc<AtomicBool>,
}

impl RealCommandRunner {
    pub fn new(interrupt: Arc<AtomicBool>) -> Self {
        Self { interrupt }
    }

    fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::SeqCst)
    }
}

impl CommandRunner for RealCommandRunner {
    fn run(&self, command: CommandCall) -> CommandResult {
        if self.interrupted() {
            return CommandResult::Interrupted;
        }

        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(command = %command, "spawning");

        let mut child = match process.spawn() {
            Ok(child) => child,
            Err(error) => {
                eprintln!("{}: {error}", command.program);
                tracing::error!(program = %command.program, %error, "failed to spawn");
                return CommandResult::Exited(spawn_error_code(&error));
            }
        };

        loop {
            if self.interrupted() {
                let _ = child.kill();
                let _ = child.wait();
                return CommandResult::Interrupted;
            }

            match child.try_wait() {
                Ok(Some(status)) => return CommandResult::Exited(status_code(status)),
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(error) => {
                    tracing::error!(program = %command.program, %error, "failed to wait on child");
                    let _ = child.kill();
                    let _ = child.wait();
                    return CommandResult::Exited(1);
                }
            }
        }
    }
}

/// Shell convention: 127 for a missing program, 126 when it cannot be executed.
pub fn spawn_error_code(error: &io::Error) -> i32 {
    match error.kind() {
        io::ErrorKind::NotFound => 127,
        io::ErrorKind::PermissionDenied => 126,
        _ => 1,
    }
}

/// Map a child's exit status to the code a shell would report.
pub fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

impl CommandCall {
    pub fn new(program: impl Into<String>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn to_vec(self) -> Vec<OsString> {
        let mut parts = Vec::with_capacity(1 + self.args.len());
        parts.push(OsString::from(self.program));
        parts.extend(self.args);
        parts
    }
}

/// Lossy rendering for logs; the spawned process always gets the raw arguments.
impl fmt::Display for CommandCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
