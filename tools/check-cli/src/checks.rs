use crate::config::CheckOptions;
use crate::runner::CommandCall;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;

const IGNORE_UNTYPED_IMPORTS_FLAG: &str = "--disable-error-code=import-untyped";

/// Formatting checks rewrite the target in place; checking-phase tools only report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Formatting,
    Checking,
}

impl Phase {
    pub fn title(self) -> &'static str {
        match self {
            Phase::Formatting => "Formatting...",
            Phase::Checking => "Checking...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub label: &'static str,
    pub phase: Phase,
    pub program: &'static str,
    pub args: Vec<OsString>,
}

impl Check {
    fn new(label: &'static str, phase: Phase, program: &'static str, args: &[&str], target: &Path) -> Self {
        let mut owned: Vec<OsString> = args.iter().map(OsString::from).collect();
        owned.push(target.as_os_str().to_os_string());
        Self {
            label,
            phase,
            program,
            args: owned,
        }
    }

    pub fn command(&self) -> CommandCall {
        CommandCall::new(self.program, self.args.clone())
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Build the ordered plan for one run. The target path is always the last argument
/// and is passed through byte for byte.
pub fn check_plan(options: &CheckOptions) -> Vec<Check> {
    let target = options.target.as_path();

    let mypy_args: &[&str] = if options.ignore_untyped_imports {
        &[IGNORE_UNTYPED_IMPORTS_FLAG]
    } else {
        &[]
    };

    vec![
        Check::new("Ruff", Phase::Formatting, "ruff", &["format"], target),
        Check::new("isort", Phase::Formatting, "isort", &[], target),
        Check::new("Flake8", Phase::Checking, "flake8", &[], target),
        Check::new("pylint", Phase::Checking, "pylint", &[], target),
        Check::new("mypy", Phase::Checking, "mypy", mypy_args, target),
        Check::new("Ruff", Phase::Checking, "ruff", &["check"], target),
        Check::new("pyright", Phase::Checking, "pyright", &[], target),
    ]
}
