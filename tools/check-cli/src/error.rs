use crate::runner::INTERRUPTED_EXIT_CODE;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("{label} failed with exit status {status}")]
    Failed {
        index: usize,
        label: String,
        status: i32,
    },
    #[error("interrupted while running {label}")]
    Interrupted { index: usize, label: String },
}

impl CheckError {
    /// Process exit code for the run that produced this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Failed { status, .. } => *status,
            CheckError::Interrupted { .. } => INTERRUPTED_EXIT_CODE,
        }
    }

    /// Position in the plan of the check that stopped the run.
    pub fn index(&self) -> usize {
        match self {
            CheckError::Failed { index, .. } | CheckError::Interrupted { index, .. } => *index,
        }
    }

    /// Checks that ran to their own exit. An interrupted check is not counted.
    pub fn checks_run(&self) -> usize {
        match self {
            CheckError::Failed { index, .. } => index + 1,
            CheckError::Interrupted { index, .. } => *index,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CheckError::Failed { label, .. } | CheckError::Interrupted { label, .. } => label,
        }
    }
}
