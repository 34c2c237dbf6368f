use crate::checks::{Check, Phase};
use crate::error::CheckError;
use crate::reporter;
use crate::runner::{CommandResult, CommandRunner};
use crate::timing::Stopwatch;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running(usize),
    Succeeded,
    Failed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub state: RunState,
    pub checks_run: usize,
}

/// One ordered pass over a plan. Built fresh per invocation.
#[derive(Debug)]
pub struct Run {
    checks: Vec<Check>,
    state: RunState,
}

impl Run {
    pub fn new(checks: Vec<Check>) -> Self {
        Self {
            checks,
            state: RunState::NotStarted,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = ?self.state, to = ?next, "run state");
        self.state = next;
    }

    /// Execute every check in order, stopping at the first one that does not succeed.
    pub fn execute<R, W>(mut self, runner: &R, out: &mut W) -> Result<RunReport, CheckError>
    where
        R: CommandRunner,
        W: Write,
    {
        let mut phase: Option<Phase> = None;

        for index in 0..self.checks.len() {
            self.transition(RunState::Running(index));
            let check = &self.checks[index];

            if phase != Some(check.phase) {
                reporter::phase_banner(out, check.phase);
                phase = Some(check.phase);
            }
            reporter::check_banner(out, check);

            let stopwatch = Stopwatch::start();
            let result = runner.run(check.command());
            tracing::debug!(
                check = check.label,
                ?result,
                elapsed_ms = stopwatch.elapsed_millis(),
                "check finished"
            );

            if result.success() {
                continue;
            }

            let label = check.label.to_string();
            self.transition(RunState::Failed(index));
            return Err(match result {
                CommandResult::Interrupted => CheckError::Interrupted { index, label },
                CommandResult::Exited(status) => CheckError::Failed {
                    index,
                    label,
                    status,
                },
            });
        }

        self.transition(RunState::Succeeded);
        Ok(RunReport {
            state: self.state,
            checks_run: self.checks.len(),
        })
    }
}
