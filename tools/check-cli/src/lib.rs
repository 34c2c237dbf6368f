pub mod checks;
pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;
pub mod run;
pub mod runner;
pub mod timing;

pub use checks::{check_plan, Check, Phase};
pub use config::{CheckOptions, Cli};
pub use error::CheckError;
pub use run::{Run, RunReport, RunState};
pub use runner::{CommandCall, CommandResult, CommandRunner, RealCommandRunner};
