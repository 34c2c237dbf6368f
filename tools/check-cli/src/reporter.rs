use crate::checks::{Check, Phase};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::Write;

/// Print the banner that opens a phase.
pub fn phase_banner<W: Write>(out: &mut W, phase: Phase) {
    writeln!(out, "{}", phase.title().if_supports_color(Stdout, |s| s.bold())).ok();
    out.flush().ok();
}

/// Print the label shown right before a check's own output.
/// Flushed so it lands ahead of anything the child writes.
pub fn check_banner<W: Write>(out: &mut W, check: &Check) {
    writeln!(
        out,
        "{}",
        format!("--- {} ---", check.label).if_supports_color(Stdout, |s| s.cyan())
    )
    .ok();
    out.flush().ok();
}

/// Print the plan for `--list`.
pub fn print_plan<W: Write>(out: &mut W, plan: &[Check]) {
    let mut phase = None;
    for check in plan {
        if phase != Some(check.phase) {
            phase_banner(out, check.phase);
            phase = Some(check.phase);
        }
        writeln!(
            out,
            "  {:<8} {}",
            check.label,
            check.to_string().if_supports_color(Stdout, |s| s.dimmed())
        )
        .ok();
    }
    out.flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::check_plan;
    use crate::config::CheckOptions;

    fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn phase_banner_shows_title() {
        let out = render(|buf| phase_banner(buf, Phase::Formatting));
        assert!(out.contains("Formatting..."));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn check_banner_shows_label() {
        let plan = check_plan(&CheckOptions::default());
        let out = render(|buf| check_banner(buf, &plan[3]));
        assert!(out.contains("--- pylint ---"));
    }

    #[test]
    fn plan_lists_each_phase_once() {
        let plan = check_plan(&CheckOptions::default());
        let out = render(|buf| print_plan(buf, &plan));
        assert_eq!(out.matches("Formatting...").count(), 1);
        assert_eq!(out.matches("Checking...").count(), 1);
        assert!(out.contains("ruff format moneyball"));
        assert!(out.contains("pyright moneyball"));
    }
}
