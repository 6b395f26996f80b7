use codexskills_core::InstallReport;
use console::{Term, style};

const BANNER: &str = r"
                 _           _   _ _ _
   __ ___  _  __| |_____ __ __| |_(_) | |___
  / _/ _ \| |/ _` / -_) \ /(_-< / / | | (_-<
  \__\___/|_|\__,_\___/_\_\/__/_\_\_|_|_/__/
";

pub fn banner_lines() -> Vec<String> {
    let mut lines: Vec<String> = BANNER
        .lines()
        .skip(1)
        .map(|line| style(line).cyan().bold().to_string())
        .collect();
    lines.push(String::new());
    lines
}

/// Only when stdout is a terminal; piped output stays clean.
pub fn print_banner() {
    if !Term::stdout().is_term() {
        return;
    }
    for line in banner_lines() {
        println!("{line}");
    }
}

pub fn print_report(report: &InstallReport) {
    println!("{} Installation complete:", style("✓").green().bold());
    for dest in &report.installed {
        println!("- {}", style(dest.display()).cyan());
    }
}
