use console::style;

use crate::domain::SemanticVersion;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print versions to stdout, one per line, for the calling pipeline to consume.
pub fn display_versions(versions: &[SemanticVersion]) {
    for version in versions {
        println!("{}", version);
    }
}
