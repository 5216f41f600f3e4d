//! Manifest check command
//!
//! Usage: modedit sources [--manifest PATH]
//!
//! Exit status: 0 when at least one source is valid, 2 when none is, 1 when
//! the manifest itself cannot be used.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use modedit_api::config::DEFAULT_MANIFEST_PATH;
use modedit_core::{FileSourceDescriptor, SourceCatalog};

/// Exit status when the manifest loads but lists no usable source
const NO_VALID_SOURCE: u8 = 2;

#[derive(Debug, Args)]
pub struct SourcesArgs {
    /// TOML manifest listing the file sources
    #[arg(long, env = "MODEDIT_MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,
}

/// Execute sources command
pub fn execute(args: SourcesArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let catalog = SourceCatalog::load(&args.manifest)?;
    print!("{}", render_report(&catalog));

    if catalog.valid_count() == 0 {
        Ok(ExitCode::from(NO_VALID_SOURCE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn render_line(descriptor: &FileSourceDescriptor) -> String {
    match descriptor.error_message() {
        None => format!("[ok]      {} -> {}\n", descriptor.name(), descriptor.path()),
        Some(message) => format!(
            "[invalid] {} -> {}\n          {}\n",
            descriptor.name(),
            descriptor.path(),
            message
        ),
    }
}

fn render_report(catalog: &SourceCatalog) -> String {
    let mut out: String = catalog.descriptors().iter().map(render_line).collect();
    out.push_str(&format!(
        "{} of {} sources valid",
        catalog.valid_count(),
        catalog.len()
    ));
    match catalog.default_source() {
        Some(default) => out.push_str(&format!("; default: {}\n", default.name())),
        None => out.push_str("; no default\n"),
    }
    out
}
