//! Schema comparison command

use clap::Args;
use schemacmp_core::diff::{compare_files, render_banner, render_error, render_report, Verdict};
use schemacmp_core::filter::FilterSet;
use schemacmp_core::logging_facility::{init, Profile};
use schemacmp_core::{log_op_end, log_op_start, DEFAULT_COMPLETE_SCHEMA, DEFAULT_LOCAL_SCHEMA};
use std::path::PathBuf;
use std::time::Instant;

pub const EXIT_IDENTICAL: i32 = 0;
pub const EXIT_DIFFERENT: i32 = 1;
pub const EXIT_UNREADABLE_INPUT: i32 = 2;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Directory holding both schema files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Local schema dump, relative to --dir
    #[arg(long, default_value = DEFAULT_LOCAL_SCHEMA)]
    pub local: PathBuf,

    /// Complete setup script, relative to --dir
    #[arg(long, default_value = DEFAULT_COMPLETE_SCHEMA)]
    pub complete: PathBuf,

    /// TOML file overriding the default filter rules
    #[arg(long)]
    pub filters: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

/// Result of a comparison that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOutcome {
    pub verdict: Verdict,
}

impl CompareOutcome {
    pub fn exit_code(&self) -> i32 {
        match self.verdict {
            Verdict::Identical => EXIT_IDENTICAL,
            Verdict::Different => EXIT_DIFFERENT,
        }
    }
}

/// Run one comparison and print the report.
///
/// Failures are printed as the `❌ Error:` line on stdout before being
/// returned, so the caller only has to pick the exit code.
///
/// # Errors
///
/// - `InvalidConfig` — the `--filters` file is unreadable or malformed
/// - `MissingFile` / `Io` — either schema file cannot be loaded
pub fn execute(args: CompareArgs) -> Result<CompareOutcome, Box<dyn std::error::Error>> {
    init(if args.log_json {
        Profile::Production
    } else {
        Profile::Development
    });
    let start = Instant::now();
    log_op_start!("compare", dir = %args.dir.display());

    let filters = match &args.filters {
        Some(path) => FilterSet::from_toml_file(path).map_err(|e| {
            print!("{}", render_error(&e));
            e
        })?,
        None => FilterSet::default(),
    };

    let local = args.dir.join(&args.local);
    let complete = args.dir.join(&args.complete);

    print!("{}", render_banner(&local, &complete));

    let report = compare_files(&local, &complete, &filters).map_err(|e| {
        print!("{}", render_error(&e));
        e
    })?;

    print!("{}", render_report(&report));
    log_op_end!(
        "compare",
        duration_ms = start.elapsed().as_millis() as u64,
        verdict = ?report.verdict(),
    );

    Ok(CompareOutcome {
        verdict: report.verdict(),
    })
}
