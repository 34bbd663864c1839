//! lighthouse-pipeline - inspect effective lighthouse pipelines
//!
//! Shows the fully expanded pipeline behind a lighthouse trigger, the same
//! pipeline the CI system will run.
//!
//! ## Commands
//!
//! - `lighthouse-pipeline effective` - Display the effective pipeline of a trigger
//! - `lighthouse-pipeline completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Pick a trigger and pipeline interactively
//! lighthouse-pipeline effective
//!
//! # Print a specific pipeline
//! lighthouse-pipeline effective -t .lighthouse/jx/triggers.yaml -p presubmit/pr
//!
//! # Save it to a file
//! lighthouse-pipeline effective -p presubmit/pr -o pr.yaml
//!
//! # Open it in VS Code at the first step
//! lighthouse-pipeline effective -e code
//!
//! # Use an editor by default
//! export JX_EDITOR="idea"
//! lighthouse-pipeline effective
//! ```

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if std::env::var("LIGHTHOUSE_PIPELINE_VERBOSE").is_ok() {
                eprintln!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}
