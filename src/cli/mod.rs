//! CLI for lighthouse-pipeline
//!
//! - `effective`: Display the effective pipeline of a trigger
//! - `completions`: Generate shell completions

pub mod completions;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lighthouse_pipeline::infrastructure::{DEFAULT_LOG_LEVEL, non_empty};
use lighthouse_pipeline::{
    BatchInput, EffectiveCommand, EffectiveOptions, FileResolver, Input, ProcessRunner,
    TerminalInput, init_logging,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// CLI arguments for lighthouse-pipeline
#[derive(Parser, Debug)]
#[command(name = "lighthouse-pipeline")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Displays the effective tekton pipeline
    #[command(visible_alias = "dump")]
    Effective(EffectiveArgs),

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct EffectiveArgs {
    /// The directory to look for the '.lighthouse' folder in
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// The path to the trigger file. If not specified you will be prompted to choose one
    #[arg(short, long)]
    trigger: Option<String>,

    /// The pipeline kind and name. e.g. 'presubmit/pr' or 'postsubmit/release'. If not specified you will be prompted to choose one
    #[arg(short, long)]
    pipeline: Option<String>,

    /// The output file to write the effective pipeline to. If not specified output to the terminal
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// The editor to open the effective pipeline inside. e.g. use 'idea' or 'code'. Defaults to $JX_EDITOR
    #[arg(short, long)]
    editor: Option<String>,

    /// The line number to open the editor at
    #[arg(long)]
    line: Option<NonZeroUsize>,

    /// Recursively find all '.lighthouse' folders such as if linting a Pipeline Catalog
    #[arg(short, long)]
    recursive: bool,

    /// Never prompt; fail instead when a trigger or pipeline is not specified
    #[arg(short, long)]
    batch_mode: bool,
}

impl EffectiveArgs {
    fn into_options(self) -> EffectiveOptions {
        EffectiveOptions {
            dir: self.dir,
            trigger_name: non_empty(self.trigger),
            pipeline_name: non_empty(self.pipeline),
            out_file: self.out.filter(|path| !path.as_os_str().is_empty()),
            editor: non_empty(self.editor),
            line: self.line.map(NonZeroUsize::get),
            recursive: self.recursive,
            batch_mode: self.batch_mode,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Effective(effective) => {
            let options = effective.into_options().with_editor_from_env();
            tracing::debug!("options: {:?}", options);

            let resolver = FileResolver::new();
            let input: Box<dyn Input> = if options.batch_mode {
                Box::new(BatchInput)
            } else {
                Box::new(TerminalInput::new())
            };

            let command = EffectiveCommand::new(options, &resolver, input.as_ref(), &ProcessRunner);
            command.run(&mut std::io::stdout().lock())?;
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
                ShellArg::Elvish => Shell::Elvish,
            };

            let completions = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, &output_path)?;
            } else {
                println!("{}", completions);
            }
        }
    }

    Ok(())
}
