use crate::{
    cli::{Cli, Commands, GenerateArgs, RewriteArgs},
    error::{Error, Result},
    generator::{self, get_template_engine, GenerateOptions},
    ioutils::open_input,
    rewrite::{FileProcessor, RewriteMode, RewriteOptions, RewriteSummary},
};
use std::io::BufRead;

/// Runs the declaration generator and returns the text to print.
pub struct GenerateRunner {
    args: GenerateArgs,
}

impl GenerateRunner {
    pub fn new(args: GenerateArgs) -> Self {
        Self { args }
    }

    /// Reads declarations from the configured input and renders them.
    ///
    /// Returns `Ok(None)` when the input held no declarations at all.
    pub fn run(self) -> Result<Option<String>> {
        let reader = open_input(self.args.input.as_deref())?;
        self.run_with(reader)
    }

    /// Same as [`GenerateRunner::run`] but with an explicit reader.
    pub fn run_with(self, reader: impl BufRead) -> Result<Option<String>> {
        let declarations = generator::parse_declarations(reader)?;
        log::info!(
            "Parsed {} properties and {} aliases",
            declarations.properties.len(),
            declarations.aliases.len()
        );
        if declarations.properties.is_empty() && declarations.aliases.is_empty() {
            return Ok(None);
        }

        let engine = get_template_engine()?;
        let options = GenerateOptions {
            mode: self.args.output_mode(),
            tag_style: self.args.tag_style,
        };
        generator::generate(&engine, &declarations, options).map(Some)
    }
}

/// Runs one rewrite over a file or folder.
pub struct RewriteRunner {
    args: RewriteArgs,
}

impl RewriteRunner {
    pub fn new(args: RewriteArgs) -> Self {
        Self { args }
    }

    /// Returns `Ok(None)` when the mode is unknown; nothing is touched then.
    pub fn run(self) -> Result<Option<RewriteSummary>> {
        let mode: RewriteMode = match self.args.mode.parse() {
            Ok(mode) => mode,
            Err(err @ Error::UnknownMode { .. }) => {
                println!("{err}");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let transform = mode.transform()?;
        let options = self.rewrite_options();
        log::debug!("Running {mode} over '{}' with {options:?}", self.args.path.display());

        let processor = FileProcessor::new(transform.as_ref(), &options)?;
        let summary = processor.process_path(&self.args.path)?;
        if summary.failed > 0 {
            println!("Rewrite finished with failures: {summary}.");
            return Err(Error::IncompleteRewrite { failed: summary.failed });
        }
        Ok(Some(summary))
    }

    fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            path_mode: self.args.path_mode(),
            extension: self.args.extension.clone(),
            excludes: self.args.excludes.clone(),
            failure_policy: self.args.on_error,
            dry_run: self.args.dry_run,
        }
    }
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => {
            if let Some(output) = GenerateRunner::new(args).run()? {
                println!("{output}");
            }
        }
        Commands::Rewrite(args) => {
            let dry_run = args.dry_run;
            if let Some(summary) = RewriteRunner::new(args).run()? {
                let prefix = if dry_run { "[DRY RUN] " } else { "" };
                println!("{prefix}Rewrite completed: {summary}.");
            }
        }
    }
    Ok(())
}
