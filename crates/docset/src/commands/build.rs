//! `docset build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docset_site::SiteBuilder;

use super::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Output file for the site configuration (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Public site URL (overrides config).
    #[arg(long)]
    site_url: Option<String>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = self.content.load(self.site_url)?;
        let resolutions = project.resolve();

        let document = SiteBuilder::new(&project.manifest, &project.config.site)
            .with_search(project.config.search.as_ref())
            .build(&resolutions, &project.snapshot);

        let published = document.plugins.len();
        let skipped = resolutions.len() - published;

        match &self.output {
            Some(path) => {
                document.write_to(path)?;
                output.info(&format!("Output: {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", document.to_json_pretty()?)?;
                stdout.flush()?;
            }
        }

        if skipped > 0 {
            output.warning(&format!(
                "Skipped {skipped} documentation set(s) without content"
            ));
        }
        output.success(&format!("Published {published} documentation set(s)"));
        Ok(())
    }
}
