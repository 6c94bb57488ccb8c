//! CLI command implementations.

mod build;
mod status;

use std::path::PathBuf;

use clap::Args;
use docset_config::{CliSettings, Config};
use docset_content_fs::FsSnapshot;
use docset_manifest::{Manifest, VersionManifest};
use docset_resolver::{SetResolution, resolve_all};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use status::StatusArgs;

/// Arguments shared by every command that reads the content tree.
#[derive(Args)]
pub(crate) struct ContentArgs {
    /// Path to configuration file (default: auto-discover docset.toml).
    #[arg(short, long, env = "DOCSET_CONFIG")]
    config: Option<PathBuf>,

    /// Content root holding repositories.json (overrides config).
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Enable verbose output (resolution details).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ContentArgs {
    fn load(&self, site_url: Option<String>) -> Result<Project, CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir.clone(),
            site_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        Ok(Project::open(config))
    }
}

/// Loaded configuration, manifest and content tree.
pub(crate) struct Project {
    config: Config,
    manifest: Manifest,
    versions: VersionManifest,
    snapshot: FsSnapshot,
}

impl Project {
    fn open(config: Config) -> Self {
        let root = config.content_resolved.root.clone();
        tracing::info!(root = %root.display(), "Content root");

        let manifest = Manifest::load_or_default(&config.content_resolved.manifest_path());
        Self {
            versions: VersionManifest::new(root.clone()),
            snapshot: FsSnapshot::new(root),
            manifest,
            config,
        }
    }

    fn resolve(&self) -> Vec<SetResolution<'_>> {
        resolve_all(
            &self.manifest.sets,
            |id| self.versions.load_or_empty(id),
            &self.snapshot,
        )
    }
}
