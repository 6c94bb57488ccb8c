//! `docset status` command implementation.

use std::io::Write;

use clap::Args;
use docset_resolver::{Resolution, SetResolution};
use serde::Serialize;

use super::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the status command.
#[derive(Args)]
pub(crate) struct StatusArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl StatusArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let project = self.content.load(None)?;
        let resolutions = project.resolve();
        let report: Vec<SetStatus<'_>> = resolutions.iter().map(SetStatus::from).collect();

        if self.json {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
            stdout.flush()?;
            return Ok(());
        }

        let output = Output::new();
        if report.is_empty() {
            output.warning("No enabled documentation sets in the manifest");
            return Ok(());
        }
        for status in &report {
            print_status(&output, status);
        }
        let published = report.iter().filter(|s| s.published).count();
        output.info(&format!(
            "{published} of {} documentation set(s) published",
            report.len()
        ));
        Ok(())
    }
}

/// Status of one documentation set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetStatus<'a> {
    id: &'a str,
    label: &'a str,
    published: bool,
    version_switcher: bool,
    #[serde(flatten)]
    resolution: &'a Resolution,
}

impl<'a> From<&'a SetResolution<'_>> for SetStatus<'a> {
    fn from(entry: &'a SetResolution<'_>) -> Self {
        Self {
            id: &entry.set.id,
            label: &entry.set.label,
            published: entry.resolution.is_published(),
            version_switcher: entry.resolution.show_version_switcher(),
            resolution: &entry.resolution,
        }
    }
}

impl SetStatus<'_> {
    /// One-line routing summary.
    fn summary(&self) -> String {
        match &self.resolution.config {
            None => "excluded".to_owned(),
            Some(config) => match config.last_version() {
                Some(version) => format!("{}, default route: {version}", config.describe()),
                None => config.describe().to_owned(),
            },
        }
    }

    fn versions_line(&self) -> String {
        if self.resolution.valid_versions.is_empty() {
            "versions: none".to_owned()
        } else {
            format!("versions: {}", self.resolution.valid_versions.join(", "))
        }
    }
}

fn print_status(output: &Output, status: &SetStatus<'_>) {
    output.highlight(&format!("{} ({})", status.id, status.label));
    if status.published {
        output.success(&format!("  {}", status.summary()));
    } else {
        output.error(&format!("  {}", status.summary()));
    }
    output.detail(&format!("  {}", status.versions_line()));
    output.detail(&format!(
        "  version switcher: {}",
        if status.version_switcher { "shown" } else { "hidden" }
    ));
    for warning in &status.resolution.warnings {
        output.warning(&format!("  ! {warning}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docset_content::MockSnapshot;
    use docset_manifest::Manifest;
    use docset_resolver::resolve_all;
    use pretty_assertions::assert_eq;

    fn manifest() -> Manifest {
        Manifest::from_json(
            r#"{ "repositories": [
                { "id": "core", "label": "Core" },
                { "id": "hal", "label": "HAL" },
                { "id": "net", "label": "Net" }
            ] }"#,
        )
        .unwrap()
    }

    fn versions(id: &str) -> Vec<String> {
        match id {
            "core" => vec!["1.0".to_owned(), "0.9".to_owned()],
            "hal" => vec!["2.0".to_owned()],
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_summary_lines() {
        let manifest = manifest();
        let snapshot = MockSnapshot::new()
            .with_current("core")
            .with_version("core", "1.0")
            .with_version("hal", "2.0");
        let resolutions = resolve_all(&manifest.sets, versions, &snapshot);
        let report: Vec<SetStatus<'_>> = resolutions.iter().map(SetStatus::from).collect();

        assert_eq!(report[0].summary(), "current + versions, default route: current");
        assert_eq!(report[0].versions_line(), "versions: 1.0");
        assert!(report[0].version_switcher);
        assert_eq!(report[1].summary(), "versions only, default route: 2.0");
        assert!(!report[1].version_switcher);
        assert_eq!(report[2].summary(), "excluded");
        assert_eq!(report[2].versions_line(), "versions: none");
        assert!(!report[2].published);
    }

    #[test]
    fn test_json_report() {
        let manifest = manifest();
        let snapshot = MockSnapshot::new()
            .with_current("core")
            .with_version("core", "1.0");
        let resolutions = resolve_all(&manifest.sets, versions, &snapshot);
        let report: Vec<SetStatus<'_>> = resolutions.iter().map(SetStatus::from).collect();

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json[0]["id"], "core");
        assert_eq!(json[0]["published"], true);
        assert_eq!(json[0]["versionSwitcher"], true);
        assert_eq!(json[0]["hasCurrent"], true);
        assert_eq!(json[0]["validVersions"], serde_json::json!(["1.0"]));
        assert_eq!(json[0]["config"]["mode"], "current-and-versions");
        assert_eq!(json[0]["warnings"][0]["kind"], "missing-version-directory");
        assert_eq!(json[0]["warnings"][0]["version"], "0.9");
        assert_eq!(json[2]["config"], serde_json::Value::Null);
        assert_eq!(json[2]["warnings"][0]["kind"], "no-content");
    }
}
