//! Hosting seam.
//!
//! Deployment is an external collaborator: the core only needs "does this
//! project exist" and "put these files there". [`HostProvider`] captures
//! exactly that, and [`publish`] drives it — export the document, ask the
//! host, report back. Failures surface as a [`DeployOutcome`] with messages
//! rather than panics, so a flaky host never takes the editor down with it.
//!
//! The real hosting API client lives outside this crate. What ships here is
//! [`DirectoryHost`], which "deploys" to a local directory — useful on its
//! own (`publish --dest`) and as the test double for the trait.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::document::Document;
use crate::export::{self, ExportBundle};

#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a deploy attempt, in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub success: bool,
    /// Where the deployed site can be reached, when the host knows.
    pub url: Option<String>,
    /// Human-readable progress/diagnostic lines for the CLI.
    pub messages: Vec<String>,
}

impl DeployOutcome {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            url: None,
            messages: vec![message.into()],
        }
    }
}

/// The two operations the builder needs from any host.
pub trait HostProvider {
    /// Whether a project with this name already exists on the host.
    fn project_exists(&self, name: &str) -> Result<bool, HostError>;

    /// Upload the exported files as project `name`.
    fn deploy(&self, name: &str, bundle: &ExportBundle) -> Result<DeployOutcome, HostError>;
}

/// A host that writes bundles into subdirectories of a local root.
pub struct DirectoryHost {
    root: PathBuf,
}

impl DirectoryHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl HostProvider for DirectoryHost {
    fn project_exists(&self, name: &str) -> Result<bool, HostError> {
        Ok(self.root.join(name).is_dir())
    }

    fn deploy(&self, name: &str, bundle: &ExportBundle) -> Result<DeployOutcome, HostError> {
        let target = self.root.join(name);
        match bundle.write_to(&target) {
            Ok(()) => Ok(DeployOutcome {
                success: true,
                url: Some(format!("file://{}", target.display())),
                messages: vec![format!("{} files written to {}", bundle.len(), target.display())],
            }),
            Err(export::ExportError::Io(err)) => Ok(DeployOutcome::failure(format!(
                "could not write to {}: {err}",
                target.display()
            ))),
        }
    }
}

/// Export `doc` and deploy it as project `name` on `host`.
///
/// Invalid input (an empty project name) comes back as a failed outcome,
/// not an error — the error channel is reserved for the host itself.
pub fn publish(
    doc: &Document,
    config: &SiteConfig,
    name: &str,
    host: &dyn HostProvider,
) -> Result<DeployOutcome, HostError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(DeployOutcome::failure("project name must not be empty"));
    }

    let bundle = export::export(doc, config);
    let mut messages = Vec::new();
    if host.project_exists(name)? {
        messages.push(format!("replacing existing project '{name}'"));
    } else {
        messages.push(format!("creating project '{name}'"));
    }

    let mut outcome = host.deploy(name, &bundle)?;
    messages.append(&mut outcome.messages);
    outcome.messages = messages;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_document;
    use tempfile::TempDir;

    #[test]
    fn directory_host_writes_the_bundle() {
        let tmp = TempDir::new().unwrap();
        let host = DirectoryHost::new(tmp.path());
        let doc = sample_document();
        let config = SiteConfig::named("Test Website");

        let outcome = publish(&doc, &config, "my-site", &host).unwrap();

        assert!(outcome.success);
        assert!(outcome.url.as_deref().unwrap().starts_with("file://"));
        let index = std::fs::read_to_string(tmp.path().join("my-site/index.html")).unwrap();
        assert!(index.contains("Hello World"));
    }

    #[test]
    fn project_exists_after_first_deploy() {
        let tmp = TempDir::new().unwrap();
        let host = DirectoryHost::new(tmp.path());
        let doc = sample_document();
        let config = SiteConfig::named("Test Website");

        assert!(!host.project_exists("my-site").unwrap());
        let first = publish(&doc, &config, "my-site", &host).unwrap();
        assert!(first.messages[0].contains("creating"));

        assert!(host.project_exists("my-site").unwrap());
        let second = publish(&doc, &config, "my-site", &host).unwrap();
        assert!(second.messages[0].contains("replacing"));
    }

    #[test]
    fn empty_project_name_is_a_failed_outcome() {
        let tmp = TempDir::new().unwrap();
        let host = DirectoryHost::new(tmp.path());
        let outcome =
            publish(&sample_document(), &SiteConfig::default(), "  ", &host).unwrap();
        assert!(!outcome.success);
        assert!(outcome.messages[0].contains("name"));
    }

    #[test]
    fn unwritable_target_is_a_failed_outcome_not_a_panic() {
        let tmp = TempDir::new().unwrap();
        // A file where the project directory should go forces a write error.
        std::fs::write(tmp.path().join("blocked"), "in the way").unwrap();
        let host = DirectoryHost::new(tmp.path());
        let outcome = publish(
            &sample_document(),
            &SiteConfig::default(),
            "blocked",
            &host,
        )
        .unwrap();
        assert!(!outcome.success);
        assert!(outcome.messages.iter().any(|m| m.contains("could not write")));
    }
}
