//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::repl::Repl;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::manifest::{load_manifest, SourceDefinition};
use crate::naming::NameGen;
use crate::output::{write_text_file, GENERATED_BANNER};
use crate::store::DefinitionStore;
use crate::types::{JsonValue, OptionStringExt};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch { url, name, output } => {
                self.fetch(url, name.as_deref(), output.as_deref()).await
            }
            Commands::Infer {
                input,
                name,
                output,
            } => self.infer(input.as_deref(), name, output.as_deref()),
            Commands::Batch { manifest, output } => self.batch(manifest, output.clone()).await,
            Commands::Repl => Repl::new(self.cli.seed).run().await,
        }
    }

    /// Fetch one sample and emit its definitions
    async fn fetch(&self, url: &str, name: Option<&str>, output: Option<&Path>) -> Result<()> {
        url::Url::parse(url)?;

        let client = HttpClient::new();
        debug!("Fetching sample from {}", url);
        let value: JsonValue = client.get_json(url).await?;

        let name = match name {
            Some(name) => name.to_string(),
            None => NameGen::new(self.cli.seed).next_name(6),
        };

        let store = DefinitionStore::from_value(&value, &name)?;
        self.emit(&store, output, GENERATED_BANNER)
    }

    /// Infer definitions from a file or stdin
    fn infer(&self, input: Option<&Path>, name: &str, output: Option<&Path>) -> Result<()> {
        let body = match input {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let store = DefinitionStore::from_document(&body, name)?;
        self.emit(&store, output, GENERATED_BANNER)
    }

    /// Run every manifest source, merging definitions across samples
    async fn batch(&self, manifest_path: &Path, output_override: Option<PathBuf>) -> Result<()> {
        let manifest = load_manifest(manifest_path)?;
        let client = HttpClient::new();
        let mut names = NameGen::new(self.cli.seed);
        let mut session = DefinitionStore::new();

        for source in &manifest.sources {
            let name = source
                .name
                .clone()
                .none_if_empty()
                .unwrap_or_else(|| names.next_name(6));

            debug!("Inferring '{}' from {}", name, describe_source(source));
            let store = self.run_source(&client, source, &name).await?;
            session.merge(store);
        }

        info!(
            "Inferred {} definition(s) from {} source(s)",
            session.len(),
            manifest.sources.len()
        );

        let output = output_override.or_else(|| manifest.output.clone());
        self.emit(&session, output.as_deref(), &manifest.banner)
    }

    /// Build a store from one manifest source
    async fn run_source(
        &self,
        client: &HttpClient,
        source: &SourceDefinition,
        name: &str,
    ) -> Result<DefinitionStore> {
        match (&source.url, &source.file) {
            (Some(url), None) => {
                let value: JsonValue = client.get_json(url).await?;
                DefinitionStore::from_value(&value, name)
            }
            (None, Some(path)) => {
                let body = fs::read_to_string(path)?;
                DefinitionStore::from_document(&body, name)
            }
            // load_manifest validates that exactly one location is set
            _ => Err(Error::manifest(format!(
                "Source '{name}' needs either url or file"
            ))),
        }
    }

    /// Print to stdout, or write to a file with the banner prepended
    fn emit(&self, store: &DefinitionStore, output: Option<&Path>, banner: &str) -> Result<()> {
        match output {
            Some(path) => {
                let text = format!("{}\n\n{}", banner, store.render_to_string());
                write_text_file(path, &text)?;
                info!("Wrote {} definition(s) to {}", store.len(), path.display());
                Ok(())
            }
            None => {
                print!("{}", store.render_to_string());
                Ok(())
            }
        }
    }
}

fn describe_source(source: &SourceDefinition) -> String {
    match (&source.url, &source.file) {
        (Some(url), _) => url.clone(),
        (_, Some(path)) => path.display().to_string(),
        _ => "<unset>".to_string(),
    }
}
