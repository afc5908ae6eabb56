//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::CollectorConfig;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::graphql::GraphqlIndex;
use crate::listing::{list_uploads, UploadListing};
use crate::pagination::PaginatedCollector;
use crate::types::AccountId;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        self.output_message(&output);
        Ok(())
    }

    /// Run the CLI command and return its output
    pub async fn execute(&self) -> Result<Value> {
        match &self.cli.command {
            Commands::List {
                wallet,
                deadline_secs,
            } => {
                let listing = self.list(wallet, *deadline_secs).await?;
                Ok(serde_json::to_value(listing)?)
            }
            Commands::Url { ids } => self.urls(ids),
        }
    }

    /// Resolve config from file, process environment and flags
    pub fn resolve_config(&self) -> Result<CollectorConfig> {
        self.resolve_config_with(|key| std::env::var(key).ok())
    }

    /// Resolve config using `lookup` in place of the process environment
    pub fn resolve_config_with<F>(&self, lookup: F) -> Result<CollectorConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.cli.config {
            Some(path) => CollectorConfig::from_yaml_file(path)?,
            None => CollectorConfig::default(),
        }
        .with_overrides_from(lookup);

        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(gateway) = &self.cli.gateway {
            config.gateway_base.clone_from(gateway);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        if let Some(max_iterations) = self.cli.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(timeout_secs) = self.cli.timeout_secs {
            config.timeout_secs = timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }

    /// List uploads for a wallet
    async fn list(&self, wallet: &str, deadline_secs: Option<u64>) -> Result<UploadListing> {
        let owner = AccountId::parse(wallet)?;
        let config = self.resolve_config()?;

        info!(owner = %owner, endpoint = %config.endpoint, "Listing uploads");

        let index = GraphqlIndex::from_config(&config)?;
        let collector = PaginatedCollector::from_config(index, &config);
        let gateway = Gateway::new(config.gateway_base.as_str());

        match deadline_secs {
            Some(secs) => {
                let result = collector
                    .collect_within(&owner, Duration::from_secs(secs))
                    .await?;
                Ok(UploadListing::from_result(result, &gateway))
            }
            None => list_uploads(&collector, &gateway, &owner).await,
        }
    }

    /// Map ids to gateway URLs
    fn urls(&self, ids: &[String]) -> Result<Value> {
        let config = self.resolve_config()?;
        let gateway = Gateway::new(config.gateway_base.as_str());
        let urls = gateway.retrieval_urls(ids);
        Ok(json!({ "ids": ids, "urls": urls }))
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["irys-uploads"];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_config_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint: http://from-file/graphql\ngateway_base: http://file-gw/\npage_size: 10"
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let runner = runner(&[
            "--config",
            path,
            "--endpoint",
            "http://from-flag/graphql",
            "url",
            "x",
        ]);
        let config = runner
            .resolve_config_with(|key| match key {
                "IRYS_GRAPHQL_ENDPOINT" => Some("http://from-env/graphql".to_string()),
                "IRYS_GATEWAY_BASE" => Some("http://env-gw/".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.endpoint, "http://from-flag/graphql");
        assert_eq!(config.gateway_base, "http://env-gw/");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_resolve_config_rejects_invalid_flags() {
        let runner = runner(&["--page-size", "0", "url", "x"]);
        assert!(matches!(
            runner.resolve_config_with(no_env),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_wallet() {
        let runner = runner(&["list", "0xnot-a-wallet"]);
        let err = runner.execute().await.unwrap_err();
        assert!(matches!(err, Error::InvalidAccount { .. }));
    }

    #[test]
    fn test_urls_command() {
        let runner = runner(&["--gateway", "https://gw.example", "url", "a", "b"]);
        let output = runner.urls(&["a".to_string(), "b".to_string()]).unwrap();

        assert_eq!(
            output,
            json!({
                "ids": ["a", "b"],
                "urls": ["https://gw.example/a", "https://gw.example/b"]
            })
        );
    }
}
