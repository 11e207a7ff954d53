use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use nodereg::{ManifestToolProvider, NodeFactory, ProviderValidation, RegistryOptions};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationChoice {
    Permissive,
    Strict,
}

#[derive(Debug, Parser)]
#[command(name = "nodereg")]
#[command(about = "List node types and build node instances", long_about = None)]
pub struct Cli {
    /// Provider snapshot manifest whose tools are added as node types.
    #[arg(long, global = true, env = "NODEREG_PROVIDER_MANIFEST", value_name = "PATH")]
    pub provider_manifest: Option<PathBuf>,

    /// How provider-backed names are validated.
    #[arg(
        long,
        global = true,
        env = "NODEREG_PROVIDER_VALIDATION",
        value_enum,
        default_value_t = ValidationChoice::Permissive
    )]
    pub provider_validation: ValidationChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the schema of every node type, by group.
    List {
        #[arg(long)]
        pretty: bool,
    },
    /// Check whether a node type name is valid.
    Validate {
        #[arg(value_name = "TYPE")]
        type_name: String,
    },
    /// Build a node from a JSON configuration and print its normalized form.
    Create {
        #[arg(value_name = "INSTANCE")]
        instance: String,
        #[arg(value_name = "TYPE")]
        type_name: String,
        #[arg(value_name = "JSON_CONFIG")]
        config: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    List { pretty: bool },
    Validate { type_name: String },
    Create {
        instance: String,
        type_name: String,
        config: Value,
    },
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub provider_manifest: Option<PathBuf>,
    pub options: RegistryOptions,
    pub action: Action,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<CliConfig> {
        let provider_validation = match self.provider_validation {
            ValidationChoice::Permissive => ProviderValidation::Permissive,
            ValidationChoice::Strict => ProviderValidation::Strict,
        };
        let action = match self.command {
            Command::List { pretty } => Action::List { pretty },
            Command::Validate { type_name } => Action::Validate { type_name },
            Command::Create {
                instance,
                type_name,
                config,
            } => Action::Create {
                instance,
                type_name,
                config: serde_json::from_str(&config).context("Invalid JSON configuration")?,
            },
        };
        Ok(CliConfig {
            provider_manifest: self.provider_manifest,
            options: RegistryOptions {
                provider_validation,
            },
            action,
        })
    }
}

/// Printed text plus whether the process should exit successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

async fn build_factory(config: &CliConfig) -> anyhow::Result<NodeFactory> {
    match &config.provider_manifest {
        Some(path) => {
            let provider = ManifestToolProvider::from_path(path)
                .with_context(|| format!("Failed to load provider manifest {}", path.display()))?;
            info!(manifest = %path.display(), "Using provider manifest");
            NodeFactory::for_session(Arc::new(provider), config.options.clone())
                .await
                .context("Failed to build node registry")
        }
        None => Ok(NodeFactory::builtin()),
    }
}

pub async fn execute(config: CliConfig) -> anyhow::Result<CommandOutput> {
    let factory = build_factory(&config).await?;
    match config.action {
        Action::List { pretty } => {
            let schemas = factory
                .list_node_schemas()
                .await
                .context("Failed to list node types")?;
            let text = if pretty {
                serde_json::to_string_pretty(&schemas)?
            } else {
                serde_json::to_string(&schemas)?
            };
            Ok(CommandOutput {
                text,
                success: true,
            })
        }
        Action::Validate { type_name } => {
            let valid = factory.is_valid_node_type(&type_name).await?;
            Ok(CommandOutput {
                text: json!({"type": type_name, "valid": valid}).to_string(),
                success: valid,
            })
        }
        Action::Create {
            instance,
            type_name,
            config,
        } => {
            let node = factory
                .create_node(instance, &type_name, config)
                .await
                .with_context(|| format!("Failed to create node of type {}", type_name))?;
            let text = json!({
                "name": node.name(),
                "type": node.type_name(),
                "implementation": node.implementation().metadata().implementation_name,
                "config": node.config(),
            })
            .to_string();
            Ok(CommandOutput {
                text,
                success: true,
            })
        }
    }
}
