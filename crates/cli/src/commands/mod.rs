pub mod attributes;
pub mod locations;
pub mod policies;
pub mod providers;
pub mod raw;
pub mod tenant;
pub mod user_flows;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use console::{StyledObject, style};
use serde::Serialize;
use tracing::debug;

use graphid_graph::GraphServiceClient;
use graphid_graph::models::ConditionalAccessPolicyState;

use crate::config::AppConfig;

#[derive(Subcommand)]
pub enum Command {
    /// Manage tenants
    Tenant(tenant::TenantArgs),
    /// Conditional access policies
    Policies(policies::PoliciesArgs),
    /// Conditional access named locations
    Locations(locations::LocationsArgs),
    /// Identity providers
    Providers(providers::ProvidersArgs),
    /// B2X user flows
    UserFlows(user_flows::UserFlowsArgs),
    /// User flow attributes
    Attributes(attributes::AttributesArgs),
    /// GET an arbitrary Graph URL and print the JSON response
    Raw(raw::RawArgs),
}

/// Options shared by every command.
pub struct Context {
    config_path: PathBuf,
    tenant: Option<String>,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, tenant: Option<String>) -> Self {
        Self {
            config_path: config_path.unwrap_or_else(AppConfig::default_path),
            tenant,
        }
    }

    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }

    /// A client authenticated as the selected tenant's app registration.
    pub fn client(&self) -> Result<GraphServiceClient> {
        let config = AppConfig::load(&self.config_path)?;
        let tenant = config.resolve_tenant(self.tenant.as_deref())?;
        debug!(tenant = %tenant.name, cloud = %tenant.cloud, "connecting");
        GraphServiceClient::with_credentials(tenant.credentials())
            .with_context(|| format!("failed to create client for tenant '{}'", tenant.name))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ask before a destructive call unless `--yes` was given.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("failed to read confirmation")
}

pub fn styled_state(state: Option<ConditionalAccessPolicyState>) -> StyledObject<String> {
    match state {
        Some(state @ ConditionalAccessPolicyState::Enabled) => style(state.to_string()).green(),
        Some(state @ ConditionalAccessPolicyState::Disabled) => style(state.to_string()).dim(),
        Some(state) => style(state.to_string()).yellow(),
        None => style("-".to_string()),
    }
}

pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
