use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use console::style;

use graphid_graph::NationalCloud;

use super::{Context, confirm};
use crate::config::{AppConfig, TenantConfig};

#[derive(Args)]
pub struct TenantArgs {
    #[command(subcommand)]
    action: TenantAction,
}

#[derive(Subcommand)]
enum TenantAction {
    /// Add a new tenant
    Add {
        /// Tenant display name
        #[arg(long)]
        name: String,
        /// Microsoft Entra tenant ID
        #[arg(long)]
        tenant_id: String,
        /// App registration client ID
        #[arg(long)]
        client_id: String,
        /// App registration client secret (prompted for when omitted)
        #[arg(long, env = "GRAPHID_CLIENT_SECRET", hide_env_values = true)]
        client_secret: Option<String>,
        /// National cloud: global, us-government, us-government-dod or china
        #[arg(long, default_value_t = NationalCloud::Global)]
        cloud: NationalCloud,
    },
    /// List configured tenants
    List,
    /// Remove a tenant
    Remove {
        /// Tenant name to remove
        name: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// Set the tenant used when --tenant is not given
    Default {
        /// Tenant name
        name: String,
    },
}

pub async fn run(ctx: &Context, args: TenantArgs) -> Result<()> {
    let path = ctx.config_path();
    match args.action {
        TenantAction::Add {
            name,
            tenant_id,
            client_id,
            client_secret,
            cloud,
        } => {
            let mut config = AppConfig::load_or_default(path)?;
            let client_secret = match client_secret {
                Some(secret) => secret,
                None => dialoguer::Password::new()
                    .with_prompt(format!("Client secret for '{name}'"))
                    .interact()
                    .context("failed to read client secret")?,
            };
            config.add_tenant(TenantConfig {
                name: name.clone(),
                tenant_id,
                client_id,
                client_secret,
                cloud,
            })?;
            config.save(path)?;
            println!("Tenant '{name}' added.");
        }
        TenantAction::List => {
            let config = AppConfig::load_or_default(path)?;
            if config.tenants.is_empty() {
                println!("No tenants configured.");
                return Ok(());
            }
            println!("  {:<20} {:<40} {:<18}", "NAME", "TENANT ID", "CLOUD");
            println!("{}", "-".repeat(80));
            for t in &config.tenants {
                let marker = if config.is_default(t) {
                    style("*").green().bold()
                } else {
                    style(" ")
                };
                println!("{marker} {:<20} {:<40} {:<18}", t.name, t.tenant_id, t.cloud.to_string());
            }
        }
        TenantAction::Remove { name, yes } => {
            let mut config = AppConfig::load(path)?;
            if !confirm(&format!("Remove tenant '{name}'?"), yes)? {
                return Ok(());
            }
            config.remove_tenant(&name)?;
            config.save(path)?;
            println!("Tenant '{name}' removed.");
        }
        TenantAction::Default { name } => {
            let mut config = AppConfig::load(path)?;
            config.set_default(&name)?;
            config.save(path)?;
            println!("Default tenant set to '{name}'.");
        }
    }
    Ok(())
}
