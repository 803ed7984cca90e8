use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::{Context, or_dash, print_json};
use crate::progress;

#[derive(Args)]
pub struct ProvidersArgs {
    #[command(subcommand)]
    action: ProvidersAction,
}

#[derive(Subcommand)]
enum ProvidersAction {
    /// List configured identity providers
    List,
    /// Show an identity provider as JSON
    Show { id: String },
    /// List provider types available in the tenant
    Types,
}

pub async fn run(ctx: &Context, args: ProvidersArgs) -> Result<()> {
    let client = ctx.client()?;
    let providers = client.identity().identity_providers();

    match args.action {
        ProvidersAction::List => {
            let all = progress::with_spinner("Fetching identity providers...", providers.get_all(None))
                .await?;
            if all.is_empty() {
                println!("No identity providers configured.");
                return Ok(());
            }
            println!("{:<45} {:<18} {:<20} {}", "ID", "KIND", "TYPE", "NAME");
            println!("{}", "-".repeat(110));
            for p in &all {
                println!(
                    "{:<45} {:<18} {:<20} {}",
                    or_dash(p.id.as_deref()),
                    p.kind().to_string(),
                    or_dash(p.identity_provider_type.as_deref()),
                    or_dash(p.display_name.as_deref()),
                );
            }
        }
        ProvidersAction::Show { id } => {
            let provider = providers
                .by_identity_provider_base_id(&id)
                .get(None)
                .await?
                .with_context(|| format!("identity provider '{id}' returned no content"))?;
            print_json(&provider)?;
        }
        ProvidersAction::Types => {
            let types = progress::with_spinner(
                "Fetching available provider types...",
                providers.available_provider_types().get_all(None),
            )
            .await?;
            for t in types {
                println!("{t}");
            }
        }
    }
    Ok(())
}
