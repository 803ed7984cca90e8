use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::{Context, or_dash, print_json};
use crate::progress;

#[derive(Args)]
pub struct UserFlowsArgs {
    #[command(subcommand)]
    action: UserFlowsAction,
}

#[derive(Subcommand)]
enum UserFlowsAction {
    /// List B2X user flows
    List,
    /// Show a user flow as JSON
    Show { id: String },
    /// List the attributes collected by a user flow, in page order
    Attributes { id: String },
}

pub async fn run(ctx: &Context, args: UserFlowsArgs) -> Result<()> {
    let client = ctx.client()?;
    let flows = client.identity().b2x_user_flows();

    match args.action {
        UserFlowsAction::List => {
            let all = progress::with_spinner("Fetching user flows...", flows.get_all(None)).await?;
            if all.is_empty() {
                println!("No user flows found.");
                return Ok(());
            }
            println!("{:<40} {:<18} {}", "ID", "TYPE", "VERSION");
            println!("{}", "-".repeat(70));
            for f in &all {
                let flow_type = f
                    .user_flow_type
                    .map(|t| format!("{t:?}"))
                    .unwrap_or_else(|| "-".into());
                let version = f
                    .user_flow_type_version
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".into());
                println!("{:<40} {:<18} {}", or_dash(f.id.as_deref()), flow_type, version);
            }
        }
        UserFlowsAction::Show { id } => {
            let flow = flows
                .by_b2x_identity_user_flow_id(&id)
                .get(None)
                .await?
                .with_context(|| format!("user flow '{id}' returned no content"))?;
            print_json(&flow)?;
        }
        UserFlowsAction::Attributes { id } => {
            let assignments = flows.by_b2x_identity_user_flow_id(&id).user_attribute_assignments();
            let (all, order) = progress::with_spinner("Fetching attribute assignments...", async {
                let all = assignments.get_all(None).await?;
                let order = assignments.get_order().get(None).await?;
                Ok::<_, graphid_graph::GraphError>((all, order))
            })
            .await?;

            let order = order.map(|o| o.order).unwrap_or_default();
            let position = |id: Option<&str>| {
                id.and_then(|id| order.iter().position(|o| o == id))
                    .unwrap_or(usize::MAX)
            };
            let mut all = all;
            all.sort_by_key(|a| position(a.id.as_deref()));

            println!("{:<40} {:<10} {:<14} {}", "ID", "OPTIONAL", "INPUT", "NAME");
            println!("{}", "-".repeat(90));
            for a in &all {
                let optional = match a.is_optional {
                    Some(true) => "yes",
                    Some(false) => "no",
                    None => "-",
                };
                let input = a
                    .user_input_type
                    .map(|t| format!("{t:?}"))
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{:<40} {:<10} {:<14} {}",
                    or_dash(a.id.as_deref()),
                    optional,
                    input,
                    or_dash(a.display_name.as_deref()),
                );
            }
        }
    }
    Ok(())
}
