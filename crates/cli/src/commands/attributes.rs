use anyhow::Result;
use clap::Args;

use graphid_graph::models::IdentityUserFlowAttributeType;
use graphid_graph::{CollectionQueryParameters, RequestConfiguration};

use super::{Context, or_dash};
use crate::progress;

#[derive(Args)]
pub struct AttributesArgs {
    /// Only list custom attributes
    #[arg(long)]
    custom: bool,
}

pub async fn run(ctx: &Context, args: AttributesArgs) -> Result<()> {
    let client = ctx.client()?;
    let config = args.custom.then(|| {
        RequestConfiguration::from(
            CollectionQueryParameters::new().filter("userFlowAttributeType eq 'custom'"),
        )
    });
    let all = progress::with_spinner(
        "Fetching user flow attributes...",
        client.identity().user_flow_attributes().get_all(config),
    )
    .await?;

    if all.is_empty() {
        println!("No user flow attributes found.");
        return Ok(());
    }
    println!("{:<45} {:<10} {:<18} {}", "ID", "KIND", "DATA TYPE", "NAME");
    println!("{}", "-".repeat(100));
    for a in &all {
        let kind = match a.user_flow_attribute_type {
            Some(IdentityUserFlowAttributeType::BuiltIn) => "built-in",
            Some(IdentityUserFlowAttributeType::Custom) => "custom",
            Some(IdentityUserFlowAttributeType::Required) => "required",
            Some(IdentityUserFlowAttributeType::UnknownFutureValue) | None => "-",
        };
        let data_type = a
            .data_type
            .map(|t| format!("{t:?}"))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<45} {:<10} {:<18} {}",
            or_dash(a.id.as_deref()),
            kind,
            data_type,
            or_dash(a.display_name.as_deref()),
        );
    }
    Ok(())
}
