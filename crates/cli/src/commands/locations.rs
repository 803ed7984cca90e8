use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use graphid_graph::models::{IpRange, NamedLocation};

use super::{Context, confirm, or_dash, print_json};
use crate::progress;

#[derive(Args)]
pub struct LocationsArgs {
    #[command(subcommand)]
    action: LocationsAction,
}

#[derive(Subcommand)]
enum LocationsAction {
    /// List named locations
    List,
    /// Show a named location as JSON
    Show { id: String },
    /// Create an IP named location
    AddIp {
        /// Display name
        name: String,
        /// CIDR ranges, IPv4 or IPv6
        #[arg(required = true)]
        ranges: Vec<String>,
        /// Mark the location as trusted
        #[arg(long)]
        trusted: bool,
    },
    /// Create a country named location
    AddCountry {
        /// Display name
        name: String,
        /// Two-letter ISO 3166 country codes
        #[arg(required = true)]
        countries: Vec<String>,
    },
    /// Delete a named location
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(ctx: &Context, args: LocationsArgs) -> Result<()> {
    let client = ctx.client()?;
    let locations = client.identity().conditional_access().named_locations();

    match args.action {
        LocationsAction::List => {
            let all = progress::with_spinner("Fetching named locations...", locations.get_all(None))
                .await?;
            if all.is_empty() {
                println!("No named locations found.");
                return Ok(());
            }
            println!("{:<38} {:<8} {:<8} {}", "ID", "KIND", "TRUSTED", "NAME");
            println!("{}", "-".repeat(90));
            for l in &all {
                let kind = format!("{:?}", l.kind()).to_lowercase();
                let trusted = match l.is_trusted {
                    Some(true) => "yes",
                    Some(false) => "no",
                    None => "-",
                };
                println!(
                    "{:<38} {:<8} {:<8} {}",
                    or_dash(l.id.as_deref()),
                    kind,
                    trusted,
                    or_dash(l.display_name.as_deref()),
                );
            }
        }
        LocationsAction::Show { id } => {
            let location = locations
                .by_named_location_id(&id)
                .get(None)
                .await?
                .with_context(|| format!("named location '{id}' returned no content"))?;
            print_json(&location)?;
        }
        LocationsAction::AddIp {
            name,
            ranges,
            trusted,
        } => {
            let body = NamedLocation::ip(name, ranges.into_iter().map(IpRange::cidr), trusted);
            let created = locations.post(&body, None).await?;
            println!(
                "Named location created: {}",
                or_dash(created.as_ref().and_then(|l| l.id.as_deref()))
            );
        }
        LocationsAction::AddCountry { name, countries } => {
            let body = NamedLocation::country(name, countries);
            let created = locations.post(&body, None).await?;
            println!(
                "Named location created: {}",
                or_dash(created.as_ref().and_then(|l| l.id.as_deref()))
            );
        }
        LocationsAction::Delete { id, yes } => {
            if !confirm(&format!("Delete named location {id}?"), yes)? {
                return Ok(());
            }
            locations.by_named_location_id(&id).delete(None).await?;
            println!("Named location {id} deleted.");
        }
    }
    Ok(())
}
