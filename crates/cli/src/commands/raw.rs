use anyhow::{Context as _, Result};
use clap::Args;
use http::Method;

use graphid_graph::{RequestAdapterExt, RequestInformation};

use super::{Context, print_json};

#[derive(Args)]
pub struct RawArgs {
    /// Absolute URL, or a path relative to the tenant's Graph base URL
    /// such as `/identity/conditionalAccess/policies?$top=1`
    url: String,
}

pub async fn run(ctx: &Context, args: RawArgs) -> Result<()> {
    let client = ctx.client()?;
    let adapter = client.adapter();
    let url = resolve_url(adapter.base_url(), &args.url);

    let info = RequestInformation::from_raw_url(Method::GET, &url);
    let body: Option<serde_json::Value> = adapter
        .send_json(info)
        .await
        .with_context(|| format!("GET {url} failed"))?;
    match body {
        Some(body) => print_json(&body)?,
        None => println!("(no content)"),
    }
    Ok(())
}

/// Absolute URLs are used as given, anything else is joined to `base_url`.
fn resolve_url(base_url: &str, url: &str) -> String {
    if url.contains("://") {
        return url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://graph.microsoft.com/v1.0";

    #[test]
    fn relative_path_is_joined_to_base_url() {
        assert_eq!(
            resolve_url(BASE, "/identity/conditionalAccess/policies?$top=1"),
            "https://graph.microsoft.com/v1.0/identity/conditionalAccess/policies?$top=1"
        );
        assert_eq!(
            resolve_url("https://graph.microsoft.com/v1.0/", "identity"),
            "https://graph.microsoft.com/v1.0/identity"
        );
    }

    #[test]
    fn absolute_urls_are_kept() {
        let https = "https://graph.microsoft.us/v1.0/identity/identityProviders";
        assert_eq!(resolve_url(BASE, https), https);
        let http = "http://localhost:8080/v1.0/identity";
        assert_eq!(resolve_url(BASE, http), http);
    }
}
