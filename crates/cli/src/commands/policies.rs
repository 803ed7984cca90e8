use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use console::style;

use graphid_graph::identity::conditional_access::ConditionalAccessPoliciesRequestBuilder;
use graphid_graph::models::{ConditionalAccessPolicy, ConditionalAccessPolicyState};
use graphid_graph::{CollectionQueryParameters, RequestConfiguration};

use super::{Context, confirm, or_dash, print_json, styled_state};
use crate::progress;

#[derive(Args)]
pub struct PoliciesArgs {
    #[command(subcommand)]
    action: PoliciesAction,
}

#[derive(Subcommand)]
enum PoliciesAction {
    /// List conditional access policies
    List {
        /// OData filter, e.g. "state eq 'enabled'"
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show a policy as JSON
    Show { id: String },
    /// Turn a policy on
    Enable { id: String },
    /// Turn a policy off
    Disable { id: String },
    /// Evaluate a policy without enforcing it
    ReportOnly { id: String },
    /// Delete a policy
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(ctx: &Context, args: PoliciesArgs) -> Result<()> {
    let client = ctx.client()?;
    let policies = client.identity().conditional_access().policies();

    match args.action {
        PoliciesAction::List { filter } => {
            let mut query = CollectionQueryParameters::new()
                .select(["id", "displayName", "state", "modifiedDateTime"]);
            if let Some(filter) = filter {
                query = query.filter(filter);
            }
            let all = progress::with_spinner(
                "Fetching conditional access policies...",
                policies.get_all(Some(RequestConfiguration::from(query))),
            )
            .await?;

            if all.is_empty() {
                println!("No policies found.");
                return Ok(());
            }
            println!("{:<38} {:<12} {:<17} {}", "ID", "STATE", "MODIFIED", "NAME");
            println!("{}", "-".repeat(100));
            for p in &all {
                let modified = p
                    .modified_date_time
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{:<38} {:<12} {:<17} {}",
                    or_dash(p.id.as_deref()),
                    styled_state(p.state),
                    modified,
                    or_dash(p.display_name.as_deref()),
                );
            }
        }
        PoliciesAction::Show { id } => {
            let policy = policies
                .by_conditional_access_policy_id(&id)
                .get(None)
                .await?
                .with_context(|| format!("policy '{id}' returned no content"))?;
            print_json(&policy)?;
        }
        PoliciesAction::Enable { id } => {
            set_state(&policies, &id, ConditionalAccessPolicyState::Enabled).await?;
        }
        PoliciesAction::Disable { id } => {
            set_state(&policies, &id, ConditionalAccessPolicyState::Disabled).await?;
        }
        PoliciesAction::ReportOnly { id } => {
            set_state(
                &policies,
                &id,
                ConditionalAccessPolicyState::EnabledForReportingButNotEnforced,
            )
            .await?;
        }
        PoliciesAction::Delete { id, yes } => {
            if !confirm(&format!("Delete conditional access policy {id}?"), yes)? {
                return Ok(());
            }
            policies
                .by_conditional_access_policy_id(&id)
                .delete(None)
                .await?;
            println!("Policy {id} deleted.");
        }
    }
    Ok(())
}

async fn set_state(
    policies: &ConditionalAccessPoliciesRequestBuilder,
    id: &str,
    state: ConditionalAccessPolicyState,
) -> Result<()> {
    let body = ConditionalAccessPolicy::state_update(state);
    policies
        .by_conditional_access_policy_id(id)
        .patch(&body, None)
        .await?;
    println!("Policy {id} is now {}.", style(state).bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use graphid_graph::{
        GraphResult, GraphServiceClient, RawResponse, RequestAdapter, RequestInformation,
    };
    use http::{Method, StatusCode};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<(Method, String, serde_json::Value)>>,
    }

    #[async_trait]
    impl RequestAdapter for Recorder {
        fn base_url(&self) -> &str {
            "https://graph.test/v1.0"
        }

        async fn execute(&self, mut request: RequestInformation) -> GraphResult<RawResponse> {
            request
                .path_parameters
                .insert("baseurl".to_string(), self.base_url().to_string());
            let body = request
                .content
                .as_ref()
                .map(|c| serde_json::from_slice(c).unwrap())
                .unwrap_or_default();
            self.requests
                .lock()
                .unwrap()
                .push((request.method.clone(), request.uri()?, body));
            Ok(RawResponse::new(StatusCode::NO_CONTENT, ""))
        }
    }

    #[tokio::test]
    async fn set_state_patches_through_the_given_builder() {
        let recorder = Arc::new(Recorder::default());
        let client = GraphServiceClient::new(recorder.clone());
        let policies = client.identity().conditional_access().policies();

        set_state(&policies, "p1", ConditionalAccessPolicyState::Disabled)
            .await
            .unwrap();
        set_state(&policies, "p2", ConditionalAccessPolicyState::EnabledForReportingButNotEnforced)
            .await
            .unwrap();

        let requests = recorder.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        let (method, url, body) = &requests[0];
        assert_eq!(*method, Method::PATCH);
        assert_eq!(url, "https://graph.test/v1.0/identity/conditionalAccess/policies/p1");
        assert_eq!(*body, serde_json::json!({ "state": "disabled" }));
        assert_eq!(
            requests[1].2,
            serde_json::json!({ "state": "enabledForReportingButNotEnforced" })
        );
    }
}
