use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Microsoft Graph deployments. Each has its own Graph host and login authority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NationalCloud {
    #[default]
    Global,
    UsGovernment,
    UsGovernmentDod,
    China,
}

impl NationalCloud {
    pub const ALL: [NationalCloud; 4] = [
        Self::Global,
        Self::UsGovernment,
        Self::UsGovernmentDod,
        Self::China,
    ];

    pub fn graph_host(self) -> &'static str {
        match self {
            Self::Global => "graph.microsoft.com",
            Self::UsGovernment => "graph.microsoft.us",
            Self::UsGovernmentDod => "dod-graph.microsoft.us",
            Self::China => "microsoftgraph.chinacloudapi.cn",
        }
    }

    pub fn authority(self) -> &'static str {
        match self {
            Self::Global => "https://login.microsoftonline.com",
            Self::UsGovernment | Self::UsGovernmentDod => "https://login.microsoftonline.us",
            Self::China => "https://login.chinacloudapi.cn",
        }
    }

    /// `https://<host>/v1.0`
    pub fn base_url(self) -> String {
        format!("https://{}/v1.0", self.graph_host())
    }

    /// Scope requested by the client-credentials grant.
    pub fn default_scope(self) -> String {
        format!("https://{}/.default", self.graph_host())
    }

    /// Hosts a bearer token may be sent to.
    pub fn allowed_hosts() -> Vec<String> {
        let mut hosts: Vec<String> = Self::ALL.iter().map(|c| c.graph_host().to_string()).collect();
        hosts.push("canary.graph.microsoft.com".to_string());
        hosts
    }
}

impl fmt::Display for NationalCloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Global => "global",
            Self::UsGovernment => "us-government",
            Self::UsGovernmentDod => "us-government-dod",
            Self::China => "china",
        };
        f.write_str(name)
    }
}

impl FromStr for NationalCloud {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown national cloud '{s}'"))
    }
}
