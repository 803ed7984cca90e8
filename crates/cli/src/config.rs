use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use graphid_graph::{ClientCredentials, NationalCloud};

const CONFIG_FILE: &str = "graphid.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tenant: Option<String>,
    #[serde(default)]
    pub tenants: Vec<TenantConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantConfig {
    pub name: String,
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub cloud: NationalCloud,
}

impl TenantConfig {
    pub fn credentials(&self) -> ClientCredentials {
        ClientCredentials {
            tenant_id: self.tenant_id.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            cloud: self.cloud,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("graphid")
            .join(CONFIG_FILE)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("config not found at {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Like [`AppConfig::load`], but a missing file yields an empty config.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn find_tenant(&self, name: &str) -> Option<&TenantConfig> {
        self.tenants
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn add_tenant(&mut self, tenant: TenantConfig) -> Result<()> {
        if self.find_tenant(&tenant.name).is_some() {
            anyhow::bail!("tenant '{}' already exists", tenant.name);
        }
        if self.tenants.is_empty() {
            self.default_tenant = Some(tenant.name.clone());
        }
        self.tenants.push(tenant);
        Ok(())
    }

    pub fn remove_tenant(&mut self, name: &str) -> Result<()> {
        let before = self.tenants.len();
        self.tenants.retain(|t| !t.name.eq_ignore_ascii_case(name));
        if self.tenants.len() == before {
            anyhow::bail!("tenant '{name}' not found");
        }
        if self
            .default_tenant
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(name))
        {
            self.default_tenant = None;
        }
        Ok(())
    }

    pub fn set_default(&mut self, name: &str) -> Result<()> {
        let tenant = self
            .find_tenant(name)
            .with_context(|| format!("tenant '{name}' not found"))?;
        self.default_tenant = Some(tenant.name.clone());
        Ok(())
    }

    pub fn is_default(&self, tenant: &TenantConfig) -> bool {
        self.default_tenant
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(&tenant.name))
    }

    /// The tenant named on the command line, else the default tenant, else
    /// the only configured tenant.
    pub fn resolve_tenant(&self, requested: Option<&str>) -> Result<&TenantConfig> {
        if let Some(name) = requested {
            return self
                .find_tenant(name)
                .with_context(|| format!("tenant '{name}' not found"));
        }
        if let Some(name) = self.default_tenant.as_deref() {
            return self
                .find_tenant(name)
                .with_context(|| format!("default tenant '{name}' not found"));
        }
        match self.tenants.as_slice() {
            [only] => Ok(only),
            [] => anyhow::bail!("no tenants configured, run `graphid tenant add` first"),
            _ => anyhow::bail!("several tenants configured, pass --tenant or set a default"),
        }
    }
}
