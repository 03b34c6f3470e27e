//! Dialect selection
//!
//! Embedders usually keep the dialect choice in their own TOML config:
//!
//! ```toml
//! [dialects]
//! luau = true
//! synapse = false
//! ```

use crate::error::Result;
use crate::types::{Dialect, SyntaxRule};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Enabled dialect layers. Lua 5.1 is always enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectFlags {
    /// Enable Roblox Luau extensions
    pub luau: bool,
    /// Enable Synapse X exploit globals and debug extensions
    pub synapse: bool,
}

impl DialectFlags {
    /// Standard Lua 5.1 only
    pub fn lua51() -> Self {
        Self::default()
    }

    pub fn luau() -> Self {
        Self {
            luau: true,
            synapse: false,
        }
    }

    /// Full exploit environment: Luau plus Synapse X
    pub fn all() -> Self {
        Self {
            luau: true,
            synapse: true,
        }
    }

    pub fn with_luau(mut self, enabled: bool) -> Self {
        self.luau = enabled;
        self
    }

    pub fn with_synapse(mut self, enabled: bool) -> Self {
        self.synapse = enabled;
        self
    }

    /// Build flags from a list of dialects; `Lua51` entries are no-ops.
    pub fn from_dialects(dialects: impl IntoIterator<Item = Dialect>) -> Self {
        dialects
            .into_iter()
            .fold(Self::default(), |flags, dialect| match dialect {
                Dialect::Lua51 => flags,
                Dialect::Luau => flags.with_luau(true),
                Dialect::Synapse => flags.with_synapse(true),
            })
    }

    pub fn is_enabled(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::Lua51 => true,
            Dialect::Luau => self.luau,
            Dialect::Synapse => self.synapse,
        }
    }

    /// Whether a rule's dialect requirements are satisfied.
    ///
    /// A record with both flags set needs both layers.
    pub fn allows(&self, rule: &SyntaxRule) -> bool {
        (!rule.luau_only || self.luau) && (!rule.synapse_only || self.synapse)
    }
}

/// Catalog settings as they appear in an embedder's config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub dialects: DialectFlags,
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)?;
        if config.dialects.synapse && !config.dialects.luau {
            debug!("Synapse X enabled without Luau; Luau-only rules stay filtered out");
        }
        Ok(config)
    }
}
