// ABOUTME: Profile record assembled from the host-supplied partial identity and Graph attributes
// ABOUTME: Graph values override host values key by key; no schema is enforced on either side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Partial identity the host already knows before Graph is called
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostProfileContext {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// User principal name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    /// Directory object ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tenant display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
}

/// Flat profile record returned to the web client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord(Map<String, Value>);

impl ProfileRecord {
    /// Merge Graph attributes over the host context
    ///
    /// Null Graph attributes do not erase a value the host supplied. A Graph
    /// payload that is not an object contributes nothing.
    #[must_use]
    pub fn merge(context: &HostProfileContext, graph: &Value) -> Self {
        let mut record = match serde_json::to_value(context) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        if let Value::Object(attributes) = graph {
            for (key, value) in attributes {
                if key.starts_with("@odata") || value.is_null() {
                    continue;
                }
                record.insert(key.clone(), value.clone());
            }
        }

        Self(record)
    }

    /// String attribute by name
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Username used for the domain gate: UPN, then mail
    #[must_use]
    pub fn principal_name(&self) -> Option<&str> {
        self.get_str("userPrincipalName")
            .or_else(|| self.get_str("mail"))
    }

    /// Underlying attribute map
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }
}
