// Code generated by ros7gen. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use crate::{Boolean, Client, NumberList, RecordId, RequestContext, Result, StringList, Transport};

/// Bridge VLAN table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceBridgeVlan {
    #[serde(rename = ".id")]
    pub id: RecordId,
    pub bridge: String,
    pub disabled: Boolean,
    /// Interfaces that egress this VLAN tagged
    pub tagged: StringList,
    /// Interfaces that egress this VLAN untagged
    pub untagged: StringList,
    #[serde(rename = "vlan-ids")]
    pub vlan_ids: NumberList,
    #[serde(rename = "current-tagged")]
    pub current_tagged: StringList,
    #[serde(rename = "current-untagged")]
    pub current_untagged: StringList,
    pub dynamic: Boolean,
}

/// Partial update of [`InterfaceBridgeVlan`].
///
/// Fields left as `None` are not sent and stay unchanged on the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterfaceBridgeVlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Boolean>,
    /// Interfaces that egress this VLAN tagged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged: Option<StringList>,
    /// Interfaces that egress this VLAN untagged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untagged: Option<StringList>,
    #[serde(rename = "vlan-ids", skip_serializing_if = "Option::is_none")]
    pub vlan_ids: Option<NumberList>,
}

impl<T: Transport> Client<T> {
    /// List every record of `interface/bridge/vlan`.
    pub async fn interface_bridge_vlan_list(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<InterfaceBridgeVlan>> {
        self.list(ctx, "interface/bridge/vlan").await
    }

    /// Update the record `id` of `interface/bridge/vlan`.
    pub async fn interface_bridge_vlan_patch(
        &self,
        ctx: &RequestContext,
        id: &RecordId,
        update: &InterfaceBridgeVlanUpdate,
    ) -> Result<InterfaceBridgeVlan> {
        self.patch(ctx, "interface/bridge/vlan", id, update).await
    }
}
