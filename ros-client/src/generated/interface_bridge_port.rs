// Code generated by ros7gen. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use crate::{Boolean, Client, Number, RecordId, RequestContext, Result, Transport};

/// Frame types accepted on ingress
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceBridgePort_FrameTypes {
    #[serde(rename = "admit-all")]
    AdmitAll,
    #[serde(rename = "admit-only-untagged-and-priority-tagged")]
    AdmitOnlyUntaggedAndPriorityTagged,
    #[serde(rename = "admit-only-vlan-tagged")]
    AdmitOnlyVlanTagged,
}

impl InterfaceBridgePort_FrameTypes {
    /// Wire value of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdmitAll => "admit-all",
            Self::AdmitOnlyUntaggedAndPriorityTagged => "admit-only-untagged-and-priority-tagged",
            Self::AdmitOnlyVlanTagged => "admit-only-vlan-tagged",
        }
    }
}

/// Bridge port table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceBridgePort {
    #[serde(rename = ".id")]
    pub id: RecordId,
    pub bridge: String,
    pub interface: String,
    /// VLAN ID assigned to untagged ingress traffic
    pub pvid: Number,
    /// Frame types accepted on ingress
    #[serde(rename = "frame-types")]
    pub frame_types: InterfaceBridgePort_FrameTypes,
    #[serde(rename = "ingress-filtering")]
    pub ingress_filtering: Boolean,
    pub disabled: Boolean,
    pub inactive: Boolean,
}

/// Partial update of [`InterfaceBridgePort`].
///
/// Fields left as `None` are not sent and stay unchanged on the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterfaceBridgePortUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    /// VLAN ID assigned to untagged ingress traffic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pvid: Option<Number>,
    /// Frame types accepted on ingress
    #[serde(rename = "frame-types", skip_serializing_if = "Option::is_none")]
    pub frame_types: Option<InterfaceBridgePort_FrameTypes>,
    #[serde(rename = "ingress-filtering", skip_serializing_if = "Option::is_none")]
    pub ingress_filtering: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Boolean>,
}

impl<T: Transport> Client<T> {
    /// List every record of `interface/bridge/port`.
    pub async fn interface_bridge_port_list(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<InterfaceBridgePort>> {
        self.list(ctx, "interface/bridge/port").await
    }

    /// Update the record `id` of `interface/bridge/port`.
    pub async fn interface_bridge_port_patch(
        &self,
        ctx: &RequestContext,
        id: &RecordId,
        update: &InterfaceBridgePortUpdate,
    ) -> Result<InterfaceBridgePort> {
        self.patch(ctx, "interface/bridge/port", id, update).await
    }
}
