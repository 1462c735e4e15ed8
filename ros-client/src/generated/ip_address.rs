// Code generated by ros7gen. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use crate::{Boolean, Client, Ip, IpNet, RecordId, RequestContext, Result, Transport};

/// Interface IP addresses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpAddress {
    #[serde(rename = ".id")]
    pub id: RecordId,
    pub address: IpNet,
    pub network: Ip,
    pub interface: String,
    pub disabled: Boolean,
    pub dynamic: Boolean,
}

/// Partial update of [`IpAddress`].
///
/// Fields left as `None` are not sent and stay unchanged on the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpAddressUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<IpNet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Ip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Boolean>,
}

impl<T: Transport> Client<T> {
    /// List every record of `ip/address`.
    pub async fn ip_address_list(&self, ctx: &RequestContext) -> Result<Vec<IpAddress>> {
        self.list(ctx, "ip/address").await
    }

    /// Update the record `id` of `ip/address`.
    pub async fn ip_address_patch(
        &self,
        ctx: &RequestContext,
        id: &RecordId,
        update: &IpAddressUpdate,
    ) -> Result<IpAddress> {
        self.patch(ctx, "ip/address", id, update).await
    }
}
