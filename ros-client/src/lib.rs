//! Typed client for the RouterOS 7 REST API.
//!
//! Every scalar in the REST API travels as a JSON string. The [`codec`] types
//! translate those strings into numbers, booleans, addresses and lists. The
//! per-menu resource and update types plus their `<menu>_list` and
//! `<menu>_patch` operations are generated from `schema/types.toml` by
//! `ros7gen` and re-exported at the crate root.
//!
//! ```no_run
//! use ros7api::{Client, InterfaceBridgeVlanUpdate, RequestContext};
//!
//! # async fn run() -> ros7api::Result<()> {
//! let client = Client::from_env()?;
//! let ctx = RequestContext::new();
//!
//! for vlan in client.interface_bridge_vlan_list(&ctx).await? {
//!     if vlan.vlan_ids.contains(3005) && !vlan.tagged.iter().any(|t| t == "ether8") {
//!         let mut tagged = vlan.tagged.clone();
//!         tagged.0.push("ether8".to_string());
//!         let update = InterfaceBridgeVlanUpdate {
//!             tagged: Some(tagged),
//!             ..Default::default()
//!         };
//!         client.interface_bridge_vlan_patch(&ctx, &vlan.id, &update).await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod codec;
mod config;
mod context;
mod error;
#[rustfmt::skip]
mod generated;
mod id;
mod transport;

pub use client::Client;
pub use codec::{Boolean, Ip, IpNet, Number, NumberList, NumberRange, StringList, WireValue};
pub use config::{ClientConfig, ENV_ADDRESS, ENV_PASSWORD, ENV_USERNAME};
pub use context::RequestContext;
pub use error::{DecodeError, EncodeError, Error, InvalidRange, Result, TransportError};
pub use generated::*;
pub use id::RecordId;
pub use transport::{HttpTransport, Transport};
pub use tokio_util::sync::CancellationToken;
