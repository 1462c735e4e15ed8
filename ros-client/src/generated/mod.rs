// Code generated by ros7gen. DO NOT EDIT.

mod interface_bridge_port;
mod interface_bridge_vlan;
mod ip_address;

pub use interface_bridge_port::*;
pub use interface_bridge_vlan::*;
pub use ip_address::*;
