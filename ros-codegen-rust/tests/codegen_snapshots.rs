//! Snapshot tests for Rust code generation.

use std::str::FromStr;

use ros7api_codegen_rust::{
    Generator, LanguageCodegen, RUNTIME_CRATE_PATH, RustGeneratorOptions,
};
use ros7api_schema::Schema;

/// Render a schema and return the files keyed by path, sorted.
fn generate_files(schema_toml: &str, options: RustGeneratorOptions) -> Vec<(String, String)> {
    let schema = Schema::from_str(schema_toml).expect("Failed to parse schema");
    let generator = Generator::new(&schema).with_options(options);

    let mut files: Vec<(String, String)> = generator
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_downstream_crate_gets_extension_trait() {
    let files = generate_files(
        r#"
        [[menus.system.menus.identity.record.properties]]
        name = "name"
        type = "string"
        "#,
        RustGeneratorOptions::default(),
    );

    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, ["mod.rs", "system_identity.rs"]);

    let record = get_file(&files, "system_identity.rs").expect("system_identity.rs not found");
    insta::assert_snapshot!(record, @r#"
    // Code generated by ros7gen. DO NOT EDIT.

    use serde::{Deserialize, Serialize};
    use ros7api::{Client, RecordId, RequestContext, Result, Transport};

    /// A record of the `system/identity` menu.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SystemIdentity {
        #[serde(rename = ".id")]
        pub id: RecordId,
        pub name: String,
    }

    /// Partial update of [`SystemIdentity`].
    ///
    /// Fields left as `None` are not sent and stay unchanged on the device.
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct SystemIdentityUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
    }

    /// Operations on `system/identity`.
    pub trait SystemIdentityApi {
        /// List every record of `system/identity`.
        fn system_identity_list(
            &self,
            ctx: &RequestContext,
        ) -> impl std::future::Future<Output = Result<Vec<SystemIdentity>>> + Send;

        /// Update the record `id` of `system/identity`.
        fn system_identity_patch(
            &self,
            ctx: &RequestContext,
            id: &RecordId,
            update: &SystemIdentityUpdate,
        ) -> impl std::future::Future<Output = Result<SystemIdentity>> + Send;
    }

    impl<T: Transport> SystemIdentityApi for Client<T> {
        async fn system_identity_list(&self, ctx: &RequestContext) -> Result<Vec<SystemIdentity>> {
            self.list(ctx, "system/identity").await
        }

        async fn system_identity_patch(
            &self,
            ctx: &RequestContext,
            id: &RecordId,
            update: &SystemIdentityUpdate,
        ) -> Result<SystemIdentity> {
            self.patch(ctx, "system/identity", id, update).await
        }
    }
    "#);
}

#[test]
fn test_runtime_crate_record_with_enum_and_keywords() {
    let files = generate_files(
        r#"
        [menus.interface.menus.ethernet.record]
        description = "Ethernet interfaces"

        [[menus.interface.menus.ethernet.record.properties]]
        name = "id"
        type = "integer"
        read-only = true

        [[menus.interface.menus.ethernet.record.properties]]
        name = "type"
        type = "string"

        [[menus.interface.menus.ethernet.record.properties]]
        name = "mode"
        type = "enumeration"
        variants = [{ value = "802.1q" }, { value = "none" }]

        [[menus.interface.menus.ethernet.record.properties]]
        name = "running"
        type = "boolean"
        read-only = true
        "#,
        RustGeneratorOptions::default().runtime_path(RUNTIME_CRATE_PATH),
    );

    let record =
        get_file(&files, "interface_ethernet.rs").expect("interface_ethernet.rs not found");
    insta::assert_snapshot!(record, @r#"
    // Code generated by ros7gen. DO NOT EDIT.

    use serde::{Deserialize, Serialize};
    use crate::{Boolean, Client, Number, RecordId, RequestContext, Result, Transport};

    /// Values of the `mode` property.
    #[allow(non_camel_case_types)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum InterfaceEthernet_Mode {
        #[serde(rename = "802.1q")]
        V8021q,
        #[serde(rename = "none")]
        None,
    }

    impl InterfaceEthernet_Mode {
        /// Wire value of this variant.
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::V8021q => "802.1q",
                Self::None => "none",
            }
        }
    }

    /// Ethernet interfaces
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct InterfaceEthernet {
        #[serde(rename = ".id")]
        pub id: RecordId,
        #[serde(rename = "id")]
        pub id_: Number,
        pub r#type: String,
        pub mode: InterfaceEthernet_Mode,
        pub running: Boolean,
    }

    /// Partial update of [`InterfaceEthernet`].
    ///
    /// Fields left as `None` are not sent and stay unchanged on the device.
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct InterfaceEthernetUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub r#type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mode: Option<InterfaceEthernet_Mode>,
    }

    impl<T: Transport> Client<T> {
        /// List every record of `interface/ethernet`.
        pub async fn interface_ethernet_list(
            &self,
            ctx: &RequestContext,
        ) -> Result<Vec<InterfaceEthernet>> {
            self.list(ctx, "interface/ethernet").await
        }

        /// Update the record `id` of `interface/ethernet`.
        pub async fn interface_ethernet_patch(
            &self,
            ctx: &RequestContext,
            id: &RecordId,
            update: &InterfaceEthernetUpdate,
        ) -> Result<InterfaceEthernet> {
            self.patch(ctx, "interface/ethernet", id, update).await
        }
    }
    "#);
}

#[test]
fn test_mod_rs_lists_every_record() {
    let files = generate_files(
        r#"
        [[menus.ip.menus.address.record.properties]]
        name = "address"
        type = "ip-network"

        [[menus.interface.menus.bridge.menus.vlan.record.properties]]
        name = "vlan-ids"
        type = "number-range-list"
        "#,
        RustGeneratorOptions::default(),
    );

    let mod_rs = get_file(&files, "mod.rs").expect("mod.rs not found");
    insta::assert_snapshot!(mod_rs, @r"
    // Code generated by ros7gen. DO NOT EDIT.

    mod interface_bridge_vlan;
    mod ip_address;

    pub use interface_bridge_vlan::*;
    pub use ip_address::*;
    ");
}

#[test]
fn test_unknown_type_halts_generation() {
    let err = Schema::from_str(
        r#"
        [[menus.system.menus.clock.record.properties]]
        name = "time-zone-name"
        type = "timezone"
        "#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("timezone"), "{err}");
}
