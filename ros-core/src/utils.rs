//! Shared naming functions for schema loading and code generation.

/// Uppercase the first character of a string, leaving the rest untouched
/// (e.g., "bridge" -> "Bridge", "vlanIds" -> "VlanIds").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a hyphen-delimited wire name to PascalCase (e.g., "vlan-ids" -> "VlanIds").
///
/// Every segment has its first character capitalized and the segments are
/// concatenated. Empty segments vanish, so "a--b" and "a-b" map to the same
/// identifier.
pub fn to_pascal_case(s: &str) -> String {
    s.split('-').map(capitalize).collect()
}

/// Derive the type name of a record from its menu path
/// (e.g., "interface/bridge/vlan" -> "InterfaceBridgeVlan").
///
/// Each path segment is converted with [`to_pascal_case`], so hyphenated menus
/// such as "dhcp-server" become "DhcpServer".
pub fn to_type_name(path: &str) -> String {
    path.split('/').map(to_pascal_case).collect()
}

/// Derive a type-level name from an enumeration wire value
/// (e.g., "admit-only-vlan-tagged" -> "AdmitOnlyVlanTagged", "802.1q" -> "V8021q").
///
/// Any character that is not an ASCII letter or digit separates segments. A
/// name that would start with a digit is prefixed with `V`.
pub fn to_variant_name(value: &str) -> String {
    let name: String = value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(capitalize)
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("V{}", name)
    } else {
        name
    }
}

/// Convert a string to snake_case (e.g., "VlanIds" -> "vlan_ids").
///
/// Runs of capitals are kept together, so "IPAddress" becomes "ip_address"
/// and "VlanIDs" becomes "vlan_ids".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // A trailing "s" pluralizes the acronym ("VlanIDs" -> "vlan_ids").
            let plural = chars.get(i + 1) == Some(&'s')
                && !chars.get(i + 2).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower && !plural)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Check whether a string is a plain ASCII identifier (letters, digits and
/// underscores, not starting with a digit).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bridge"), "Bridge");
        assert_eq!(capitalize("vlanIds"), "VlanIds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("vlan-ids"), "VlanIds");
        assert_eq!(to_pascal_case("current-untagged"), "CurrentUntagged");
        assert_eq!(to_pascal_case("bridge"), "Bridge");
        assert_eq!(to_pascal_case("a--b"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_type_name() {
        assert_eq!(to_type_name("interface/bridge/vlan"), "InterfaceBridgeVlan");
        assert_eq!(to_type_name("ip/dhcp-server/lease"), "IpDhcpServerLease");
        assert_eq!(to_type_name("system"), "System");
    }

    #[test]
    fn test_to_variant_name() {
        assert_eq!(to_variant_name("admit-all"), "AdmitAll");
        assert_eq!(to_variant_name("802.1q"), "V8021q");
        assert_eq!(to_variant_name("on_demand"), "OnDemand");
        assert_eq!(to_variant_name("*"), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("VlanIds"), "vlan_ids");
        assert_eq!(to_snake_case("Bridge"), "bridge");
        assert_eq!(to_snake_case("IPAddress"), "ip_address");
        assert_eq!(to_snake_case("VlanIDs"), "vlan_ids");
        assert_eq!(to_snake_case("IDsAllowed"), "ids_allowed");
        assert_eq!(to_snake_case("Mtu2"), "mtu2");
        assert_eq!(to_snake_case("dhcp-server"), "dhcp_server");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("VlanIds"));
        assert!(is_identifier("_private"));
        assert!(!is_identifier("8021q"));
        assert!(!is_identifier("Vlan.Ids"));
        assert!(!is_identifier(""));
    }
}
