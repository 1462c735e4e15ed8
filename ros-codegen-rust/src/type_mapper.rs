//! Rust type mapper implementation.

use ros7api_codegen::{TypeMapper, schema::ValueType};

/// Maps field value types to the runtime crate's codec types.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// The runtime crate symbol a value type needs imported, if any.
    pub fn runtime_symbol(&self, ty: &ValueType) -> Option<&'static str> {
        match ty {
            ValueType::Integer => Some("Number"),
            ValueType::Boolean => Some("Boolean"),
            ValueType::IpAddress => Some("Ip"),
            ValueType::IpNetwork => Some("IpNet"),
            ValueType::StringList => Some("StringList"),
            ValueType::NumberRangeList => Some("NumberList"),
            ValueType::String | ValueType::Enum(_) => None,
        }
    }
}

impl TypeMapper for RustTypeMapper {
    fn map_type(&self, ty: &ValueType) -> String {
        match ty {
            ValueType::String => "String".to_string(),
            ValueType::Enum(name) => name.clone(),
            other => self
                .runtime_symbol(other)
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_type() {
        let mapper = RustTypeMapper;
        assert_eq!(mapper.map_type(&ValueType::Integer), "Number");
        assert_eq!(mapper.map_type(&ValueType::Boolean), "Boolean");
        assert_eq!(mapper.map_type(&ValueType::String), "String");
        assert_eq!(mapper.map_type(&ValueType::IpAddress), "Ip");
        assert_eq!(mapper.map_type(&ValueType::IpNetwork), "IpNet");
        assert_eq!(mapper.map_type(&ValueType::StringList), "StringList");
        assert_eq!(mapper.map_type(&ValueType::NumberRangeList), "NumberList");
        assert_eq!(
            mapper.map_type(&ValueType::Enum("SystemNtp_Mode".into())),
            "SystemNtp_Mode"
        );
    }

    #[test]
    fn test_map_optional() {
        let mapper = RustTypeMapper;
        assert_eq!(
            mapper.map_optional(&ValueType::NumberRangeList),
            "Option<NumberList>"
        );
    }

    #[test]
    fn test_runtime_symbol() {
        let mapper = RustTypeMapper;
        assert_eq!(mapper.runtime_symbol(&ValueType::String), None);
        assert_eq!(mapper.runtime_symbol(&ValueType::IpNetwork), Some("IpNet"));
        assert_eq!(mapper.runtime_symbol(&ValueType::Enum("X".into())), None);
    }
}
