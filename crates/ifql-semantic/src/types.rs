//! IFQL Type System
//!
//! A closed set of value categories ([`Kind`]) and the [`Type`] capability
//! interface for categories with structure. [`SemanticType`] is the owned
//! type descriptor produced by the type checker.

use crate::error::TypeCapabilityError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Category of a value's runtime shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Invalid,
    String,
    Int,
    UInt,
    Float,
    Bool,
    Time,
    Duration,
    Function,
    Array,
    Map,
    Regex,
    Struct,
}

impl Kind {
    /// Every kind, ordered by code
    pub const ALL: [Kind; 13] = [
        Self::Invalid,
        Self::String,
        Self::Int,
        Self::UInt,
        Self::Float,
        Self::Bool,
        Self::Time,
        Self::Duration,
        Self::Function,
        Self::Array,
        Self::Map,
        Self::Regex,
        Self::Struct,
    ];

    /// Numeric kinds accepted by the arithmetic and comparison operators
    pub const NUMERIC: [Kind; 3] = [Self::Int, Self::UInt, Self::Float];

    /// Canonical lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::String => "string",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Function => "function",
            Self::Array => "array",
            Self::Map => "map",
            Self::Regex => "regex",
            Self::Struct => "struct",
        }
    }

    /// Stable numeric code of this kind
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Kind for a raw code, if the code is known
    pub fn from_code(code: u8) -> Option<Kind> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Display label for a raw code; unknown codes get a generated `kind<N>` label
    pub fn label_for_code(code: u8) -> Cow<'static, str> {
        match Self::from_code(code) {
            Some(kind) => Cow::Borrowed(kind.name()),
            None => Cow::Owned(format!("kind{code}")),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability interface over a [`Kind`]
///
/// `kind()` is always valid. The structural queries are valid only for kinds
/// that carry structure; everything else answers with a
/// [`TypeCapabilityError`]. A bare [`Kind`] carries no structure, so all of
/// its queries fail.
pub trait Type {
    fn kind(&self) -> Kind;

    /// Type of the named property of a map or struct
    fn try_property_type(&self, name: &str) -> Result<SemanticType, TypeCapabilityError> {
        let _ = name;
        Err(TypeCapabilityError::NoProperties { kind: self.kind() })
    }

    /// Type of the elements of an array
    fn try_element_type(&self) -> Result<SemanticType, TypeCapabilityError> {
        Err(TypeCapabilityError::NoElements { kind: self.kind() })
    }

    /// Type returned by calling a function
    fn try_return_type(&self) -> Result<SemanticType, TypeCapabilityError> {
        Err(TypeCapabilityError::NotCallable { kind: self.kind() })
    }

    /// Type of the named property of a map or struct
    ///
    /// # Panics
    ///
    /// Panics if the kind has no properties. Callers must only ask after
    /// checking `kind()`.
    fn property_type(&self, name: &str) -> SemanticType {
        self.try_property_type(name)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Type of the elements of an array
    ///
    /// # Panics
    ///
    /// Panics if the kind is not `array`.
    fn element_type(&self) -> SemanticType {
        self.try_element_type().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Type returned by calling a function
    ///
    /// # Panics
    ///
    /// Panics if the kind is not `function`.
    fn return_type(&self) -> SemanticType {
        self.try_return_type().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Type for Kind {
    fn kind(&self) -> Kind {
        *self
    }
}

/// Owned type descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    /// A category with no further structure
    Kind(Kind),
    /// Array with a uniform element type
    Array(Box<SemanticType>),
    /// Map from property name to type (object literals)
    Map(IndexMap<String, SemanticType>),
    /// Record with a fixed set of named properties
    Struct(IndexMap<String, SemanticType>),
    /// Function with named parameters
    Function {
        params: IndexMap<String, SemanticType>,
        return_type: Box<SemanticType>,
    },
}

impl SemanticType {
    pub const INVALID: SemanticType = SemanticType::Kind(Kind::Invalid);

    pub fn array(element: impl Into<SemanticType>) -> Self {
        Self::Array(Box::new(element.into()))
    }

    pub fn map<K: Into<String>>(properties: impl IntoIterator<Item = (K, SemanticType)>) -> Self {
        Self::Map(properties.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn structure<K: Into<String>>(
        properties: impl IntoIterator<Item = (K, SemanticType)>,
    ) -> Self {
        Self::Struct(properties.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn function<K: Into<String>>(
        params: impl IntoIterator<Item = (K, SemanticType)>,
        return_type: impl Into<SemanticType>,
    ) -> Self {
        Self::Function {
            params: params.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            return_type: Box::new(return_type.into()),
        }
    }
}

impl From<Kind> for SemanticType {
    fn from(kind: Kind) -> Self {
        Self::Kind(kind)
    }
}

impl Type for SemanticType {
    fn kind(&self) -> Kind {
        match self {
            Self::Kind(kind) => *kind,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
            Self::Struct(_) => Kind::Struct,
            Self::Function { .. } => Kind::Function,
        }
    }

    fn try_property_type(&self, name: &str) -> Result<SemanticType, TypeCapabilityError> {
        match self {
            Self::Map(props) | Self::Struct(props) => {
                Ok(props.get(name).cloned().unwrap_or(Self::INVALID))
            }
            _ => Err(TypeCapabilityError::NoProperties { kind: self.kind() }),
        }
    }

    fn try_element_type(&self) -> Result<SemanticType, TypeCapabilityError> {
        match self {
            Self::Array(element) => Ok(element.as_ref().clone()),
            _ => Err(TypeCapabilityError::NoElements { kind: self.kind() }),
        }
    }

    fn try_return_type(&self) -> Result<SemanticType, TypeCapabilityError> {
        match self {
            Self::Function { return_type, .. } => Ok(return_type.as_ref().clone()),
            _ => Err(TypeCapabilityError::NotCallable { kind: self.kind() }),
        }
    }
}

fn write_fields(
    f: &mut fmt::Formatter<'_>,
    fields: &IndexMap<String, SemanticType>,
) -> fmt::Result {
    for (i, (name, ty)) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}: {ty}")?;
    }
    Ok(())
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{kind}"),
            Self::Array(element) => write!(f, "[{element}]"),
            Self::Map(props) => {
                f.write_str("{")?;
                write_fields(f, props)?;
                f.write_str("}")
            }
            Self::Struct(props) => {
                f.write_str("struct {")?;
                write_fields(f, props)?;
                f.write_str("}")
            }
            Self::Function {
                params,
                return_type,
            } => {
                f.write_str("(")?;
                write_fields(f, params)?;
                write!(f, ") => {return_type}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Int, "int")]
    #[case(Kind::UInt, "uint")]
    #[case(Kind::Duration, "duration")]
    #[case(Kind::Struct, "struct")]
    #[case(Kind::Invalid, "invalid")]
    fn test_kind_names(#[case] kind: Kind, #[case] name: &str) {
        assert_eq!(kind.to_string(), name);
        assert_eq!(serde_json::to_value(kind).unwrap(), name);
    }

    #[test]
    fn test_kind_codes() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(Kind::from_code(13), None);
        assert_eq!(Kind::label_for_code(2), "int");
        assert_eq!(Kind::label_for_code(42), "kind42");
    }

    #[test]
    fn test_bare_kind_has_no_capabilities() {
        assert_eq!(
            Kind::Map.try_property_type("a"),
            Err(TypeCapabilityError::NoProperties { kind: Kind::Map })
        );
        assert_eq!(
            Kind::Array.try_element_type(),
            Err(TypeCapabilityError::NoElements { kind: Kind::Array })
        );
        assert!(Kind::Function.try_return_type().is_err());
    }

    #[test]
    #[should_panic(expected = "int")]
    fn test_property_type_panics_on_misuse() {
        let _ = Kind::Int.property_type("a");
    }

    #[test]
    #[should_panic]
    fn test_element_type_panics_on_misuse() {
        let _ = SemanticType::map([("a", Kind::Int.into())]).element_type();
    }

    #[test]
    fn test_structured_queries() {
        let record = SemanticType::structure([
            ("name", SemanticType::from(Kind::String)),
            ("age", SemanticType::from(Kind::Int)),
        ]);
        assert_eq!(record.kind(), Kind::Struct);
        assert_eq!(record.property_type("age"), Kind::Int.into());
        assert_eq!(record.property_type("missing"), SemanticType::INVALID);

        let list = SemanticType::array(Kind::Float);
        assert_eq!(list.element_type(), Kind::Float.into());
        assert_eq!(
            list.try_property_type("a"),
            Err(TypeCapabilityError::NoProperties { kind: Kind::Array })
        );

        let func = SemanticType::function([("a", SemanticType::from(Kind::Int))], Kind::Bool);
        assert_eq!(func.kind(), Kind::Function);
        assert_eq!(func.return_type(), Kind::Bool.into());
    }

    #[test]
    fn test_display() {
        let func = SemanticType::function(
            [("rows", SemanticType::array(SemanticType::map([("v", Kind::Float.into())])))],
            Kind::Bool,
        );
        assert_eq!(func.to_string(), "(rows: [{v: float}]) => bool");
    }
}
