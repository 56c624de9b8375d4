//! Operator type-resolution table
//!
//! Maps `(operator, left kind, right kind)` to the kind of the result. The
//! table is the complete set of supported operand pairings: a miss means the
//! combination is unsupported and must be reported as a type error.

use crate::types::Kind;
use ifql_ast::OperatorKind;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Key of the operator table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinarySignature {
    pub operator: OperatorKind,
    pub left: Kind,
    pub right: Kind,
}

impl BinarySignature {
    pub const fn new(operator: OperatorKind, left: Kind, right: Kind) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }
}

static BINARY_TYPES: LazyLock<HashMap<BinarySignature, Kind>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    // Arithmetic: same-kind numeric operands only
    for operator in OperatorKind::ALL.into_iter().filter(OperatorKind::is_arithmetic) {
        for kind in Kind::NUMERIC {
            table.insert(BinarySignature::new(operator, kind, kind), kind);
        }
    }

    // Relational and (in)equality: every numeric pairing
    for operator in OperatorKind::ALL.into_iter().filter(OperatorKind::is_comparison) {
        for left in Kind::NUMERIC {
            for right in Kind::NUMERIC {
                table.insert(BinarySignature::new(operator, left, right), Kind::Bool);
            }
        }
    }

    table.insert(
        BinarySignature::new(OperatorKind::Equal, Kind::String, Kind::String),
        Kind::Bool,
    );

    table
});

/// Result kind of a binary operation, or `None` when unsupported
pub fn binary_op_type(operator: OperatorKind, left: Kind, right: Kind) -> Option<Kind> {
    BINARY_TYPES
        .get(&BinarySignature::new(operator, left, right))
        .copied()
}

/// Every entry of the table, in no particular order
pub fn binary_signatures() -> impl Iterator<Item = (BinarySignature, Kind)> {
    BINARY_TYPES.iter().map(|(sig, kind)| (*sig, *kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OperatorKind::Addition, Kind::Int, Kind::Int, Some(Kind::Int))]
    #[case(OperatorKind::Division, Kind::UInt, Kind::UInt, Some(Kind::UInt))]
    #[case(OperatorKind::Multiplication, Kind::Float, Kind::Float, Some(Kind::Float))]
    #[case(OperatorKind::Addition, Kind::Int, Kind::Float, None)]
    #[case(OperatorKind::Addition, Kind::String, Kind::String, None)]
    #[case(OperatorKind::Subtraction, Kind::Duration, Kind::Duration, None)]
    #[case(OperatorKind::LessThan, Kind::UInt, Kind::Float, Some(Kind::Bool))]
    #[case(OperatorKind::Equal, Kind::String, Kind::String, Some(Kind::Bool))]
    #[case(OperatorKind::NotEqual, Kind::String, Kind::String, None)]
    #[case(OperatorKind::Equal, Kind::Bool, Kind::Bool, None)]
    #[case(OperatorKind::StartsWith, Kind::String, Kind::String, None)]
    fn test_lookup(
        #[case] operator: OperatorKind,
        #[case] left: Kind,
        #[case] right: Kind,
        #[case] expected: Option<Kind>,
    ) {
        assert_eq!(binary_op_type(operator, left, right), expected);
    }

    #[test]
    fn test_table_size() {
        // 4 arithmetic * 3 kinds + 6 comparisons * 9 pairs + string equality
        assert_eq!(binary_signatures().count(), 12 + 54 + 1);
    }
}
