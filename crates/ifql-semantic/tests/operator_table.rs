//! Operator table tests
//!
//! Every documented signature resolves to its documented kind, and every
//! other (operator, left, right) triple is unsupported.

use ifql_ast::OperatorKind;
use ifql_semantic::{BinarySignature, Kind, binary_op_type, binary_signatures};
use rstest::rstest;
use std::collections::HashMap;

const NUMERIC: [Kind; 3] = [Kind::Int, Kind::UInt, Kind::Float];

fn documented() -> HashMap<BinarySignature, Kind> {
    let mut expected = HashMap::new();

    for op in [
        OperatorKind::Addition,
        OperatorKind::Subtraction,
        OperatorKind::Multiplication,
        OperatorKind::Division,
    ] {
        expected.insert(BinarySignature::new(op, Kind::Int, Kind::Int), Kind::Int);
        expected.insert(BinarySignature::new(op, Kind::UInt, Kind::UInt), Kind::UInt);
        expected.insert(BinarySignature::new(op, Kind::Float, Kind::Float), Kind::Float);
    }

    for op in [
        OperatorKind::LessThanEqual,
        OperatorKind::LessThan,
        OperatorKind::GreaterThanEqual,
        OperatorKind::GreaterThan,
        OperatorKind::Equal,
        OperatorKind::NotEqual,
    ] {
        for left in NUMERIC {
            for right in NUMERIC {
                expected.insert(BinarySignature::new(op, left, right), Kind::Bool);
            }
        }
    }

    expected.insert(
        BinarySignature::new(OperatorKind::Equal, Kind::String, Kind::String),
        Kind::Bool,
    );
    expected
}

#[test]
fn test_table_matches_documented_signatures() {
    let expected = documented();
    let actual: HashMap<_, _> = binary_signatures().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_every_other_triple_is_unsupported() {
    let expected = documented();

    for op in OperatorKind::ALL {
        for left in Kind::ALL {
            for right in Kind::ALL {
                let sig = BinarySignature::new(op, left, right);
                assert_eq!(
                    binary_op_type(op, left, right),
                    expected.get(&sig).copied(),
                    "{op} {left} {right}"
                );
            }
        }
    }
}

#[rstest]
#[case(OperatorKind::Addition, Kind::Int, Kind::Float)]
#[case(OperatorKind::Addition, Kind::Time, Kind::Duration)]
#[case(OperatorKind::Equal, Kind::String, Kind::Int)]
#[case(OperatorKind::Equal, Kind::Bool, Kind::Bool)]
#[case(OperatorKind::NotEqual, Kind::String, Kind::String)]
#[case(OperatorKind::In, Kind::String, Kind::Array)]
fn test_no_implicit_coercion(#[case] op: OperatorKind, #[case] left: Kind, #[case] right: Kind) {
    assert_eq!(binary_op_type(op, left, right), None);
}
