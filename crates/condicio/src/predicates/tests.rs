#![expect(clippy::expect_used, reason = "Tests use expect for brevity")]

use pretty_assertions::assert_eq;

use condicio_value::FunctionValue;

use super::*;
use crate::FailureKind;

fn n(value: i32) -> Value {
    Value::from(value)
}

fn failure_of<T: std::fmt::Debug>(result: Result<T, Failure>) -> (FailureKind, String) {
    let failure = result.expect_err("expected a failure");
    (failure.kind(), failure.message().to_owned())
}

// References

#[test]
fn test_null_and_undefined_are_distinct() {
    assert!(is_null(&Value::Null));
    assert!(!is_null(&Value::Undefined));
    assert!(!is_null(&n(0)));

    assert!(is_undefined(&Value::Undefined));
    assert!(!is_undefined(&Value::Null));
    assert!(!is_undefined(&Value::from("")));
}

// Bounds

#[test]
fn test_element_index_bounds() {
    assert_eq!(is_element_index_invalid(&n(0), &n(5)), Ok(false));
    assert_eq!(is_element_index_invalid(&n(4), &n(5)), Ok(false));
    assert_eq!(is_element_index_invalid(&n(5), &n(5)), Ok(true));
    assert_eq!(is_element_index_invalid(&n(-1), &n(5)), Ok(true));
    assert_eq!(is_element_index_invalid(&n(0), &n(0)), Ok(true));
}

#[test]
fn test_position_index_bounds() {
    assert_eq!(is_position_index_invalid(&n(0), &n(0)), Ok(false));
    assert_eq!(is_position_index_invalid(&n(5), &n(5)), Ok(false));
    assert_eq!(is_position_index_invalid(&n(6), &n(5)), Ok(true));
    assert_eq!(is_position_index_invalid(&n(-1), &n(5)), Ok(true));
}

#[test]
fn test_position_range_bounds() {
    assert_eq!(are_position_indexes_invalid(&n(0), &n(5), &n(5)), Ok(false));
    assert_eq!(are_position_indexes_invalid(&n(2), &n(2), &n(5)), Ok(false));
    assert_eq!(are_position_indexes_invalid(&n(3), &n(2), &n(5)), Ok(true));
    assert_eq!(are_position_indexes_invalid(&n(-1), &n(2), &n(5)), Ok(true));
    assert_eq!(are_position_indexes_invalid(&n(0), &n(6), &n(5)), Ok(true));
}

#[test]
fn test_fractional_and_nan_indexes_compare_numerically() {
    assert_eq!(
        is_element_index_invalid(&Value::from(4.5), &n(5)),
        Ok(false)
    );
    assert_eq!(
        is_element_index_invalid(&Value::from(f64::NAN), &n(5)),
        Ok(false)
    );
    assert_eq!(
        is_position_index_invalid(&Value::from(f64::INFINITY), &n(5)),
        Ok(true)
    );
}

#[test]
fn test_non_number_index_is_invalid_type() {
    assert_eq!(
        failure_of(is_element_index_invalid(&Value::from("0"), &n(5))),
        (FailureKind::InvalidType, "Index must be a number".to_owned())
    );
    assert_eq!(
        failure_of(is_position_index_invalid(&Value::Null, &n(5))),
        (FailureKind::InvalidType, "Index must be a number".to_owned())
    );
}

#[test]
fn test_non_number_range_endpoints_are_invalid_type() {
    assert_eq!(
        failure_of(are_position_indexes_invalid(&Value::from(true), &n(1), &n(5))),
        (
            FailureKind::InvalidType,
            "Starting index must be a number".to_owned()
        )
    );
    assert_eq!(
        failure_of(are_position_indexes_invalid(&n(0), &Value::Undefined, &n(5))),
        (
            FailureKind::InvalidType,
            "Ending index must be a number".to_owned()
        )
    );
}

#[test]
fn test_index_is_validated_before_size() {
    assert_eq!(
        failure_of(is_element_index_invalid(&Value::from("a"), &Value::from("b"))),
        (FailureKind::InvalidType, "Index must be a number".to_owned())
    );
}

#[test]
fn test_non_number_size_is_invalid_type() {
    assert_eq!(
        failure_of(is_element_index_invalid(&n(0), &Value::from("5"))),
        (FailureKind::InvalidType, "Size must be a number".to_owned())
    );
    assert_eq!(
        failure_of(are_position_indexes_invalid(&n(0), &n(1), &Value::Null)),
        (FailureKind::InvalidType, "Size must be a number".to_owned())
    );
}

#[test]
fn test_negative_size_is_illegal_argument() {
    assert_eq!(
        failure_of(is_element_index_invalid(&n(0), &n(-3))),
        (
            FailureKind::IllegalArgument,
            "Size must be positive; received -3 instead".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_position_index_invalid(&n(0), &Value::from(-0.5))),
        (
            FailureKind::IllegalArgument,
            "Size must be positive; received -0.5 instead".to_owned()
        )
    );
}

#[test]
fn test_nan_size_is_illegal_argument() {
    let (kind, _) = failure_of(is_element_index_invalid(&n(0), &Value::from(f64::NAN)));
    assert_eq!(kind, FailureKind::IllegalArgument);
}

// Properties

fn animal() -> ObjectValue {
    ObjectValue::new()
        .with_property("legs", 4)
        .with_prototype(ObjectValue::new().with_property("alive", true))
}

#[test]
fn test_direct_property_ignores_prototype_chain() {
    let object = Value::object(animal());
    assert_eq!(
        is_object_direct_property(&object, &Value::from("legs")),
        Ok(true)
    );
    assert_eq!(
        is_object_direct_property(&object, &Value::from("alive")),
        Ok(false)
    );
    assert_eq!(
        is_object_direct_property(&object, &Value::from("wings")),
        Ok(false)
    );
}

#[test]
fn test_property_follows_prototype_chain() {
    let object = Value::object(animal());
    assert_eq!(is_object_property(&object, &Value::from("legs")), Ok(true));
    assert_eq!(is_object_property(&object, &Value::from("alive")), Ok(true));
    assert_eq!(is_object_property(&object, &Value::from("wings")), Ok(false));
}

#[test]
fn test_property_object_validation_order() {
    let name = Value::from("legs");
    assert_eq!(
        failure_of(is_object_property(&Value::Null, &Value::Null)),
        (
            FailureKind::NullReference,
            "Object parameter cannot be null".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_object_direct_property(&Value::Undefined, &n(1))),
        (
            FailureKind::UndefinedReference,
            "Object parameter cannot be undefined".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_object_property(&Value::array(vec![]), &name)),
        (
            FailureKind::InvalidType,
            "Object parameter must actually be an object".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_object_property(&Value::from("str"), &n(1))),
        (
            FailureKind::InvalidType,
            "Object parameter must actually be an object".to_owned()
        )
    );
}

#[test]
fn test_property_name_must_be_a_string() {
    let object = Value::object(animal());
    assert_eq!(
        failure_of(is_object_direct_property(&object, &n(0))),
        (
            FailureKind::InvalidType,
            "Property parameter must be a string".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_object_property(&object, &Value::Undefined)),
        (
            FailureKind::InvalidType,
            "Property parameter must be a string".to_owned()
        )
    );
}

// Types

#[test]
fn test_type_predicates() {
    let samples = [
        Value::Undefined,
        Value::Null,
        Value::from(false),
        Value::from(f64::NAN),
        Value::from("s"),
        Value::array(vec![]),
        Value::object(ObjectValue::new()),
        Value::function(FunctionValue::new("F")),
    ];
    let table: [(fn(&Value) -> bool, usize); 6] = [
        (is_boolean, 2),
        (is_number, 3),
        (is_string, 4),
        (is_array, 5),
        (is_object, 6),
        (is_function, 7),
    ];

    for (predicate, accepted) in table {
        for (index, sample) in samples.iter().enumerate() {
            assert_eq!(predicate(sample), index == accepted, "{sample:?}");
        }
    }
}

#[test]
fn test_is_type_follows_constructor_identity() {
    let animal = FunctionValue::new("Animal");
    let dog = FunctionValue::extending("Dog", &animal, ObjectValue::new());
    let rex = Value::object(dog.construct(ObjectValue::new().with_property("name", "rex")));

    let animal = Value::function(animal);
    let dog = Value::function(dog);
    let other = Value::function(FunctionValue::new("Animal"));

    assert_eq!(is_type(&rex, &dog), Ok(true));
    assert_eq!(is_type(&rex, &animal), Ok(true));
    assert_eq!(is_type(&rex, &other), Ok(false));
    assert_eq!(is_type(&Value::object(ObjectValue::new()), &dog), Ok(false));
}

#[test]
fn test_is_type_primitives_are_never_instances() {
    let ctor = Value::function(FunctionValue::new("String"));
    assert_eq!(is_type(&Value::from("text"), &ctor), Ok(false));
    assert_eq!(is_type(&n(1), &ctor), Ok(false));
    assert_eq!(is_type(&Value::array(vec![]), &ctor), Ok(false));
}

#[test]
fn test_is_type_validation_order() {
    let ctor = Value::function(FunctionValue::new("F"));
    let object = Value::object(ObjectValue::new());

    assert_eq!(
        failure_of(is_type(&Value::Null, &Value::Null)),
        (
            FailureKind::NullReference,
            "Object parameter cannot be null".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_type(&Value::Undefined, &ctor)),
        (
            FailureKind::UndefinedReference,
            "Object parameter cannot be undefined".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_type(&object, &Value::Null)),
        (
            FailureKind::NullReference,
            "Type parameter cannot be null".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_type(&object, &Value::Undefined)),
        (
            FailureKind::UndefinedReference,
            "Type parameter cannot be undefined".to_owned()
        )
    );
    assert_eq!(
        failure_of(is_type(&object, &object)),
        (
            FailureKind::InvalidType,
            "Type parameter must be a constructor function".to_owned()
        )
    );
}
