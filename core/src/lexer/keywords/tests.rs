use super::*;

#[test]
fn keyword_table_round_trips_every_variant() {
    for &keyword in Keyword::ALL {
        assert_eq!(Keyword::lookup(keyword.as_str()), Some(keyword));
    }
    assert_eq!(Keyword::lookup("function"), None);
}

#[test]
fn builtin_types_cover_numbers_and_primitives() {
    assert_eq!(
        BuiltinType::lookup("u32"),
        Some(BuiltinType::Number(NumberType::U32))
    );
    assert_eq!(
        BuiltinType::lookup("str"),
        Some(BuiltinType::Primitive(PrimitiveType::Str))
    );
    assert_eq!(BuiltinType::lookup("string"), None);
    assert_eq!(
        BuiltinType::names().count(),
        NumberType::ALL.len() + PrimitiveType::ALL.len()
    );
}

#[test]
fn single_character_suffixes_are_shorthands() {
    assert_eq!(NumberType::from_suffix("n"), Some(NumberType::BigInt));
    assert_eq!(NumberType::from_suffix("i"), Some(NumberType::I64));
    assert_eq!(NumberType::from_suffix("u"), Some(NumberType::U64));
    assert_eq!(NumberType::from_suffix("f"), Some(NumberType::F64));
    assert_eq!(NumberType::from_suffix("x"), None);
}

#[test]
fn long_suffixes_must_name_a_numeric_type() {
    assert_eq!(NumberType::from_suffix("f16"), Some(NumberType::F16));
    assert_eq!(NumberType::from_suffix("usize"), Some(NumberType::Usize));
    assert_eq!(NumberType::from_suffix("u7"), None);
    assert_eq!(NumberType::from_suffix("bool"), None);
}

#[test]
fn signedness_classification() {
    assert!(NumberType::BigInt.is_signed_integer());
    assert!(NumberType::I8.is_signed_integer());
    assert!(!NumberType::U8.is_signed_integer());
    assert!(!NumberType::F32.is_signed_integer());
    assert!(NumberType::Usize.is_unsigned());
    assert!(NumberType::F128.is_float());
}
