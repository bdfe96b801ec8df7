use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $text:literal,)* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum! {
    /// Reserved words of the language.
    pub enum Keyword {
        Let => "let",
        Var => "var",
        Const => "const",
        Fn => "fn",
        Return => "return",
        If => "if",
        Else => "else",
        While => "while",
        For => "for",
        In => "in",
        Loop => "loop",
        Break => "break",
        Continue => "continue",
        Match => "match",
        Struct => "struct",
        Enum => "enum",
        Type => "type",
        Import => "import",
        Export => "export",
        Pub => "pub",
        As => "as",
        And => "and",
        Or => "or",
        Not => "not",
    }
}

text_enum! {
    /// Named numeric types, usable both as type names and literal suffixes.
    pub enum NumberType {
        I8 => "i8",
        I16 => "i16",
        I32 => "i32",
        I64 => "i64",
        I128 => "i128",
        Isize => "isize",
        U8 => "u8",
        U16 => "u16",
        U32 => "u32",
        U64 => "u64",
        U128 => "u128",
        Usize => "usize",
        F16 => "f16",
        F32 => "f32",
        F64 => "f64",
        F128 => "f128",
        BigInt => "bigint",
    }
}

text_enum! {
    /// Non-numeric built-in type names.
    pub enum PrimitiveType {
        Bool => "bool",
        Char => "char",
        Str => "str",
        Void => "void",
        Any => "any",
    }
}

/// A built-in type name recognized at the word level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum BuiltinType {
    Number(NumberType),
    Primitive(PrimitiveType),
}

impl BuiltinType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number(ty) => ty.as_str(),
            Self::Primitive(ty) => ty.as_str(),
        }
    }

    pub fn lookup(text: &str) -> Option<Self> {
        BUILTIN_TYPES.get(text).copied()
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN_TYPES.keys().copied()
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Keyword {
    pub fn lookup(text: &str) -> Option<Self> {
        KEYWORDS.get(text).copied()
    }
}

impl NumberType {
    /// Resolve a literal suffix such as `u`, `f`, or `i32`.
    ///
    /// One-character suffixes are shorthands; longer ones must name a
    /// numeric type exactly.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "n" => Some(Self::BigInt),
            "i" => Some(Self::I64),
            "u" => Some(Self::U64),
            "f" => Some(Self::F64),
            _ if suffix.len() > 1 => match BuiltinType::lookup(suffix)? {
                BuiltinType::Number(ty) => Some(ty),
                BuiltinType::Primitive(_) => None,
            },
            _ => None,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64 | Self::F128)
    }

    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::U128 | Self::Usize
        )
    }

    /// Signed integer types, including `bigint`.
    pub fn is_signed_integer(self) -> bool {
        !self.is_float() && !self.is_unsigned()
    }
}

static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    Keyword::ALL
        .iter()
        .map(|&keyword| (keyword.as_str(), keyword))
        .collect()
});

static BUILTIN_TYPES: LazyLock<HashMap<&'static str, BuiltinType>> = LazyLock::new(|| {
    let numbers = NumberType::ALL
        .iter()
        .map(|&ty| (ty.as_str(), BuiltinType::Number(ty)));
    let primitives = PrimitiveType::ALL
        .iter()
        .map(|&ty| (ty.as_str(), BuiltinType::Primitive(ty)));
    numbers.chain(primitives).collect()
});

/// Force both tables so the first scan does not pay for building them.
pub fn init_tables() {
    LazyLock::force(&KEYWORDS);
    LazyLock::force(&BUILTIN_TYPES);
}

#[cfg(test)]
mod tests;
