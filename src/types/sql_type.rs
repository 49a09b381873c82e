//! Declared SQL types and the literal family each one renders through.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a bound value of a given declared type is turned into a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralFamily {
    /// Single-quoted with embedded quotes doubled (text, date and time types)
    Quoted,
    /// Rendered as `1` or `0`
    Boolean,
    /// Invariant decimal text
    Numeric,
    /// Declared table variable plus one insert per row
    Tabular,
    /// The value's plain text form
    Plain,
}

impl fmt::Display for LiteralFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiteralFamily::Quoted => "quoted",
            LiteralFamily::Boolean => "boolean",
            LiteralFamily::Numeric => "numeric",
            LiteralFamily::Tabular => "tabular",
            LiteralFamily::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// Declared type of a command parameter, in the SQL Server type vocabulary.
///
/// Type names are matched case-insensitively. Names that are not recognized
/// are kept verbatim in [`SqlType::Other`] and render through the plain family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    BigInt,
    Binary,
    Bit,
    Char,
    Date,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Decimal,
    Float,
    Image,
    Int,
    Money,
    NChar,
    NText,
    NVarChar,
    Real,
    SmallDateTime,
    SmallInt,
    SmallMoney,
    Structured,
    Text,
    Time,
    Timestamp,
    TinyInt,
    UniqueIdentifier,
    VarBinary,
    VarChar,
    Variant,
    Xml,
    Other(String),
}

impl SqlType {
    /// Every recognized type, in alphabetical order of their SQL names.
    pub const KNOWN: [SqlType; 30] = [
        SqlType::BigInt,
        SqlType::Binary,
        SqlType::Bit,
        SqlType::Char,
        SqlType::Date,
        SqlType::DateTime,
        SqlType::DateTime2,
        SqlType::DateTimeOffset,
        SqlType::Decimal,
        SqlType::Float,
        SqlType::Image,
        SqlType::Int,
        SqlType::Money,
        SqlType::NChar,
        SqlType::NText,
        SqlType::NVarChar,
        SqlType::Real,
        SqlType::SmallDateTime,
        SqlType::SmallInt,
        SqlType::SmallMoney,
        SqlType::Variant,
        SqlType::Structured,
        SqlType::Text,
        SqlType::Time,
        SqlType::Timestamp,
        SqlType::TinyInt,
        SqlType::UniqueIdentifier,
        SqlType::VarBinary,
        SqlType::VarChar,
        SqlType::Xml,
    ];

    /// Resolve a type name. Never fails: unknown names become [`SqlType::Other`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bigint" => SqlType::BigInt,
            "binary" => SqlType::Binary,
            "bit" | "bool" | "boolean" => SqlType::Bit,
            "char" => SqlType::Char,
            "date" => SqlType::Date,
            "datetime" => SqlType::DateTime,
            "datetime2" => SqlType::DateTime2,
            "datetimeoffset" => SqlType::DateTimeOffset,
            "decimal" | "numeric" => SqlType::Decimal,
            "float" => SqlType::Float,
            "image" => SqlType::Image,
            "int" | "integer" => SqlType::Int,
            "money" => SqlType::Money,
            "nchar" => SqlType::NChar,
            "ntext" => SqlType::NText,
            "nvarchar" => SqlType::NVarChar,
            "real" => SqlType::Real,
            "smalldatetime" => SqlType::SmallDateTime,
            "smallint" => SqlType::SmallInt,
            "smallmoney" => SqlType::SmallMoney,
            "structured" | "table" => SqlType::Structured,
            "text" => SqlType::Text,
            "time" => SqlType::Time,
            "timestamp" | "rowversion" => SqlType::Timestamp,
            "tinyint" => SqlType::TinyInt,
            "uniqueidentifier" => SqlType::UniqueIdentifier,
            "varbinary" => SqlType::VarBinary,
            "varchar" => SqlType::VarChar,
            "sql_variant" | "variant" => SqlType::Variant,
            "xml" => SqlType::Xml,
            _ => SqlType::Other(name.trim().to_string()),
        }
    }

    /// The lower-case SQL name used in `declare` statements.
    pub fn name(&self) -> &str {
        match self {
            SqlType::BigInt => "bigint",
            SqlType::Binary => "binary",
            SqlType::Bit => "bit",
            SqlType::Char => "char",
            SqlType::Date => "date",
            SqlType::DateTime => "datetime",
            SqlType::DateTime2 => "datetime2",
            SqlType::DateTimeOffset => "datetimeoffset",
            SqlType::Decimal => "decimal",
            SqlType::Float => "float",
            SqlType::Image => "image",
            SqlType::Int => "int",
            SqlType::Money => "money",
            SqlType::NChar => "nchar",
            SqlType::NText => "ntext",
            SqlType::NVarChar => "nvarchar",
            SqlType::Real => "real",
            SqlType::SmallDateTime => "smalldatetime",
            SqlType::SmallInt => "smallint",
            SqlType::SmallMoney => "smallmoney",
            SqlType::Structured => "structured",
            SqlType::Text => "text",
            SqlType::Time => "time",
            SqlType::Timestamp => "timestamp",
            SqlType::TinyInt => "tinyint",
            SqlType::UniqueIdentifier => "uniqueidentifier",
            SqlType::VarBinary => "varbinary",
            SqlType::VarChar => "varchar",
            SqlType::Variant => "sql_variant",
            SqlType::Xml => "xml",
            SqlType::Other(name) => name,
        }
    }

    pub fn family(&self) -> LiteralFamily {
        match self {
            SqlType::Char
            | SqlType::NChar
            | SqlType::NText
            | SqlType::NVarChar
            | SqlType::Text
            | SqlType::VarChar
            | SqlType::Xml
            | SqlType::Date
            | SqlType::Time
            | SqlType::DateTime
            | SqlType::DateTime2
            | SqlType::SmallDateTime
            | SqlType::DateTimeOffset
            | SqlType::UniqueIdentifier => LiteralFamily::Quoted,
            SqlType::Bit => LiteralFamily::Boolean,
            SqlType::Decimal
            | SqlType::Float
            | SqlType::Real
            | SqlType::Money
            | SqlType::SmallMoney => LiteralFamily::Numeric,
            SqlType::Structured => LiteralFamily::Tabular,
            SqlType::BigInt
            | SqlType::Int
            | SqlType::SmallInt
            | SqlType::TinyInt
            | SqlType::Binary
            | SqlType::VarBinary
            | SqlType::Image
            | SqlType::Timestamp
            | SqlType::Variant
            | SqlType::Other(_) => LiteralFamily::Plain,
        }
    }

    /// Types whose declaration takes a length, e.g. `varchar(50)`.
    pub fn takes_length(&self) -> bool {
        matches!(
            self,
            SqlType::Char
                | SqlType::NChar
                | SqlType::VarChar
                | SqlType::NVarChar
                | SqlType::Binary
                | SqlType::VarBinary
        )
    }

    /// Types whose date/time part carries a point-in-time (used for table cells).
    pub fn is_timestamp(&self) -> bool {
        matches!(
            self,
            SqlType::Date | SqlType::DateTime | SqlType::DateTime2 | SqlType::SmallDateTime
        )
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            SqlType::BigInt | SqlType::Int | SqlType::SmallInt | SqlType::TinyInt
        )
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            SqlType::Binary | SqlType::VarBinary | SqlType::Image | SqlType::Timestamp
        )
    }

    /// Float-valued numeric types. The remaining numeric types are exact decimals.
    pub fn is_approximate(&self) -> bool {
        matches!(self, SqlType::Float | SqlType::Real)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SqlType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SqlType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(SqlType::parse(&name))
    }
}
