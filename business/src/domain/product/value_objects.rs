use serde::{Deserialize, Serialize};

/// Numeric catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unit a product can be bought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "szt.")]
    Piece,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "ml")]
    Milliliter,
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Piece,
        Unit::Kilogram,
        Unit::Gram,
        Unit::Liter,
        Unit::Milliliter,
    ];
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Piece => write!(f, "szt."),
            Unit::Kilogram => write!(f, "kg"),
            Unit::Gram => write!(f, "g"),
            Unit::Liter => write!(f, "l"),
            Unit::Milliliter => write!(f, "ml"),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "szt." => Ok(Unit::Piece),
            "kg" => Ok(Unit::Kilogram),
            "g" => Ok(Unit::Gram),
            "l" => Ok(Unit::Liter),
            "ml" => Ok(Unit::Milliliter),
            _ => Err(format!("Invalid unit: {}", s)),
        }
    }
}
