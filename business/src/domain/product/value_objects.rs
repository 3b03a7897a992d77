use serde::{Deserialize, Serialize};

/// Storage location a product is kept in. Closed vocabulary used as a filter dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageUnit {
    #[default]
    Shelves,
    Fridges,
    Warehouse,
    Snacks,
}

impl StorageUnit {
    pub const ALL: [StorageUnit; 4] = [
        StorageUnit::Shelves,
        StorageUnit::Fridges,
        StorageUnit::Warehouse,
        StorageUnit::Snacks,
    ];

    /// Canonical code, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageUnit::Shelves => "shelves",
            StorageUnit::Fridges => "fridges",
            StorageUnit::Warehouse => "warehouse",
            StorageUnit::Snacks => "snacks",
        }
    }

    /// Display label shown on the shop floor.
    pub fn label(&self) -> &'static str {
        match self {
            StorageUnit::Shelves => "رفوف",
            StorageUnit::Fridges => "ثلاجات",
            StorageUnit::Warehouse => "مستودع",
            StorageUnit::Snacks => "شبس",
        }
    }
}

impl std::fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StorageUnit {
    type Err = String;

    /// Accepts the canonical code or the display label. Surrounding whitespace
    /// is ignored, case is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StorageUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == trimmed || unit.label() == trimmed)
            .ok_or_else(|| format!("Invalid storage unit: {}", s))
    }
}
