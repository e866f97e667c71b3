use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BankCategory {
    Neobank,
    Traditional,
    MultiCurrency,
    Fintech,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankProfile {
    pub slug: String,
    pub name: String,
    pub country: String,
    pub category: BankCategory,
    pub monthly_fee: String,
    pub tags: Vec<String>,
    pub priority: Option<u32>,
    pub affiliate_link: Option<String>,
}

impl BankProfile {
    pub fn has_affiliate_link(&self) -> bool {
        self.affiliate_link
            .as_deref()
            .is_some_and(|link| !link.trim().is_empty())
    }
}

// Flat CSV-facing form: tags are semicolon-joined in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankProfileRow {
    pub slug: String,
    pub name: String,
    pub country: String,
    pub category: BankCategory,
    pub monthly_fee: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
}

impl From<BankProfileRow> for BankProfile {
    fn from(row: BankProfileRow) -> Self {
        let tags = row
            .tags
            .split(';')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        BankProfile {
            slug: row.slug,
            name: row.name,
            country: row.country,
            category: row.category,
            monthly_fee: row.monthly_fee,
            tags,
            priority: row.priority,
            affiliate_link: row.affiliate_link,
        }
    }
}
