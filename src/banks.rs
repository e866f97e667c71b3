use crate::models::{BankCategory, BankProfile, BankProfileRow};
use std::path::Path;

// Illustrative comparison dataset. In the real site this comes from the
// content layer; the bundled copy keeps the CLI usable without input files.
pub fn bundled_profiles() -> Vec<BankProfile> {
    let rows = vec![
        row("n26", "N26", "DE", BankCategory::Neobank, "Free",
            "no-monthly-fee;physical-card;german-iban", Some(1),
            Some("https://go.example.com/n26")),
        row("revolut", "Revolut", "LT", BankCategory::Neobank, "Free plan, paid tiers from 3,99 €",
            "no-monthly-fee;multi-currency;virtual-card", Some(2),
            Some("https://go.example.com/revolut")),
        row("wise", "Wise", "BE", BankCategory::MultiCurrency, "Free account, conversion fees apply",
            "multi-currency;non-resident-friendly", Some(3),
            Some("https://go.example.com/wise")),
        row("bunq", "bunq", "NL", BankCategory::Neobank, "3,99 € / month",
            "physical-card;instant-notifications", Some(4), None),
        row("vivid", "Vivid Money", "DE", BankCategory::Fintech, "Free",
            "no-monthly-fee;cashback", None,
            Some("https://go.example.com/vivid")),
        row("monese", "Monese", "GB", BankCategory::Fintech, "Free plan, Classic 5,95 €",
            "non-resident-friendly;instant-opening", None, None),
        row("openbank", "Openbank", "ES", BankCategory::Traditional, "Gratis",
            "no-monthly-fee;spanish-iban", Some(5),
            Some("https://go.example.com/openbank")),
        row("ing-es", "ING España", "ES", BankCategory::Traditional, "Free with conditions",
            "spanish-iban;physical-card", None, None),
        row("bbva", "BBVA", "ES", BankCategory::Traditional, "Free for online customers",
            "spanish-iban;branch-network", None, None),
        row("santander", "Banco Santander", "ES", BankCategory::Traditional, "From 0 € with payroll",
            "spanish-iban;branch-network", None, None),
        row("starling", "Starling Bank", "GB", BankCategory::Neobank, "Free",
            "no-monthly-fee;uk-account", None, None),
        row("paysera", "Paysera", "LT", BankCategory::Fintech, "Free, limits apply",
            "multi-currency;non-resident-friendly", None, None),
    ];
    rows.into_iter().map(BankProfile::from).collect()
}

#[allow(clippy::too_many_arguments)]
fn row(
    slug: &str,
    name: &str,
    country: &str,
    category: BankCategory,
    monthly_fee: &str,
    tags: &str,
    priority: Option<u32>,
    affiliate_link: Option<&str>,
) -> BankProfileRow {
    BankProfileRow {
        slug: slug.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        category,
        monthly_fee: monthly_fee.to_string(),
        tags: tags.to_string(),
        priority,
        affiliate_link: affiliate_link.map(str::to_string),
    }
}

pub fn load_profiles(path: &Path) -> Result<Vec<BankProfile>, String> {
    let mut reader = csv::Reader::from_path(path).map_err(|err| err.to_string())?;
    let mut profiles = Vec::new();
    for result in reader.deserialize() {
        let row: BankProfileRow = result.map_err(|err| err.to_string())?;
        profiles.push(BankProfile::from(row));
    }
    Ok(profiles)
}

pub fn write_profiles(path: &Path, profiles: &[BankProfile]) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| err.to_string())?;
    for profile in profiles {
        let row = BankProfileRow {
            slug: profile.slug.clone(),
            name: profile.name.clone(),
            country: profile.country.clone(),
            category: profile.category,
            monthly_fee: profile.monthly_fee.clone(),
            tags: profile.tags.join(";"),
            priority: profile.priority,
            affiliate_link: profile.affiliate_link.clone(),
        };
        writer.serialize(row).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_slugs_are_unique() {
        let profiles = bundled_profiles();
        for (idx, profile) in profiles.iter().enumerate() {
            assert!(profiles[idx + 1..]
                .iter()
                .all(|other| other.slug != profile.slug));
        }
    }

    #[test]
    fn bundled_countries_are_known() {
        for profile in bundled_profiles() {
            assert!(
                crate::reference::lookup_country(&profile.country).is_some(),
                "unknown country {} for {}",
                profile.country,
                profile.slug
            );
        }
    }

    #[test]
    fn bundled_dataset_has_ranking_signals() {
        let profiles = bundled_profiles();
        assert!(profiles.iter().any(|p| p.priority.is_some()));
        assert!(profiles.iter().any(|p| p.priority.is_none()));
        assert!(profiles.iter().any(|p| p.has_affiliate_link()));
        assert!(profiles.iter().any(|p| !p.has_affiliate_link()));
    }

    #[test]
    fn csv_round_trip() {
        let dir = std::env::temp_dir().join("bankcompare-test-csv");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("banks.csv");

        let profiles = bundled_profiles();
        write_profiles(&path, &profiles).unwrap();
        let loaded = load_profiles(&path).unwrap();
        assert_eq!(profiles, loaded);

        std::fs::remove_file(&path).ok();
    }
}
