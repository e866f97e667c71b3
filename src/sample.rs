use crate::classify::group_display;
use crate::reference::lookup_country;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic placeholder IBAN for a country: numeric BBAN, real mod-97
/// check digits, grouped for display. Same seed, same output. Intended for
/// UI hint text, not for anything resembling a real account.
pub fn sample_iban(country_code: &str, seed: u64) -> Result<String, String> {
    let profile = lookup_country(country_code)
        .ok_or_else(|| format!("unknown country code: {country_code}"))?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bban = random_digits(&mut rng, profile.expected_length - 4);
    let check = check_digits(profile.country_code, &bban);
    Ok(group_display(&format!(
        "{}{}{}",
        profile.country_code, check, bban
    )))
}

fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let digit = rng.gen_range(0..10);
        out.push(char::from(b'0' + digit as u8));
    }
    out
}

// ISO 7064: remainder of <bban><country>00, letters expanded to 10..35.
fn check_digits(country: &str, bban: &str) -> String {
    let mut remainder: u32 = 0;
    let combined = format!("{}{}00", bban, country);
    for ch in combined.chars() {
        if ch.is_ascii_digit() {
            let d = ch.to_digit(10).unwrap_or(0);
            remainder = (remainder * 10 + d) % 97;
        } else {
            let val = ch.to_ascii_uppercase() as u32 - 'A' as u32 + 10;
            remainder = (remainder * 100 + val) % 97;
        }
    }
    format!("{:02}", 98 - remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, verify_check_digits};
    use crate::reference::all_countries;

    #[test]
    fn samples_classify_as_valid_for_every_country() {
        for profile in all_countries() {
            let sample = sample_iban(profile.country_code, 7).unwrap();
            let result = classify(&sample);
            assert!(result.overall_valid, "invalid sample for {}", profile.country_code);
            assert_eq!(result.country_code, profile.country_code);
            assert_eq!(
                verify_check_digits(&sample),
                Some(true),
                "bad check digits for {}",
                profile.country_code
            );
        }
    }

    #[test]
    fn same_seed_same_sample() {
        assert_eq!(sample_iban("ES", 42).unwrap(), sample_iban("ES", 42).unwrap());
        assert_ne!(sample_iban("ES", 42).unwrap(), sample_iban("ES", 43).unwrap());
    }

    #[test]
    fn unknown_country_is_an_error() {
        assert!(sample_iban("XX", 1).is_err());
        assert!(sample_iban("", 1).is_err());
    }

    #[test]
    fn known_check_digits() {
        // ES + BBAN 21000418450200051332 is the registry's own example.
        assert_eq!(check_digits("ES", "21000418450200051332"), "91");
        assert_eq!(check_digits("DE", "370400440532013000"), "89");
    }
}
