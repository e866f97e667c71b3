use crate::reference::lookup_country;

/// Classification of a user-typed IBAN candidate. `overall_valid` means
/// "country recognized and declared length matched" — it does not assert
/// check-digit validity; see `verify_check_digits` for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbanClassification {
    pub normalized_iban: String,
    pub country_code: String,
    pub known_country: bool,
    pub length_valid: bool,
    pub sepa_member: bool,
    pub grouped_display: String,
    pub overall_valid: bool,
}

pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn group_display(normalized: &str) -> String {
    let chars: Vec<char> = normalized.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}

// Total for any string input: bad input comes back as flags, never as a
// panic or an error, so render paths can branch on the reason directly.
pub fn classify(raw: &str) -> IbanClassification {
    let normalized = normalize(raw);
    let country_code: String = normalized.chars().take(2).collect();
    let grouped_display = group_display(&normalized);

    match lookup_country(&country_code) {
        Some(profile) => {
            let length_valid = normalized.chars().count() == profile.expected_length;
            IbanClassification {
                normalized_iban: normalized,
                country_code,
                known_country: true,
                length_valid,
                sepa_member: profile.sepa_member,
                grouped_display,
                overall_valid: length_valid,
            }
        }
        None => IbanClassification {
            normalized_iban: normalized,
            country_code,
            known_country: false,
            length_valid: false,
            sepa_member: false,
            grouped_display,
            overall_valid: false,
        },
    }
}

/// ISO 7064 mod-97 check on the normalized input. Advisory: callers must
/// not fold this into `overall_valid`, whose contract is country+length
/// only. Returns `None` when the input is too short or contains characters
/// outside A-Z/0-9 after normalization.
pub fn verify_check_digits(raw: &str) -> Option<bool> {
    let normalized = normalize(raw);
    if normalized.len() < 5 || !normalized.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return None;
    }

    let rearranged = format!("{}{}", &normalized[4..], &normalized[..4]);
    let mut remainder: u32 = 0;
    for ch in rearranged.chars() {
        if ch.is_ascii_digit() {
            let d = ch.to_digit(10)?;
            remainder = (remainder * 10 + d) % 97;
        } else {
            let val = ch as u32 - 'A' as u32 + 10;
            remainder = (remainder * 100 + val) % 97;
        }
    }
    Some(remainder == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_spanish_iban() {
        let result = classify("ES91 2100 0418 4502 0005 1332");
        assert_eq!(result.country_code, "ES");
        assert!(result.known_country);
        assert_eq!(result.normalized_iban.len(), 24);
        assert!(result.length_valid);
        assert!(result.sepa_member);
        assert!(result.overall_valid);
        assert_eq!(result.grouped_display, "ES91 2100 0418 4502 0005 1332");
    }

    #[test]
    fn unknown_country_is_invalid() {
        let result = classify("XX1234");
        assert!(!result.known_country);
        assert!(!result.length_valid);
        assert!(!result.sepa_member);
        assert!(!result.overall_valid);
        assert_eq!(result.country_code, "XX");
    }

    #[test]
    fn wrong_length_known_country() {
        // 22 characters, Spain expects 24
        let result = classify("es91210004184502000513");
        assert!(result.known_country);
        assert_eq!(result.country_code, "ES");
        assert!(!result.length_valid);
        assert!(!result.overall_valid);
        assert!(result.sepa_member);
    }

    #[test]
    fn empty_and_whitespace_inputs() {
        let empty = classify("");
        assert_eq!(empty.country_code, "");
        assert!(!empty.known_country);
        assert!(!empty.overall_valid);
        assert_eq!(empty.grouped_display, "");

        let blank = classify("   \t \n ");
        assert_eq!(blank.normalized_iban, "");
        assert_eq!(blank.grouped_display, "");
    }

    #[test]
    fn single_character_input() {
        let result = classify("E");
        assert_eq!(result.country_code, "E");
        assert!(!result.known_country);
        assert_eq!(result.grouped_display, "E");
    }

    #[test]
    fn punctuation_survives_normalization() {
        // Only whitespace is stripped; stray punctuation fails length checks
        // downstream instead of being silently removed.
        let result = classify("DE89-3704 0044 0532 0130 00");
        assert_eq!(result.normalized_iban, "DE89-370400440532013000");
        assert!(result.known_country);
        assert!(!result.length_valid);
    }

    #[test]
    fn non_latin_input_does_not_panic() {
        let result = classify("Ünîcodé 123");
        assert!(!result.overall_valid);
        assert_eq!(
            result.normalized_iban,
            result.grouped_display.replace(' ', "")
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in ["ES91 2100 0418 4502 0005 1332", "xx 12 34", "", "  a b c  "] {
            let once = classify(input);
            let twice = classify(&once.normalized_iban);
            assert_eq!(once.normalized_iban, twice.normalized_iban);
        }
    }

    #[test]
    fn grouping_round_trips() {
        for input in [
            "ES9121000418450200051332",
            "NO9386011117947",
            "ab",
            "abcde",
            "",
        ] {
            let result = classify(input);
            assert_eq!(
                result.grouped_display.replace(' ', ""),
                result.normalized_iban
            );
        }
    }

    #[test]
    fn grouping_keeps_short_tail() {
        assert_eq!(group_display("NO9386011117947"), "NO93 8601 1117 947");
        assert_eq!(group_display("ABCD"), "ABCD");
        assert_eq!(group_display("ABCDE"), "ABCD E");
    }

    #[test]
    fn classify_is_deterministic() {
        let a = classify("FI21 1234 5600 0007 85");
        let b = classify("FI21 1234 5600 0007 85");
        assert_eq!(a, b);
    }

    #[test]
    fn check_digits_advisory() {
        assert_eq!(verify_check_digits("ES91 2100 0418 4502 0005 1332"), Some(true));
        assert_eq!(verify_check_digits("DE89 3704 0044 0532 0130 00"), Some(true));
        // one digit altered
        assert_eq!(verify_check_digits("ES92 2100 0418 4502 0005 1332"), Some(false));
        // not computable
        assert_eq!(verify_check_digits("ES1"), None);
        assert_eq!(verify_check_digits("DE89-3704"), None);
    }

    #[test]
    fn check_digits_do_not_affect_overall_valid() {
        // Right country and length, wrong checksum: still overall_valid.
        let result = classify("ES00 2100 0418 4502 0005 1332");
        assert!(result.overall_valid);
        assert_eq!(verify_check_digits(&result.normalized_iban), Some(false));
    }
}
