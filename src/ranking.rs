use crate::models::BankProfile;

// Entries without an editorial priority sort after every pinned entry.
pub const UNRANKED_PRIORITY: u32 = 999;

// Fee descriptions the heuristic cannot read sort as worst-case.
pub const UNPARSEABLE_FEE: f64 = 999.0;

/// Display order for comparison grids: editorial priority ascending, then
/// profiles carrying an affiliate link before those without. Ties keep
/// their input order, so equal-priority entries never reshuffle between
/// renders.
pub fn rank(profiles: &[BankProfile]) -> Vec<BankProfile> {
    let mut ordered = profiles.to_vec();
    ordered.sort_by_key(|profile| {
        (
            profile.priority.unwrap_or(UNRANKED_PRIORITY),
            affiliate_rank(profile),
        )
    });
    ordered
}

/// Alternative policy for fee-focused views: cheapest parsed monthly fee
/// first, affiliate presence as the tie-break, same stability rule. A
/// distinct operation rather than a parameter so call sites state their
/// intent.
pub fn rank_by_fee_then_affiliate(profiles: &[BankProfile]) -> Vec<BankProfile> {
    let mut ordered = profiles.to_vec();
    ordered.sort_by(|a, b| {
        parse_monthly_fee(&a.monthly_fee)
            .total_cmp(&parse_monthly_fee(&b.monthly_fee))
            .then_with(|| affiliate_rank(a).cmp(&affiliate_rank(b)))
    });
    ordered
}

fn affiliate_rank(profile: &BankProfile) -> u8 {
    if profile.has_affiliate_link() {
        0
    } else {
        1
    }
}

/// Heuristic read of a free-text fee description. Matches "free"-style
/// wording to zero, otherwise takes the first numeric token (comma or dot
/// decimals), otherwise the `UNPARSEABLE_FEE` sentinel. Lossy on purpose;
/// isolated here so a structured fee field can replace it without touching
/// the ranking policies.
pub fn parse_monthly_fee(description: &str) -> f64 {
    let lower = description.to_lowercase();
    if lower.contains("free") || lower.contains("gratis") || lower.contains("kostenlos") {
        return 0.0;
    }

    let mut token = String::new();
    for ch in lower.chars() {
        if ch.is_ascii_digit() {
            token.push(ch);
        } else if (ch == '.' || ch == ',') && !token.is_empty() {
            token.push('.');
        } else if !token.is_empty() {
            break;
        }
    }
    token
        .trim_end_matches('.')
        .parse::<f64>()
        .unwrap_or(UNPARSEABLE_FEE)
}
