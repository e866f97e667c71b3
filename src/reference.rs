#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryIbanProfile {
    pub country_code: &'static str,
    pub country_name: &'static str,
    pub sepa_member: bool,
    pub expected_length: usize,
    pub example_iban: &'static str,
}

// One row per supported issuing country. SEPA membership is an editorial
// fact, not derived. `example_iban` is display copy (groups of 4); its
// ungrouped length must match `expected_length`.
pub const COUNTRY_PROFILES: &[CountryIbanProfile] = &[
    profile("AT", "Austria", true, 20, "AT61 1904 3002 3457 3201"),
    profile("BE", "Belgium", true, 16, "BE68 5390 0754 7034"),
    profile("BG", "Bulgaria", true, 22, "BG80 BNBG 9661 1020 3456 78"),
    profile("HR", "Croatia", true, 21, "HR12 1001 0051 8630 0016 0"),
    profile("CY", "Cyprus", true, 28, "CY17 0020 0128 0000 0012 0052 7600"),
    profile("CZ", "Czechia", true, 24, "CZ65 0800 0000 1920 0014 5399"),
    profile("DK", "Denmark", true, 18, "DK50 0040 0440 1162 43"),
    profile("EE", "Estonia", true, 20, "EE38 2200 2210 2014 5685"),
    profile("FI", "Finland", true, 18, "FI21 1234 5600 0007 85"),
    profile("FR", "France", true, 27, "FR14 2004 1010 0505 0001 3M02 606"),
    profile("DE", "Germany", true, 22, "DE89 3704 0044 0532 0130 00"),
    profile("GR", "Greece", true, 27, "GR16 0110 1250 0000 0001 2300 695"),
    profile("HU", "Hungary", true, 28, "HU42 1177 3016 1111 1018 0000 0000"),
    profile("IE", "Ireland", true, 22, "IE29 AIBK 9311 5212 3456 78"),
    profile("IT", "Italy", true, 27, "IT60 X054 2811 1010 0000 0123 456"),
    profile("LV", "Latvia", true, 21, "LV80 BANK 0000 4351 9500 1"),
    profile("LT", "Lithuania", true, 20, "LT12 1000 0111 0100 1000"),
    profile("LU", "Luxembourg", true, 20, "LU28 0019 4006 4475 0000"),
    profile("MT", "Malta", true, 31, "MT84 MALT 0110 0001 2345 MTLC AST0 01S"),
    profile("NL", "Netherlands", true, 18, "NL91 ABNA 0417 1643 00"),
    profile("PL", "Poland", true, 28, "PL61 1090 1014 0000 0712 1981 2874"),
    profile("PT", "Portugal", true, 25, "PT50 0002 0123 1234 5678 9015 4"),
    profile("RO", "Romania", true, 24, "RO49 AAAA 1B31 0075 9384 0000"),
    profile("SK", "Slovakia", true, 24, "SK31 1200 0000 1987 4263 7541"),
    profile("SI", "Slovenia", true, 19, "SI56 2633 0001 2039 086"),
    profile("ES", "Spain", true, 24, "ES91 2100 0418 4502 0005 1332"),
    profile("SE", "Sweden", true, 24, "SE45 5000 0000 0583 9825 7466"),
    profile("CH", "Switzerland", true, 21, "CH93 0076 2011 6238 5295 7"),
    profile("GB", "United Kingdom", true, 22, "GB29 NWBK 6016 1331 9268 19"),
    profile("IS", "Iceland", true, 26, "IS14 0159 2600 7654 5510 7303 39"),
    profile("LI", "Liechtenstein", true, 21, "LI21 0881 0000 2324 013A A"),
    profile("NO", "Norway", true, 15, "NO93 8601 1117 947"),
    profile("TR", "Turkey", false, 26, "TR33 0006 1005 1978 6457 8413 26"),
    profile("AE", "United Arab Emirates", false, 23, "AE07 0331 2345 6789 0123 456"),
    profile("SA", "Saudi Arabia", false, 24, "SA03 8000 0000 6080 1016 7519"),
    profile("RS", "Serbia", false, 22, "RS35 2600 0560 1001 6113 79"),
    profile("BR", "Brazil", false, 29, "BR18 0036 0305 0000 1000 9795 493C 1"),
];

const fn profile(
    country_code: &'static str,
    country_name: &'static str,
    sepa_member: bool,
    expected_length: usize,
    example_iban: &'static str,
) -> CountryIbanProfile {
    CountryIbanProfile {
        country_code,
        country_name,
        sepa_member,
        expected_length,
        example_iban,
    }
}

pub fn lookup_country(code: &str) -> Option<&'static CountryIbanProfile> {
    COUNTRY_PROFILES
        .iter()
        .find(|profile| profile.country_code == code)
}

pub fn all_countries() -> &'static [CountryIbanProfile] {
    COUNTRY_PROFILES
}
