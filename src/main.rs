mod bank_codes;
mod banks;
mod classify;
mod logging;
mod models;
mod ranking;
mod reference;
mod sample;

use bank_codes::lookup_bank_code;
use banks::{bundled_profiles, load_profiles, write_profiles};
use clap::{Parser, Subcommand, ValueEnum};
use classify::{classify, verify_check_digits};
use models::BankProfile;
use rand::Rng;
use ranking::{rank, rank_by_fee_then_affiliate};
use reference::all_countries;
use sample::sample_iban;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bankcompare")]
#[command(about = "European bank comparison core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Classify(ClassifyArgs),
    Countries(CountriesArgs),
    Bank(BankArgs),
    Rank(RankArgs),
    Sample(SampleArgs),
    Export(ExportArgs),
}

#[derive(Parser)]
struct ClassifyArgs {
    iban: String,
}

#[derive(Parser)]
struct CountriesArgs {
    #[arg(long, default_value_t = false)]
    sepa_only: bool,
}

#[derive(Parser)]
struct BankArgs {
    prefix: String,
}

#[derive(Parser)]
struct RankArgs {
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = RankPolicy::Priority)]
    policy: RankPolicy,
}

#[derive(Clone, Copy, ValueEnum)]
enum RankPolicy {
    Priority,
    Fee,
}

#[derive(Parser)]
struct SampleArgs {
    country: String,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser)]
struct ExportArgs {
    #[arg(long, default_value = "data/banks.csv")]
    output: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("bankcompare")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Classify(args) => run_classify(args),
        Command::Countries(args) => run_countries(args),
        Command::Bank(args) => run_bank(args),
        Command::Rank(args) => run_rank(args),
        Command::Sample(args) => run_sample(args),
        Command::Export(args) => run_export(args),
    }
}

fn run_classify(args: ClassifyArgs) -> Result<(), String> {
    let result = classify(&args.iban);

    emit_info_line(&format!("Input (grouped): {}", result.grouped_display));
    match reference::lookup_country(&result.country_code) {
        Some(profile) => {
            emit_info_line(&format!(
                "Country: {} ({}), SEPA member: {}",
                profile.country_name, profile.country_code, profile.sepa_member
            ));
            emit_info_line(&format!(
                "Length: {} of {} expected -> {}",
                result.normalized_iban.chars().count(),
                profile.expected_length,
                if result.length_valid { "ok" } else { "mismatch" }
            ));
        }
        None => {
            emit_info_line(&format!(
                "Country: unrecognized code '{}'",
                result.country_code
            ));
        }
    }
    emit_info_line(&format!(
        "Structure check (country + length): {}",
        if result.overall_valid { "plausible" } else { "not plausible" }
    ));

    // Spanish BBANs carry the entity code in positions 5-8.
    if result.overall_valid && result.country_code == "ES" {
        let prefix: String = result.normalized_iban.chars().skip(4).take(4).collect();
        match lookup_bank_code(&prefix) {
            Some(bank) => emit_info_line(&format!(
                "Issuing bank: {} (BIC {})",
                bank.bank_name, bank.bic
            )),
            None => emit_info_line(&format!("Issuing bank: unknown entity code {prefix}")),
        }
    }

    match verify_check_digits(&args.iban) {
        Some(true) => emit_info_line("Check digits (advisory): pass"),
        Some(false) => emit_info_line("Check digits (advisory): FAIL"),
        None => emit_info_line("Check digits (advisory): not computable"),
    }
    emit_info_line("Note: structural check only, not a full IBAN validation");
    Ok(())
}

fn run_countries(args: CountriesArgs) -> Result<(), String> {
    let mut shown = 0usize;
    for profile in all_countries() {
        if args.sepa_only && !profile.sepa_member {
            continue;
        }
        emit_info_line(&format!(
            "{} {:<22} length={:<2} sepa={:<5} e.g. {}",
            profile.country_code,
            profile.country_name,
            profile.expected_length,
            profile.sepa_member,
            profile.example_iban
        ));
        shown += 1;
    }
    emit_info_line(&format!("{shown} countries listed"));
    Ok(())
}

fn run_bank(args: BankArgs) -> Result<(), String> {
    match lookup_bank_code(args.prefix.trim()) {
        Some(bank) => {
            emit_info_line(&format!("Bank: {}", bank.bank_name));
            emit_info_line(&format!("BIC: {}", bank.bic));
        }
        None => {
            // Expected outcome for most prefixes; the table is illustrative.
            emit_info_line(&format!("No bank known for prefix {}", args.prefix));
        }
    }
    Ok(())
}

fn run_rank(args: RankArgs) -> Result<(), String> {
    let profiles = match args.input {
        Some(path) => load_profiles(&path)?,
        None => bundled_profiles(),
    };
    log::info!("ranking {} bank profiles", profiles.len());

    let ordered = match args.policy {
        RankPolicy::Priority => rank(&profiles),
        RankPolicy::Fee => rank_by_fee_then_affiliate(&profiles),
    };
    for (position, profile) in ordered.iter().enumerate() {
        emit_info_line(&format_rank_line(position + 1, profile));
    }
    Ok(())
}

fn format_rank_line(position: usize, profile: &BankProfile) -> String {
    format!(
        "{:>2}. {} [{}] priority={} affiliate={} fee=\"{}\"",
        position,
        profile.name,
        profile.country,
        profile
            .priority
            .map_or_else(|| "-".to_string(), |p| p.to_string()),
        profile.has_affiliate_link(),
        profile.monthly_fee
    )
}

fn run_sample(args: SampleArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let code = args.country.trim().to_uppercase();
    let iban = sample_iban(&code, seed)?;
    emit_info_line(&format!("Sample IBAN for {code} (seed {seed}): {iban}"));
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<(), String> {
    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    let profiles = bundled_profiles();
    write_profiles(&args.output, &profiles)?;
    emit_info_line(&format!(
        "Exported {} bank profiles to {}",
        profiles.len(),
        args.output.display()
    ));
    Ok(())
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
