//! Cadastro CLI
//!
//! Command-line access to the CPF/CNPJ, phone and CEP rules.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde::de::DeserializeOwned;

use cadastro_types::{
    CreateChargeRequest, CreateCustomerRequest, CreateSubscriptionRequest, DocumentKind,
    FieldKind, FieldViolation, RefundRequest, UpdateSubscriptionRequest, strip_non_digits,
    validator_for,
};

#[derive(Parser)]
#[command(name = "cadastro")]
#[command(author, version, about = "Brazilian registration data checks", long_about = None)]
struct Cli {
    /// Output style
    #[arg(
        long,
        global = true,
        env = "CADASTRO_OUTPUT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single value (exit code 1 when invalid)
    Validate {
        kind: CheckKind,
        value: String,
    },
    /// Format a digits-only CPF or CNPJ
    Format {
        kind: DocumentArg,
        value: String,
    },
    /// Remove every non-digit character
    Strip { value: String },
    /// Normalize and validate a customer payload from a JSON file
    CheckCustomer { path: PathBuf },
    /// Normalize and validate a charge payload from a JSON file
    CheckCharge { path: PathBuf },
    /// Normalize and validate a new subscription payload from a JSON file
    CheckSubscription { path: PathBuf },
    /// Normalize and validate a subscription update payload from a JSON file
    CheckSubscriptionUpdate { path: PathBuf },
    /// Validate a refund payload from a JSON file
    CheckRefund { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CheckKind {
    Cpf,
    Cnpj,
    CpfCnpj,
    Phone,
    PostalCode,
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DocumentArg {
    Cpf,
    Cnpj,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::Cpf => DocumentKind::Cpf,
            DocumentArg::Cnpj => DocumentKind::Cnpj,
        }
    }
}

#[derive(Serialize)]
struct CheckOutcome {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn check_value(kind: CheckKind, value: &str) -> CheckOutcome {
    let (valid, field_kind) = match kind {
        CheckKind::Cpf => (DocumentKind::Cpf.is_valid(value), FieldKind::CpfCnpj),
        CheckKind::Cnpj => (DocumentKind::Cnpj.is_valid(value), FieldKind::CpfCnpj),
        CheckKind::CpfCnpj => registry_check(FieldKind::CpfCnpj, value),
        CheckKind::Phone => registry_check(FieldKind::Phone, value),
        CheckKind::PostalCode => registry_check(FieldKind::PostalCode, value),
        CheckKind::Card => registry_check(FieldKind::CardNumber, value),
    };

    let message = (!valid).then(|| {
        let field = kind
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        validator_for(field_kind).describe(&field, value)
    });

    CheckOutcome { valid, message }
}

fn registry_check(kind: FieldKind, value: &str) -> (bool, FieldKind) {
    (validator_for(kind).validate(value), kind)
}

fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON payload in {}", path.display()))
}

fn write_payload<T: Serialize>(
    out: &mut impl Write,
    format: OutputFormat,
    result: Result<T, Vec<FieldViolation>>,
) -> Result<bool> {
    match (result, format) {
        (Ok(payload), _) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            Ok(true)
        }
        (Err(violations), OutputFormat::Json) => {
            let body = serde_json::json!({ "valid": false, "violations": violations });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            Ok(false)
        }
        (Err(violations), OutputFormat::Text) => {
            for violation in violations {
                writeln!(out, "✗ {}: {}", violation.field, violation.message)?;
            }
            Ok(false)
        }
    }
}

/// Runs one command, returning whether the checked input was valid.
fn run(cli: Cli, out: &mut impl Write) -> Result<bool> {
    match cli.command {
        Commands::Validate { kind, value } => {
            let outcome = check_value(kind, &value);
            match cli.output {
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&outcome)?)?,
                OutputFormat::Text => match &outcome.message {
                    None => writeln!(out, "✓ valid")?,
                    Some(message) => writeln!(out, "✗ {}", message)?,
                },
            }
            Ok(outcome.valid)
        }

        Commands::Format { kind, value } => {
            let formatted = DocumentKind::from(kind).format(&value)?;
            match cli.output {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::json!({ "formatted": formatted }))?
                }
                OutputFormat::Text => writeln!(out, "{}", formatted)?,
            }
            Ok(true)
        }

        Commands::Strip { value } => {
            let digits = strip_non_digits(&value);
            match cli.output {
                OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "digits": digits }))?,
                OutputFormat::Text => writeln!(out, "{}", digits)?,
            }
            Ok(true)
        }

        Commands::CheckCustomer { path } => {
            let customer: CreateCustomerRequest = read_payload(&path)?;
            let normalized = customer.normalized();
            let result = normalized.validate().map(|()| normalized);
            write_payload(out, cli.output, result)
        }

        Commands::CheckCharge { path } => {
            let charge: CreateChargeRequest = read_payload(&path)?;
            let normalized = charge.normalized();
            let result = normalized.validate().map(|()| normalized);
            write_payload(out, cli.output, result)
        }

        Commands::CheckSubscription { path } => {
            let subscription: CreateSubscriptionRequest = read_payload(&path)?;
            let normalized = subscription.normalized();
            let result = normalized.validate().map(|()| normalized);
            write_payload(out, cli.output, result)
        }

        Commands::CheckSubscriptionUpdate { path } => {
            let update: UpdateSubscriptionRequest = read_payload(&path)?;
            let normalized = update.normalized();
            let result = normalized.validate().map(|()| normalized);
            write_payload(out, cli.output, result)
        }

        Commands::CheckRefund { path } => {
            let refund: RefundRequest = read_payload(&path)?;
            let result = refund.validate().map(|()| refund);
            write_payload(out, cli.output, result)
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let valid = run(cli, &mut io::stdout().lock())?;
    if !valid {
        std::process::exit(1);
    }

    Ok(())
}
