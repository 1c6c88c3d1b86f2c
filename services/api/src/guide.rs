use crate::infra::{dated, guidance_sheet, GuidanceSheet};
use chrono::NaiveDate;
use clap::Args;
use deed_guidance::config::AppConfig;
use deed_guidance::error::AppError;
use deed_guidance::guidance::temporal::{format_date, parse_date};
use deed_guidance::guidance::{
    load_fact_sheet, render_text_report, validate, validate_all, FieldKey, ValidationErrors,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct GuideArgs {
    /// JSON fact sheet to classify
    pub(crate) fact_sheet: PathBuf,
    /// Guidance date used when the sheet has none (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full plain-text guidance sheet instead of the narratives alone
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON fact sheet to check
    pub(crate) fact_sheet: PathBuf,
    /// Check a single stage (0 session, 1 certificate, 2 property, 3+ owners)
    #[arg(long)]
    pub(crate) stage: Option<usize>,
    /// Guidance date used when the sheet has none (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_guide(args: GuideArgs) -> Result<(), AppError> {
    let GuideArgs {
        fact_sheet,
        today,
        report,
    } = args;

    let context = dated(load_fact_sheet(&fact_sheet)?, today);
    if let Err(incomplete) = validate_all(&context) {
        println!("Fact sheet incomplete at stage {}:", incomplete.stage);
        print_errors(&incomplete.errors);
        return Err(incomplete.into());
    }

    let sheet = guidance_sheet(&context);
    if report {
        let config = AppConfig::load()?;
        print!(
            "{}",
            render_text_report(&context, &sheet.narratives, &config.report)
        );
    } else {
        render_guidance(&sheet);
    }

    Ok(())
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let ValidateArgs {
        fact_sheet,
        stage,
        today,
    } = args;

    let context = dated(load_fact_sheet(&fact_sheet)?, today);

    match stage {
        Some(stage) => {
            let errors = validate(&context, stage);
            if errors.is_empty() {
                println!("Stage {stage} complete.");
            } else {
                println!("Stage {stage} incomplete:");
                print_errors(&errors);
            }
        }
        None => match validate_all(&context) {
            Ok(()) => println!("Fact sheet complete."),
            Err(incomplete) => {
                println!("Fact sheet incomplete at stage {}:", incomplete.stage);
                print_errors(&incomplete.errors);
            }
        },
    }

    Ok(())
}

pub(crate) fn render_guidance(sheet: &GuidanceSheet) {
    println!("Guidance date: {}", format_date(sheet.guidance_date));
    if !sheet.eligible {
        println!("Certificate missing: the transfer cannot be notarised yet.");
    } else if sheet.blocked {
        println!("Outstanding tax debt blocks the transaction.");
    }

    for (index, narrative) in sheet.narratives.iter().enumerate() {
        println!("\n[{}]\n{narrative}", index + 1);
    }
}

fn print_errors(errors: &ValidationErrors) {
    for (key, message) in errors {
        println!("  - {}: {message}", field_name(*key));
    }
}

fn field_name(key: FieldKey) -> String {
    serde_json::to_value(key)
        .ok()
        .and_then(|value| value.as_str().map(str::to_owned))
        .unwrap_or_else(|| format!("{key:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_fact_sheet_keys() {
        assert_eq!(field_name(FieldKey::HasCertificate), "hasCertificate");
        assert_eq!(field_name(FieldKey::ExSpouseNameDivorce), "exSpouseNameDivorce");
    }
}
