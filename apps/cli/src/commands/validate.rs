use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use outcome_core::context::OperationContext;
use outcome_core::prelude::*;
use outcome_validator::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// JSON sign-up document.
    file: PathBuf,

    /// Locale for the messages.
    #[arg(long)]
    locale: Option<String>,

    /// Fields to include: code, template, tokens, languageCode.
    #[arg(long)]
    levels: Option<String>,

    /// Report only the first validation error.
    #[arg(long)]
    first_error: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SignUp {
    username: Option<String>,
    email: Option<String>,
    age: Option<i32>,
    password: Option<String>,
    password_confirmation: Option<String>,
    interests: Vec<String>,
    starts_on: Option<NaiveDate>,
    ends_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct Account {
    username: String,
    interests: usize,
}

fn check(sign_up: &SignUp, validator: &mut Validator) {
    let mut object = validator.for_source(sign_up);
    object
        .property("Username", |s| s.username.as_deref())
        .is_not_null_or_white_space()
        .has_length_in_range(3, 20);
    object
        .property("Email", |s| s.email.as_deref())
        .is_required()
        .is_valid_with(|| sign_up.email.as_deref().is_none_or(|e| e.contains('@')));
    object
        .property("Age", |s| s.age)
        .is_required()
        .has_value_in_range(13, 120, RangeBoundaries::AllInclusive);
    object
        .property("Password", |s| s.password.as_deref())
        .is_required()
        .has_min_length(8);
    object
        .basic("PasswordConfirmation", |s| s.password_confirmation.as_deref())
        .is_valid(sign_up.password_confirmation == sign_up.password);
    object
        .collection("Interests", |s| &s.interests)
        .has_max_values(5);
    if sign_up.ends_on.is_some() {
        object
            .property("EndsOn", |s| s.ends_on)
            .is_greater_than_or_equal_to("StartsOn", |s| s.starts_on);
    }
}

fn evaluate(sign_up: &SignUp, mode: ErrorMode) -> Outcome<Account> {
    let mut validator = Validator::new();
    check(sign_up, &mut validator);

    if validator.has_errors() {
        return Outcome::failure()
            .with_validator(&validator, mode)
            .with_log_message(format!("{} rule(s) failed", validator.errors().len()))
            .build();
    }
    Outcome::success_with(Account {
        username: sign_up.username.clone().unwrap_or_default(),
        interests: sign_up.interests.len(),
    })
    .build()
}

pub fn validate(args: &ValidateArgs, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let document = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let sign_up: SignUp = serde_json::from_str(&document)
        .with_context(|| format!("{} is not a sign-up document", args.file.display()))?;

    let mut context =
        OperationContext::new().with_verbosity(MessageVerbosity::resolve(args.levels.as_deref()));
    if let Some(tag) = args.locale.as_deref() {
        context = context.with_locale_tag(tag)?;
    }
    let mode = if args.first_error {
        ErrorMode::FirstError
    } else {
        ErrorMode::AllErrors
    };

    let (json, success) = context.scope_sync(|| -> anyhow::Result<_> {
        let outcome = evaluate(&sign_up, mode);
        tracing::info!(
            success = outcome.is_success(),
            messages = %outcome.invariant_messages(Some("; ")),
            "sign-up validated"
        );
        Ok((serde_json::to_string_pretty(&outcome)?, outcome.is_success()))
    })?;

    writeln!(out, "{json}")?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
