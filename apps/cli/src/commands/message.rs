use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, ValueEnum};
use outcome_core::resource::core_catalog;
use outcome_core::{Message, MessageKind, MessageVerbosity, ResourceCatalog, TokenValue};

use super::{parse_token, token_bag};
use crate::config::CliConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Information,
    Warning,
    Error,
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
}

impl From<KindArg> for MessageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Information => Self::Information,
            KindArg::Warning => Self::Warning,
            KindArg::Error => Self::Error,
            KindArg::ValidationError => Self::ValidationError,
            KindArg::Unauthorized => Self::Unauthorized,
            KindArg::Forbidden => Self::Forbidden,
            KindArg::NotFound => Self::NotFound,
        }
    }
}

#[derive(Debug, Args)]
pub struct MessageArgs {
    /// Resource key, e.g. `NotFound` or `Message_Property_Required`.
    key: String,

    #[arg(long, value_enum, default_value_t = KindArg::Error)]
    kind: KindArg,

    /// Locale to render in; the default locale when omitted.
    #[arg(long)]
    locale: Option<String>,

    /// Fields to include: code, template, tokens, languageCode.
    #[arg(long)]
    levels: Option<String>,

    /// Token as NAME=VALUE; repeatable.
    #[arg(long = "token", short = 't', value_parser = parse_token)]
    tokens: Vec<(String, TokenValue)>,

    /// TOML catalog merged over the built-in resources.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<ResourceCatalog> {
    let builtin = ResourceCatalog::new("outcome-cli")
        .merged(core_catalog().clone())
        .merged(outcome_validator::resources::catalog().clone());

    let Some(path) = path else {
        return Ok(builtin);
    };
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read catalog {}", path.display()))?;
    let extra = ResourceCatalog::from_toml_str(path.display().to_string(), &document)?;
    Ok(builtin.merged(extra))
}

pub fn message(
    args: &MessageArgs,
    config: &CliConfig,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let catalog = load_catalog(args.catalog.as_deref().or(config.catalog.as_deref()))?;
    let verbosity = MessageVerbosity::resolve(args.levels.as_deref());

    let message = Message::create(
        args.kind.into(),
        &catalog,
        &args.key,
        args.locale.as_deref(),
        token_bag(&args.tokens),
    );
    tracing::info!(invariant = %message, code = message.code(), "message rendered");

    serde_json::to_writer_pretty(&mut *out, &message.view(verbosity))?;
    writeln!(out)?;
    Ok(ExitCode::SUCCESS)
}
