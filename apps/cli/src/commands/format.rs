use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use outcome_core::TokenValue;

use super::{parse_token, token_bag};

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Template with `{name}` or `{name:spec}` placeholders.
    template: String,

    /// Token as NAME=VALUE; repeatable.
    #[arg(long = "token", short = 't', value_parser = parse_token)]
    tokens: Vec<(String, TokenValue)>,
}

pub fn format(args: &FormatArgs, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let bag = token_bag(&args.tokens);
    let rendered = outcome_core::format::format(&args.template, bag.as_ref());
    writeln!(out, "{rendered}")?;
    Ok(ExitCode::SUCCESS)
}
