use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

const USAGE: &str = "usage: folio [--config <path>] [--check]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    /// Load config and dataset, report, and exit without serving.
    pub check_only: bool,
}

pub fn args_from_env() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut check_only = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config. {USAGE}"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--check" => check_only = true,
            other => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
        }
    }

    Ok(CliArgs {
        config_path: config_path.unwrap_or_else(|| PathBuf::from("./folio.jsonc")),
        check_only,
    })
}
