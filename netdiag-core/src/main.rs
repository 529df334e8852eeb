//! NetDiag CLI
//!
//! Reads a diagnosis request (JSON) from a file or stdin and prints the result.
//!
//! ```text
//! netdiag [--explain] [request.json]
//! echo '{"sintomas":["DNS error"],"systemType":"fuzzy"}' | netdiag
//! ```

use std::io::Read;

use anyhow::{bail, Context, Result};

use netdiag_core::constants::{APP_NAME, APP_VERSION};
use netdiag_core::logic::knowledge;
use netdiag_core::{diagnose, DiagnosisRequest};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let output = run(std::env::args().skip(1), std::io::stdin().lock())?;
    println!("{}", output);
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    explain: bool,
    version: bool,
    path: Option<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--explain" => options.explain = true,
            "--version" => options.version = true,
            flag if flag.starts_with("--") => bail!("unknown flag '{}'", flag),
            _ => options.path = Some(arg),
        }
    }
    Ok(options)
}

/// Request from the file named in `options`, or from `stdin` when none
fn read_request<R: Read>(options: &Options, mut stdin: R) -> Result<DiagnosisRequest> {
    let raw = match &options.path {
        Some(file) => std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file))?,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("invalid diagnosis request")
}

/// Everything but process setup; returns the text to print
fn run<I, R>(args: I, stdin: R) -> Result<String>
where
    I: IntoIterator<Item = String>,
    R: Read,
{
    let options = parse_args(args)?;
    if options.version {
        return Ok(format!("{} {}", APP_NAME, APP_VERSION));
    }

    knowledge::validate().context("knowledge base is inconsistent")?;

    let request = read_request(&options, stdin)?;

    log::info!("{} v{}: running {} diagnosis", APP_NAME, APP_VERSION, request.system);

    let diagnosis = diagnose(&request);

    let mut output = serde_json::to_value(&diagnosis.result)?;
    if options.explain {
        output["explicacion"] = serde_json::to_value(&diagnosis.explanation)?;
    }

    Ok(serde_json::to_string_pretty(&output)?)
}
