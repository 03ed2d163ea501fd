use crate::cli::{Args, Command, LogFormat};
use anyhow::{Context, bail, ensure};
use clap::Parser;
use std::io::{self, BufRead, Write, stdin, stdout};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use xmlchars::{Edition, EditionKind, Matcher, Production, xml_1_0};

mod cli;

const MAX_CODE_POINT: u32 = 0x10_FFFF;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format);
    let kind = args
        .edition
        .parse::<EditionKind>()
        .context("Invalid --edition value")?;
    let edition = xml_1_0::edition(kind);
    debug!(edition = %kind, "selected XML 1.0 edition");
    match args.command {
        Command::Check {
            production,
            inputs,
            explain,
            strict,
        } => {
            let production = parse_production(edition, &production)?;
            let failures = if inputs.is_empty() {
                let lines = stdin()
                    .lock()
                    .lines()
                    .collect::<io::Result<Vec<_>>>()
                    .context("Failed to read the inputs from stdin")?;
                check(edition, production, &lines, explain)?
            } else {
                check(edition, production, &inputs, explain)?
            };
            if strict && failures > 0 {
                bail!("{failures} input(s) do not match {production}")
            }
            Ok(())
        }
        Command::Classify { code_points } => {
            let code_points = code_points
                .iter()
                .map(|value| parse_code_point(value))
                .collect::<anyhow::Result<Vec<_>>>()?;
            classify(edition, &code_points)
        }
        Command::Ranges { production } => {
            let production = parse_production(edition, &production)?;
            ranges(edition, production)
        }
    }
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn parse_production(edition: &Edition, name: &str) -> anyhow::Result<Production> {
    let production = name
        .parse::<Production>()
        .context("Invalid --production value")?;
    ensure!(
        edition.matcher(production).is_some(),
        "{production} is not defined in XML 1.0 {}",
        edition.kind()
    );
    Ok(production)
}

/// Parses `U+XXXX`, `0xXXXX` or a single character.
fn parse_code_point(value: &str) -> anyhow::Result<u32> {
    let hex = ["U+", "u+", "0x", "0X"]
        .into_iter()
        .find_map(|prefix| value.strip_prefix(prefix));
    if let Some(hex) = hex {
        ensure!(
            !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            "{value} is not a valid hexadecimal code point"
        );
        let code_point = u32::from_str_radix(hex, 16)
            .with_context(|| format!("{value} is not a valid hexadecimal code point"))?;
        ensure!(
            code_point <= MAX_CODE_POINT,
            "{value} is not a Unicode code point, the maximum is U+10FFFF"
        );
        return Ok(code_point);
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c.into()),
        _ => bail!("{value:?} is neither a U+XXXX code point nor a single character"),
    }
}

/// Returns the number of inputs that do not match.
fn check(
    edition: &Edition,
    production: Production,
    inputs: &[String],
    explain: bool,
) -> anyhow::Result<usize> {
    let matcher = edition
        .matcher(production)
        .with_context(|| format!("{production} is not defined in {}", edition.kind()))?;
    let mut out = stdout().lock();
    let mut failures = 0;
    for input in inputs {
        match matcher.check(input) {
            Ok(()) => writeln!(out, "{input}\ttrue")?,
            Err(mismatch) => {
                failures += 1;
                if explain {
                    writeln!(out, "{input}\tfalse\t{mismatch}")?;
                } else {
                    writeln!(out, "{input}\tfalse")?;
                }
            }
        }
    }
    out.flush()?;
    info!(
        edition = %edition.kind(),
        %production,
        inputs = inputs.len(),
        failures,
        "check finished"
    );
    Ok(failures)
}

fn classify(edition: &Edition, code_points: &[u32]) -> anyhow::Result<()> {
    let mut out = stdout().lock();
    for code_point in code_points {
        let productions = edition
            .regexes()
            .filter_map(|(production, matcher)| {
                matcher
                    .class()
                    .is_some_and(|class| class.contains(*code_point))
                    .then_some(production.name())
            })
            .collect::<Vec<_>>();
        if productions.is_empty() {
            writeln!(out, "U+{code_point:04X}\t-")?;
        } else {
            writeln!(out, "U+{code_point:04X}\t{}", productions.join(" "))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn ranges(edition: &Edition, production: Production) -> anyhow::Result<()> {
    let class = edition
        .matcher(production)
        .and_then(Matcher::class)
        .with_context(|| {
            format!("{production} is a sequence of characters and has no code point ranges")
        })?;
    let mut out = stdout().lock();
    for range in class.ranges() {
        writeln!(out, "{range}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_syntaxes() {
        assert_eq!(parse_code_point("U+0041").unwrap(), 0x41);
        assert_eq!(parse_code_point("u+1f4a9").unwrap(), 0x1F4A9);
        assert_eq!(parse_code_point("0xFFFE").unwrap(), 0xFFFE);
        assert_eq!(parse_code_point("x").unwrap(), 0x78);
        assert_eq!(parse_code_point("\u{6211}").unwrap(), 0x6211);
    }

    #[test]
    fn invalid_code_points() {
        parse_code_point("").unwrap_err();
        parse_code_point("ab").unwrap_err();
        parse_code_point("U+").unwrap_err();
        parse_code_point("U+XYZ").unwrap_err();
        parse_code_point("U+110000").unwrap_err();
        parse_code_point("U++41").unwrap_err();
        parse_code_point("0x-41").unwrap_err();
        parse_code_point("0x+41").unwrap_err();
    }

    #[test]
    fn productions_depend_on_the_edition() {
        assert_eq!(
            parse_production(&xml_1_0::ED4, "base-char").unwrap(),
            Production::BaseChar
        );
        parse_production(&xml_1_0::ED5, "BASE_CHAR").unwrap_err();
        parse_production(&xml_1_0::ED5, "QNAME").unwrap_err();
    }
}
