//! The `check` subcommand.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde_json::Value;
use textguard_validator::{StringValidator, Verdict};

use crate::cli::{CheckArgs, OutputFormat};

/// Validates every value in `args` and writes one line per outcome.
///
/// Returns failure if any value was rejected.
pub fn run(validator: &StringValidator, args: &CheckArgs, out: &mut impl Write) -> Result<ExitCode> {
    let verdicts = if args.values.is_empty() {
        vec![Verdict::from(validator.go(&None::<Value>))]
    } else {
        args.values
            .iter()
            .map(|raw| evaluate(validator, raw, args.json))
            .collect::<Result<Vec<_>>>()?
    };

    for verdict in &verdicts {
        match args.output {
            OutputFormat::Text => writeln!(out, "{}", verdict.text())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, verdict)?;
                writeln!(out)?;
            }
        }
    }

    let rejected = verdicts.iter().filter(|v| !v.is_ok()).count();
    tracing::info!(checked = verdicts.len(), rejected, "check finished");

    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn evaluate(validator: &StringValidator, raw: &str, as_json: bool) -> Result<Verdict> {
    let result = if as_json {
        let value: Value =
            serde_json::from_str(raw).with_context(|| format!("`{raw}` is not valid JSON"))?;
        validator.go(&value)
    } else {
        validator.go(raw)
    };
    Ok(Verdict::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(values: &[&str], json: bool, output: OutputFormat) -> CheckArgs {
        CheckArgs {
            json,
            output,
            values: values.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    fn sample() -> StringValidator {
        StringValidator::new()
            .not_empty()
            .max_length(20)
            .not_equals("foo")
    }

    fn run_to_string(args: &CheckArgs) -> (ExitCode, String) {
        let mut out = Vec::new();
        let code = run(&sample(), args, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output() {
        let (code, out) = run_to_string(&args(&["bar", "foo", ""], false, OutputFormat::Text));
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            out,
            "bar\nValue must not be foo.\nString length must be greater than or equal to 1 but was 0.\n"
        );
    }

    #[test]
    fn test_all_accepted_is_success() {
        let (code, out) = run_to_string(&args(&["bar"], false, OutputFormat::Text));
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "bar\n");
    }

    #[test]
    fn test_json_input_hits_type_gate() {
        let (_, out) = run_to_string(&args(&["null", "42", "\"bar\""], true, OutputFormat::Text));
        assert_eq!(
            out,
            "StringValidator expected a string but received null.\n\
             StringValidator expected a string but received number.\n\
             bar\n"
        );
    }

    #[test]
    fn test_no_values_checks_absent() {
        let (_, out) = run_to_string(&args(&[], false, OutputFormat::Text));
        assert_eq!(
            out,
            "StringValidator expected a string but received undefined.\n"
        );
    }

    #[test]
    fn test_json_output() {
        let (_, out) = run_to_string(&args(&["bar", "foo"], false, OutputFormat::Json));
        assert_eq!(
            out,
            "{\"ok\":true,\"value\":\"bar\"}\n{\"ok\":false,\"message\":\"Value must not be foo.\"}\n"
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut out = Vec::new();
        let err = run(&sample(), &args(&["{"], true, OutputFormat::Text), &mut out).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
        assert!(out.is_empty());
    }
}
