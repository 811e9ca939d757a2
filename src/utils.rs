use std::env;
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so `--stdout` output stays clean. `RUST_LOG` wins over
/// `--verbose`.
pub fn setup_logging(verbose: bool) {
    let filter = match env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) if verbose => EnvFilter::new("info"),
        Err(_) => EnvFilter::new("error"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(guild) = &args.guild {
        if guild.trim().is_empty() {
            anyhow::bail!("--guild must not be empty");
        }
    }

    if args.raids.iter().any(|r| r.trim().is_empty()) {
        anyhow::bail!("--raid must not be empty");
    }

    if args.stdout && args.output.is_some() {
        anyhow::bail!("--stdout and --output cannot be used together");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Args;
    use std::path::PathBuf;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn rejects_conflicting_or_empty_args() {
        let args = Args {
            stdout: true,
            output: Some(PathBuf::from("out.json")),
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());

        let args = Args {
            raids: vec!["Icecrown".to_string(), " ".to_string()],
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());

        assert!(validate_args(&Args::default()).is_ok());
    }
}
