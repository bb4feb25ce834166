use std::env;
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub snapshot: Option<PathBuf>,
}

pub fn parse_args() -> Result<CliArgs, String> {
    parse_from(env::args().skip(1))
}

fn parse_from(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --port".to_string())?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port value: {value}"))?;
                parsed.port = Some(port);
            }
            "--snapshot" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --snapshot".to_string())?;
                parsed.snapshot = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        "Focus usage tracker\n\n\
Usage:\n  focus [--port <port>] [--snapshot <path>]\n\n\
Options:\n  --port <port>      Override the configured port for this run only\n  --snapshot <path>  Read device usage exports from this JSON file\n  -h, --help         Show this help message\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_port_and_snapshot() {
        let parsed = parse_from(args(&["--port", "4000", "--snapshot", "/tmp/usage.json"]))
            .expect("parse");
        assert_eq!(parsed.port, Some(4000));
        assert_eq!(parsed.snapshot, Some(PathBuf::from("/tmp/usage.json")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_from(args(&["--port", "http"])).is_err());
        assert!(parse_from(args(&["--snapshot"])).is_err());
        assert!(parse_from(args(&["--verbose"])).is_err());
    }
}
