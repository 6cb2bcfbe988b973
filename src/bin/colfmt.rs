//! `colfmt` — pad and truncate text to a field width in display columns
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin colfmt -- --width 12 --align '^' --fill '*' 漢字 hello
//! printf 'abc\n日本語\n' | cargo run --bin colfmt -- --width 8 --precision 4
//! cargo run --bin colfmt -- --help
//! ```

use colfmt::{
    Alignment, FormatSpec, IoSink, LogLevel, NarrowOracle, Sink, UnicodeOracle, WidthMethod,
    set_log_callback, write_unicode_with,
};
use std::ffi::OsString;
use std::io::{self, BufRead, BufWriter, Write};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "colfmt - pad and truncate text by display columns

USAGE:
    colfmt [OPTIONS] [TEXT]...

Each TEXT is formatted on its own line between | markers. With no TEXT,
lines are read from stdin.

OPTIONS:
    -h, --help              Print this help message and exit
    -w, --width <N>         Minimum field width in columns
    -p, --precision <N>     Maximum content width in columns
    -a, --align <A>         <, ^, > or left, center, right (default: left)
    -f, --fill <C>          Fill character, one ASCII character (default: space)
    --width-method <M>      wcwidth or unicode (ambiguous width 1 or 2)
    --narrow                Count every byte as one column
    -v, --verbose           Log truncations to stderr

EXAMPLES:
    colfmt --width 10 --align '>' hello       # |     hello|
    colfmt --width 6 --fill '*' --align '^' 漢字  # |*漢字*|
    colfmt --precision 3 漢字abc               # |漢|
";

/// Configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub alignment: Alignment,
    pub fill: u8,
    pub width_method: WidthMethod,
    pub narrow: bool,
    pub verbose: bool,
    pub texts: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            precision: None,
            alignment: Alignment::Left,
            fill: b' ',
            width_method: WidthMethod::WcWidth,
            narrow: false,
            verbose: false,
            texts: Vec::new(),
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

/// Pull the value following `flag`.
fn take_value<I>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = OsString>,
{
    args.next()
        .map(|v| v.to_string_lossy().to_string())
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("Invalid {flag} value: {value} (must be a non-negative integer)"))
}

/// Parse a fill argument: exactly one ASCII character, so the fill is one
/// byte and one column.
fn parse_fill(value: &str) -> Option<u8> {
    match value.as_bytes() {
        [b] if b.is_ascii() && !b.is_ascii_control() && *b != b'{' && *b != b'}' => Some(*b),
        _ => None,
    }
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        match Self::try_from_args(args) {
            Ok(Some(config)) => ParseResult::Config(config),
            Ok(None) => ParseResult::Help,
            Err(msg) => ParseResult::Error(msg),
        }
    }

    fn try_from_args<I>(args: I) -> Result<Option<Self>, String>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy().to_string();

            match arg_str.as_str() {
                "-h" | "--help" => return Ok(None),

                "-w" | "--width" => {
                    let value = take_value(&mut args, &arg_str)?;
                    config.width = Some(parse_count(&arg_str, &value)?);
                }

                "-p" | "--precision" => {
                    let value = take_value(&mut args, &arg_str)?;
                    config.precision = Some(parse_count(&arg_str, &value)?);
                }

                "-a" | "--align" => {
                    let value = take_value(&mut args, &arg_str)?;
                    config.alignment = Alignment::from_name(&value)
                        .map(|a| a.resolve(Alignment::Left))
                        .ok_or_else(|| {
                            format!("Unknown --align: {value} (valid: <, ^, >, left, center, right)")
                        })?;
                }

                "-f" | "--fill" => {
                    let value = take_value(&mut args, &arg_str)?;
                    config.fill = parse_fill(&value).ok_or_else(|| {
                        format!("Invalid --fill: {value} (must be one printable ASCII character)")
                    })?;
                }

                "--width-method" => {
                    let value = take_value(&mut args, &arg_str)?;
                    config.width_method = WidthMethod::from_name(&value).ok_or_else(|| {
                        format!("Unknown --width-method: {value} (valid: wcwidth, unicode)")
                    })?;
                }

                "--narrow" => config.narrow = true,
                "-v" | "--verbose" => config.verbose = true,

                "--" => {
                    config
                        .texts
                        .extend(args.by_ref().map(|a| a.to_string_lossy().to_string()));
                }

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return Err(format!("Unknown option: {other}"));
                    }
                    config.texts.push(other.to_string());
                }
            }
        }

        Ok(Some(config))
    }

    /// Format spec described by this configuration.
    #[must_use]
    pub fn format_spec(&self) -> FormatSpec<u8> {
        FormatSpec {
            width: self.width,
            precision: self.precision,
            fill: self.fill,
            alignment: self.alignment,
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Write one framed, formatted line.
fn format_line<S: Sink<u8>>(sink: &mut S, text: &str, config: &Config) -> colfmt::Result<()> {
    let specs = config.format_spec();
    sink.put(b'|')?;
    if config.narrow {
        write_unicode_with(text.as_bytes(), sink, &specs, &NarrowOracle)?;
    } else {
        let oracle = UnicodeOracle::new(config.width_method);
        write_unicode_with(text.as_bytes(), sink, &specs, &oracle)?;
    }
    sink.put_slice(b"|\n")
}

fn run(config: &Config) -> colfmt::Result<()> {
    let stdout = io::stdout();
    let mut sink = IoSink::new(BufWriter::new(stdout.lock()));

    if config.texts.is_empty() {
        for line in io::stdin().lock().lines() {
            format_line(&mut sink, &line?, config)?;
        }
    } else {
        for text in &config.texts {
            format_line(&mut sink, text, config)?;
        }
    }

    sink.into_inner().flush()?;
    Ok(())
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.verbose {
                set_log_callback(|level: LogLevel, msg: &str| {
                    eprintln!("[{level:?}] {msg}");
                });
            }
            if let Err(err) = run(&config) {
                // A closed pipe (e.g. `| head`) is a normal way to stop.
                if matches!(&err, colfmt::Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe) {
                    return;
                }
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<OsString> {
        strs.iter().map(|s| OsString::from(*s)).collect()
    }

    fn parse(strs: &[&str]) -> Config {
        match Config::from_args(args(strs)) {
            ParseResult::Config(c) => c,
            _ => panic!("Expected Config"),
        }
    }

    fn render(config: &Config, text: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        format_line(&mut out, text, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = parse(&["colfmt"]);
        assert_eq!(config.width, None);
        assert_eq!(config.precision, None);
        assert_eq!(config.alignment, Alignment::Left);
        assert_eq!(config.fill, b' ');
        assert!(config.texts.is_empty());
    }

    #[test]
    fn test_help_flag() {
        let result = Config::from_args(args(&["colfmt", "--help"]));
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn test_full_flags() {
        let config = parse(&[
            "colfmt", "-w", "12", "-p", "4", "-a", "^", "-f", "*", "--width-method", "cjk",
            "hello",
        ]);
        assert_eq!(config.width, Some(12));
        assert_eq!(config.precision, Some(4));
        assert_eq!(config.alignment, Alignment::Center);
        assert_eq!(config.fill, b'*');
        assert_eq!(config.width_method, WidthMethod::Unicode);
        assert_eq!(config.texts, vec!["hello".to_string()]);
    }

    #[test]
    fn test_zero_alignment_resolves_right() {
        let config = parse(&["colfmt", "--align", "0"]);
        assert_eq!(config.alignment, Alignment::Right);
    }

    #[test]
    fn test_double_dash_takes_rest_as_text() {
        let config = parse(&["colfmt", "--", "-x", "--width"]);
        assert_eq!(config.texts, vec!["-x".to_string(), "--width".to_string()]);
        assert_eq!(config.width, None);
    }

    #[test]
    fn test_invalid_values() {
        for bad in [
            &["colfmt", "--width"][..],
            &["colfmt", "--width", "-3"],
            &["colfmt", "--align", "middle"],
            &["colfmt", "--fill", "ab"],
            &["colfmt", "--fill", "漢"],
            &["colfmt", "--width-method", "huge"],
            &["colfmt", "--unknown"],
        ] {
            assert!(
                matches!(Config::from_args(args(bad)), ParseResult::Error(_)),
                "expected error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_fill() {
        assert_eq!(parse_fill("*"), Some(b'*'));
        assert_eq!(parse_fill(" "), Some(b' '));
        assert_eq!(parse_fill("{"), None);
        assert_eq!(parse_fill(""), None);
    }

    #[test]
    fn test_format_line() {
        let config = parse(&["colfmt", "-w", "6", "-a", "^", "-f", "*"]);
        assert_eq!(render(&config, "漢字"), "|*漢字*|\n");
    }

    #[test]
    fn test_format_line_narrow() {
        let config = parse(&["colfmt", "-w", "8", "--narrow"]);
        // Six UTF-8 bytes counted as six columns.
        assert_eq!(render(&config, "漢字"), "|漢字  |\n");
    }

    #[test]
    fn test_format_line_precision() {
        let config = parse(&["colfmt", "-p", "3"]);
        assert_eq!(render(&config, "漢字abc"), "|漢|\n");
    }
}
