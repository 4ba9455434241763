use ascii_comparator::{
    bytes_to_text, bytes_to_text_range, long_digits_to_bytes, text_to_bytes, text_to_bytes_range,
    text_to_bytes_terminated, AsciiComparator, AsciiError,
};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};

/// ASCII comparison and byte/text conversion from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Order two texts; prints -1, 0 or 1
    Compare {
        a: String,
        b: String,
        /// Fold ASCII uppercase letters before comparing
        #[arg(long)]
        ci: bool,
    },
    /// Test two texts for equality
    Equals {
        a: String,
        b: String,
        #[arg(long)]
        ci: bool,
    },
    /// Sort texts, one per output line
    Sort {
        #[arg(long)]
        ci: bool,
        texts: Vec<String>,
    },
    /// Narrow a text to bytes
    Bytes {
        text: String,
        /// Only the characters in [BEGIN, END)
        #[arg(long, num_args = 2, value_names = ["BEGIN", "END"])]
        range: Option<Vec<usize>>,
        /// Append two terminator bytes
        #[arg(long, num_args = 2, value_names = ["T1", "T2"], conflicts_with = "range")]
        terminators: Option<Vec<u8>>,
    },
    /// Widen bytes (decimal values) to a text
    Text {
        bytes: Vec<u8>,
        /// Start of a validated range; non-ASCII bytes are rejected
        #[arg(long, requires = "length")]
        offset: Option<usize>,
        #[arg(long, requires = "offset")]
        length: Option<usize>,
    },
    /// Decimal ASCII digits of a non-negative integer
    Digits { value: u64 },
}

#[derive(Serialize, Debug)]
#[serde(tag = "command", rename_all = "snake_case")]
enum Report {
    Compare { ordering: i32 },
    Equals { equal: bool },
    Sort { texts: Vec<String> },
    Bytes { bytes: Vec<u8> },
    Text { text: String },
    Digits { bytes: Vec<u8>, text: String },
}

impl Report {
    fn render(&self) -> String {
        match self {
            Report::Compare { ordering } => ordering.to_string(),
            Report::Equals { equal } => equal.to_string(),
            Report::Sort { texts } => texts.join("\n"),
            Report::Bytes { bytes } => bytes
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Report::Text { text } => text.clone(),
            Report::Digits { text, .. } => text.clone(),
        }
    }
}

fn run(command: Command) -> Result<Report, AsciiError> {
    let report = match command {
        Command::Compare { a, b, ci } => {
            let ord = AsciiComparator::new(ci).cmp_str(&a, &b);
            Report::Compare {
                ordering: ord as i32,
            }
        }
        Command::Equals { a, b, ci } => Report::Equals {
            equal: AsciiComparator::new(ci).eq_str(&a, &b),
        },
        Command::Sort { ci, mut texts } => {
            AsciiComparator::new(ci).sort(&mut texts);
            Report::Sort { texts }
        }
        Command::Bytes {
            text,
            range,
            terminators,
        } => {
            let bytes = match (range.as_deref(), terminators.as_deref()) {
                (Some(&[begin, end]), _) => text_to_bytes_range(&text, begin, end),
                (_, Some(&[t1, t2])) => text_to_bytes_terminated(&text, t1, t2),
                _ => text_to_bytes(&text),
            };
            Report::Bytes { bytes }
        }
        Command::Text {
            bytes,
            offset,
            length,
        } => {
            let text = match (offset, length) {
                (Some(offset), Some(length)) => bytes_to_text_range(&bytes, offset, length)?,
                _ => bytes_to_text(Some(bytes.as_slice())).unwrap_or_default(),
            };
            Report::Text { text }
        }
        Command::Digits { value } => {
            let bytes = long_digits_to_bytes(value);
            let text = bytes_to_text(Some(bytes.as_slice())).unwrap_or_default();
            Report::Digits { bytes, text }
        }
    };
    Ok(report)
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    debug!(command = ?args.command, "running");

    let report = match run(args.command) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("failed to encode result: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report.render());
    }
}
