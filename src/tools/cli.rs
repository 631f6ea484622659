use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

use crate::compression::decode::TruncationPolicy;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Encode then decode a line of text, or decode a line of digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    RoundTrip,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds a Huffman code from a table of symbol probabilities and encodes text with it",
    long_about = "
    Reads a table of symbols and probabilities (one `<symbol><TAB><probability>` per line),
    builds the Huffman tree for it, then encodes a line of text into a string of 0 and 1 digits
    and decodes it again. Spaces are not encoded, they are copied through as word separators.

    Anything not given on the command line is prompted for."
)]
pub struct Args {
    /// Probability table to build the code from
    #[clap()]
    table: Option<String>,

    /// Line of text to encode
    #[clap(short = 't', long = "text")]
    text: Option<String>,

    /// Decode this line of 0/1 digits instead of encoding text
    #[clap(short = 'd', long = "decode", conflicts_with = "text")]
    decode: Option<String>,

    /// Fail when an encoded line stops partway through a code
    #[clap(short = 's', long = "strict")]
    strict: bool,

    /// Print the code for every symbol
    #[clap(long = "show-table")]
    show_table: bool,

    /// Print the Huffman tree
    #[clap(long = "show-tree")]
    show_tree: bool,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u8,

    /// Suppress everything but the results
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Name of the probability table file, prompted for when missing
    pub table: Option<String>,
    /// Text to encode, or digits to decode. Prompted for when missing
    pub text: Option<String>,
    /// RoundTrip/Decode
    pub op_mode: Mode,
    /// Handling of encoded lines that end partway through a code
    pub policy: TruncationPolicy,
    pub show_table: bool,
    pub show_tree: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            table: None,
            text: None,
            op_mode: Mode::RoundTrip,
            policy: TruncationPolicy::Drop,
            show_table: false,
            show_tree: false,
            verbose: Verbosity::Warnings,
        }
    }

    /// Copy parsed command line arguments into the options
    pub fn from_args(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.table = args.table;
        opts.show_table = args.show_table;
        opts.show_tree = args.show_tree;
        if args.strict {
            opts.policy = TruncationPolicy::Reject
        };
        match args.decode {
            Some(digits) => {
                opts.op_mode = Mode::Decode;
                opts.text = Some(digits);
            }
            None => opts.text = args.text,
        }
        opts.verbose = match (args.quiet, args.v) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Warnings,
            (false, 1) => Verbosity::Info,
            (false, 2) => Verbosity::Debug,
            _ => Verbosity::Trace,
        };
        opts
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the command line, set the log level and report the settings
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from_args(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    info!("---- Huffman Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.table {
        Some(s) => info!("Reading probabilities from the file {}", s),
        None => info!("Probability table will be prompted for"),
    }
    if opts.policy == TruncationPolicy::Reject {
        info!("Rejecting truncated encodings")
    };
    info!("---- Huffman Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn opts(args: &[&str]) -> HuffOpts {
        HuffOpts::from_args(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn defaults() {
        let o = opts(&["huffcode"]);
        assert_eq!(o.table, None);
        assert_eq!(o.text, None);
        assert_eq!(o.op_mode, Mode::RoundTrip);
        assert_eq!(o.policy, TruncationPolicy::Drop);
        assert_eq!(o.verbose, Verbosity::Warnings);
        assert!(!o.show_table && !o.show_tree);
    }

    #[test]
    fn round_trip_args() {
        let o = opts(&["huffcode", "letters.txt", "-t", "HELLO WORLD", "--show-table", "-vv"]);
        assert_eq!(o.table.as_deref(), Some("letters.txt"));
        assert_eq!(o.text.as_deref(), Some("HELLO WORLD"));
        assert!(o.show_table);
        assert_eq!(o.verbose, Verbosity::Debug);
        assert_eq!(o.verbose.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn decode_args() {
        let o = opts(&["huffcode", "letters.txt", "--decode", "0101 10", "--strict"]);
        assert_eq!(o.op_mode, Mode::Decode);
        assert_eq!(o.text.as_deref(), Some("0101 10"));
        assert_eq!(o.policy, TruncationPolicy::Reject);
    }

    #[test]
    fn text_and_decode_conflict() {
        assert!(Args::try_parse_from(&["huffcode", "-t", "A", "-d", "0"]).is_err());
    }

    #[test]
    fn quiet_wins() {
        let o = opts(&["huffcode", "-q", "-vvv"]);
        assert_eq!(o.verbose, Verbosity::Quiet);
        assert_eq!(o.verbose.level_filter(), LevelFilter::Off);
        assert_eq!(opts(&["huffcode", "-vvvv"]).verbose, Verbosity::Trace);
    }
}
