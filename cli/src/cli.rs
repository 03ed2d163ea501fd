use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about, version, name = "xmlchars")]
/// Check strings and code points against the XML 1.0 character classes
pub struct Args {
    /// Edition of XML 1.0 to use
    ///
    /// Either ED4 (4th edition) or ED5 (5th edition).
    #[arg(
        short,
        long,
        global = true,
        default_value = "ED5",
        env = "XMLCHARS_EDITION"
    )]
    pub edition: String,
    /// Format of the log lines written to stderr
    ///
    /// The log level is set with the RUST_LOG environment variable and defaults to "warn".
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check if strings match an XML production
    ///
    /// Prints each input followed by "true" or "false".
    Check {
        /// Production to match like NAME, NMTOKEN or CHAR
        #[arg(short, long)]
        production: String,
        /// Strings to check
        ///
        /// If none is given, each line of stdin is checked.
        /// Inputs may start with "-" like "-bar".
        #[arg(allow_hyphen_values = true)]
        inputs: Vec<String>,
        /// Explain why the failing inputs do not match
        #[arg(long)]
        explain: bool,
        /// Exit with a failure status if an input does not match
        #[arg(long)]
        strict: bool,
    },
    /// List the character productions each code point belongs to
    Classify {
        /// Code points written U+XXXX, 0xXXXX or as a single character
        #[arg(required = true)]
        code_points: Vec<String>,
    },
    /// Print the code point ranges of a character production
    ///
    /// One range is printed per line using the XML grammar notation.
    Ranges {
        /// Single character production like NAME_START_CHAR or BASE_CHAR
        #[arg(short, long)]
        production: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    Text,
    /// One JSON object per line
    Json,
}
