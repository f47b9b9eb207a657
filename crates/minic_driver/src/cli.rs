use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a program and print its syntax tree.
    Parse {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source instead
        /// of as the source file path.
        #[arg(long, short)]
        source: bool,

        /// How to print the syntax tree.
        #[arg(long, value_enum, default_value_t = Emit::Debug)]
        emit: Emit,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Rust debug formatting.
    Debug,
    Json,
}
