//! CLI harness for the Lua 2PDA recognizer.
//!
//! Reads a file (or `-` for stdin), runs it through
//! [`lua_2pda::lua::parse_chunk_with_debug`], and on failure prints the
//! error plus the offending line with a caret indicator, exiting
//! non-zero. `-v`/`-vv`/`-vvv` raise the engine's own tracing level (see
//! `spec.md` §6's debug interface); `RUST_LOG` separately controls what
//! the `log` crate actually prints.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use lua_2pda::error::locate;
use lua_2pda::lua::{automaton, parse_chunk_with_debug};

/// Recognize a Lua 5.3 source chunk.
#[derive(Parser, Debug)]
#[command(name = "lua-pda", version, about)]
struct Args {
    /// File to parse, or `-` to read from stdin. Required unless
    /// `--stats` is given on its own.
    file: Option<PathBuf>,

    /// Raise the engine's debug-tracing level (repeatable, up to -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print transition-table statistics. Combine with a file to also parse it.
    #[arg(long)]
    stats: bool,
}

fn read_input(path: &PathBuf) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.stats {
        let stats = automaton().stats();
        println!("Stats about the Lua 2PDA:");
        println!("Number of states:        {}", stats.states);
        println!("Number of transitions:   {}", stats.transitions);
        println!("Number of stack symbols: {}", stats.stack_symbols);
        if args.file.is_none() {
            return ExitCode::SUCCESS;
        }
    }

    let Some(file) = args.file else {
        eprintln!("lua-pda: no file given (pass a path, `-` for stdin, or --stats on its own)");
        return ExitCode::FAILURE;
    };

    let bytes = match read_input(&file) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("lua-pda: couldn't read {}: {e}", file.display());
            return ExitCode::FAILURE;
        }
    };

    let debug_level = args.verbose.min(3);
    match parse_chunk_with_debug(&bytes, debug_level) {
        Ok(()) => {
            println!("{}: ok", file.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let index = match &err {
                lua_2pda::error::ParseError::NoTransition { index, .. } => *index,
                lua_2pda::error::ParseError::UnknownOp { index, .. } => *index,
                lua_2pda::error::ParseError::StackOverflow { index, .. } => *index,
            };
            eprintln!("lua-pda: {err}");
            eprintln!("{}", locate(&bytes, index));
            ExitCode::FAILURE
        }
    }
}
