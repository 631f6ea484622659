//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io::{self, BufRead, Write};
use std::process::exit;

use huffcode::tools::cli::{huffopts_init, HuffOpts, Mode};
use huffcode::tools::prob_table::read_table;
use huffcode::{decode_with, encode, CodeTable, HuffError, HuffmanTree, Result};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<()> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let mut options = huffopts_init();
    println!("Huffman Coding");

    match run(&mut options) {
        Err(HuffError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            println!("File not found.");
            exit(1);
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
        Ok(()) => {
            info!("Done.\n");
            Ok(())
        }
    }
}

/// Build the code from the probability table, then encode and/or decode the line of text.
fn run(opts: &mut HuffOpts) -> Result<()> {
    let table_file = match opts.table.take() {
        Some(name) => name,
        None => prompt("Enter the name of the file with letters and probability: ")?,
    };
    let pairs = read_table(&table_file)?;

    println!("\nBuilding the Huffman tree ...");
    let tree = HuffmanTree::build(pairs)?;
    let codes = CodeTable::from_tree(&tree);
    println!("Huffman coding completed.\n");

    if opts.show_tree {
        tree.print_structure();
    }
    if opts.show_table {
        print!("{}", codes);
    }

    match opts.op_mode {
        Mode::RoundTrip => {
            let text = match opts.text.take() {
                Some(text) => text,
                None => prompt("Enter a line (uppercase letters only): ")?,
            };
            let encoded = encode(&text, &codes)?;
            println!("Here is the encoded line: {}", encoded);
            let decoded = decode_with(&encoded, &tree, opts.policy)?;
            println!("Here is the decoded line: {}", decoded);
        }
        Mode::Decode => {
            let digits = match opts.text.take() {
                Some(digits) => digits,
                None => prompt("Enter an encoded line (0, 1 and spaces only): ")?,
            };
            let decoded = decode_with(&digits, &tree, opts.policy)?;
            println!("Here is the decoded line: {}", decoded);
        }
    }
    Ok(())
}

/// Print a prompt and read one line from stdin, without the line ending.
fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
