use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::error::{HuffError, Result};
use crate::huffman_coding::node::SymbolWeight;

/// Read a probability table file. See `parse_table` for the format.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Vec<SymbolWeight>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    info!("Reading symbol probabilities from {}", path.display());
    parse_table(BufReader::new(file))
}

/// Parse one `<symbol>\t<weight>` pair per line. The symbol is the first character of the first
/// field, the weight is the second field. Further fields are ignored and blank lines are skipped.
pub fn parse_table<R: BufRead>(reader: R) -> Result<Vec<SymbolWeight>> {
    let mut pairs = vec![];
    let mut seen = FxHashSet::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let symbol = fields
            .next()
            .and_then(|field| field.chars().next())
            .ok_or_else(|| malformed(line_no, "missing symbol"))?;
        let weight_field = fields
            .next()
            .ok_or_else(|| malformed(line_no, "expected <symbol><TAB><weight>"))?;
        let weight = weight_field.trim().parse::<f64>().map_err(|e| {
            malformed(line_no, format!("bad weight {:?}: {}", weight_field, e))
        })?;

        let pair = SymbolWeight::new(symbol, weight)?;
        if !seen.insert(symbol) {
            return Err(HuffError::DuplicateSymbol(symbol));
        }
        debug!("Read {}", pair);
        pairs.push(pair);
    }

    Ok(pairs)
}

fn malformed<S: Into<String>>(line: usize, reason: S) -> HuffError {
    HuffError::MalformedLine {
        line,
        reason: reason.into(),
    }
}
