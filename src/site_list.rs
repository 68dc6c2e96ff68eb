//! Parsing of textual site lists fed to the `percolation` binary
//!
//! A site is written `row,col`, `row:col` or `row col`. Files hold one site per
//! line; blank lines and `#` comments are skipped.
use anyhow::{bail, Context, Result};
use std::io::BufRead;

/// Parse a single `row,col` / `row:col` / `row col` site
pub fn parse_site(s: &str) -> Result<(i64, i64)> {
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c == ':' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 2 {
        bail!("Invalid site '{s}': expected 'row,col'");
    }

    let row = parts[0]
        .parse::<i64>()
        .with_context(|| format!("Invalid row in site '{s}'"))?;
    let col = parts[1]
        .parse::<i64>()
        .with_context(|| format!("Invalid column in site '{s}'"))?;

    Ok((row, col))
}

/// Read sites from a reader, one per line
pub fn read_sites<R: BufRead>(reader: R) -> Result<Vec<(i64, i64)>> {
    let mut sites = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let site = parse_site(line).with_context(|| format!("Line {}", line_no + 1))?;
        sites.push(site);
    }

    Ok(sites)
}
