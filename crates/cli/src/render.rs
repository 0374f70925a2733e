//! Plain-text rendering of a crossing log.

use std::io::{self, Write};

use crossing::{Bank, CrossingLog};

/// Print every snapshot (origin, bridge, destination in speed order) and the total.
pub fn write_log<W: Write>(out: &mut W, log: &CrossingLog, quiet: bool) -> io::Result<()> {
    if !quiet {
        for snap in log.snapshots() {
            write_bank(out, "ORIGIN", snap.origin())?;
            write_bank(out, "BRIDGE", snap.bridge())?;
            write_bank(out, "DESTINATION", snap.destination())?;
            writeln!(out)?;
        }
    }
    writeln!(out, "TOTAL TIME {}", log.total_time())
}

fn write_bank<W: Write>(out: &mut W, label: &str, bank: &Bank) -> io::Result<()> {
    let names: Vec<&str> = bank.members().map(|p| p.name()).collect();
    if names.is_empty() {
        writeln!(out, "{label}:")
    } else {
        writeln!(out, "{label}: {}", names.join(" "))
    }
}
