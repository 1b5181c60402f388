use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use engram_core::RecordStore;

/// Write the word list as a Markdown checklist table, one row per record in
/// file order.
pub fn write_markdown(store: &RecordStore, output: &Path) -> Result<()> {
    let mut out = String::new();
    out.push_str("| Done | Word | Phonetics | Definition |\n");
    out.push_str("|:----:|:----|:----|:----|\n");

    for record in store.records() {
        writeln!(
            out,
            "| [ ] | {} | {} | {} |",
            record.headword, record.phonetics, record.definition
        )?;
    }

    fs::write(output, out).with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
