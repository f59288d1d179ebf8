// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Result Table Export
// ─────────────────────────────────────────────────────────────────────
//! Tab-separated export of sweep rows.
//!
//! Header: `idx n r alpha n_steps x_i order var`. Floats use the
//! shortest round-trip form (`3.6`, `1.0`, `1e-7`); non-finite values
//! are written as `NaN`, `inf`, `-inf`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use logistic_types::{LogisticResult, ResultRow};

/// Write header plus one line per row.
pub fn write_tsv<W: Write>(mut w: W, rows: &[ResultRow]) -> LogisticResult<()> {
    writeln!(w, "{}", ResultRow::HEADER.join("\t"))?;
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{:?}\t{:?}\t{}\t{:?}\t{:?}\t{:?}",
            row.idx, row.n, row.r, row.alpha, row.n_steps, row.x_i, row.order, row.var
        )?;
    }
    w.flush()?;
    Ok(())
}

/// Write to `path`, creating parent directories as needed.
pub fn write_tsv_file(path: impl AsRef<Path>, rows: &[ResultRow]) -> LogisticResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_tsv(BufWriter::new(file), rows)?;
    log::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
