//! Byte by byte comparison of two files or streams.
//!
//! Each source is read on its own task and streamed over a bounded channel;
//! a single comparator takes one byte from each channel at a time and
//! reports the first difference, or every difference in long mode.
//!
//! ```no_run
//! use ark_cmp::{compare, CmpConfig, Mode, SourceSpec};
//! # async fn demo() -> ark_cmp::Result<()> {
//! let config = CmpConfig::new(
//!     SourceSpec::new("old.bin", 0),
//!     SourceSpec::new("new.bin", 0x10),
//! )
//! .with_mode(Mode::Long);
//! let verdict = compare(&config, &mut std::io::stderr()).await?;
//! std::process::exit(verdict.exit_code());
//! # }
//! ```
//!
//! Everything here must run inside a tokio runtime.

use std::io::Write;

pub mod cli;
pub mod compare;
pub mod config;
mod errors;
pub mod offset;
pub mod reader;
pub mod source;

pub use compare::{Comparator, Mode, Report, Step, Verdict};
pub use config::CmpConfig;
pub use errors::{CmpError, Result};
pub use offset::parse_offset;
pub use reader::{spawn_reader, Token};
pub use source::{Source, SourceSpec};

/// Open both sources of `config` and compare them, writing reports to
/// `out`. Fails before anything is compared if a source cannot be opened.
pub async fn compare<W: Write>(
    config: &CmpConfig,
    out: &mut W,
) -> Result<Verdict> {
    let [first, second] = &config.sources;
    let first = first.open().await?;
    let second = second.open().await?;

    compare_sources(first, second, config.mode, config.capacity, out).await
}

/// Compare two already opened sources.
pub async fn compare_sources<W: Write>(
    first: Source,
    second: Source,
    mode: Mode,
    capacity: usize,
    out: &mut W,
) -> Result<Verdict> {
    let names = [first.name().to_string(), second.name().to_string()];
    log::info!(
        "comparing {} (from {}) with {} (from {}) in {:?} mode",
        names[0],
        first.offset(),
        names[1],
        second.offset(),
        mode
    );

    let first = spawn_reader(first, capacity);
    let second = spawn_reader(second, capacity);
    Comparator::new(mode)
        .run(first, second, [names[0].as_str(), names[1].as_str()], out)
        .await
}
