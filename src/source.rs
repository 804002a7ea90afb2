use std::io::{self, Cursor, SeekFrom};
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeekExt, ReadBuf, Stdin};

use crate::{CmpError, Result};

/// Name standing in for the standard input of the process
pub const STDIN_NAME: &str = "-";

/// What the user asked to compare: a name and where to start reading it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub name: String,
    pub offset: u64,
}

impl SourceSpec {
    pub fn new(name: impl Into<String>, offset: u64) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }

    pub fn is_stdin(&self) -> bool {
        self.name == STDIN_NAME
    }

    pub async fn open(&self) -> Result<Source> {
        let input = if self.is_stdin() {
            Input::Stdin(tokio::io::stdin())
        } else {
            let file = File::open(&self.name).await.map_err(|source| {
                CmpError::Open {
                    name: self.name.clone(),
                    source,
                }
            })?;
            Input::File(file)
        };
        log::debug!("opened {} at offset {}", self.name, self.offset);

        Ok(Source {
            spec: self.clone(),
            input,
        })
    }
}

/// An opened byte producer, not yet positioned at its offset
pub enum Input {
    File(File),
    Stdin(Stdin),
    Memory(Cursor<Vec<u8>>),
}

impl Input {
    /// Move forward to `offset`. Stdin cannot seek, so the bytes in front
    /// of the offset are read and thrown away.
    pub(crate) async fn advance(&mut self, offset: u64) -> io::Result<()> {
        if offset == 0 {
            return Ok(());
        }

        match self {
            Input::File(file) => {
                file.seek(SeekFrom::Start(offset)).await?;
            }
            Input::Memory(cursor) => cursor.set_position(offset),
            Input::Stdin(stdin) => {
                let mut skipped = (&mut *stdin).take(offset);
                let discarded =
                    tokio::io::copy(&mut skipped, &mut tokio::io::sink())
                        .await?;
                if discarded < offset {
                    log::trace!(
                        "stdin ended after {} of {} skipped bytes",
                        discarded,
                        offset
                    );
                }
            }
        }
        Ok(())
    }
}

impl AsyncRead for Input {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Input::File(file) => Pin::new(file).poll_read(cx, buf),
            Input::Stdin(stdin) => Pin::new(stdin).poll_read(cx, buf),
            Input::Memory(cursor) => Pin::new(cursor).poll_read(cx, buf),
        }
    }
}

/// One side of a comparison
pub struct Source {
    spec: SourceSpec,
    input: Input,
}

impl Source {
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        offset: u64,
    ) -> Self {
        Self {
            spec: SourceSpec::new(name, offset),
            input: Input::Memory(Cursor::new(bytes.into())),
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn offset(&self) -> u64 {
        self.spec.offset
    }

    pub(crate) fn into_parts(self) -> (SourceSpec, Input) {
        (self.spec, self.input)
    }
}
