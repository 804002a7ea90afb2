use tokio::io::{AsyncReadExt, BufReader};
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::source::{Input, Source, SourceSpec};
use crate::{CmpError, Result};

/// Capacity of a byte channel unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 8192;

/// An item on a byte channel. Exhaustion is its own variant so that no
/// byte value has to be reserved for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Byte(u8),
    End,
}

pub type ByteChannel = Receiver<Result<Token>>;

/// Start streaming `source` on its own task. The returned channel yields
/// every byte from the offset on, then either `Token::End` or the error
/// that stopped the reader.
pub fn spawn_reader(source: Source, capacity: usize) -> ByteChannel {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let (spec, input) = source.into_parts();
    tokio::spawn(emit(spec, input, tx));
    rx
}

async fn emit(spec: SourceSpec, mut input: Input, tx: Sender<Result<Token>>) {
    if spec.offset > 0 {
        log::debug!("positioning {} at byte {}", spec.name, spec.offset);
        if let Err(source) = input.advance(spec.offset).await {
            let _ = tx
                .send(Err(CmpError::Seek {
                    name: spec.name,
                    source,
                }))
                .await;
            return;
        }
    }

    let mut reader = BufReader::new(input);
    let mut emitted: u64 = 0;
    loop {
        let item = match reader.read_u8().await {
            Ok(byte) => Ok(Token::Byte(byte)),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                log::trace!(
                    "{}: end of stream after {} bytes",
                    spec.name,
                    emitted
                );
                Ok(Token::End)
            }
            Err(source) => Err(CmpError::Read {
                name: spec.name.clone(),
                source,
            }),
        };

        let last = !matches!(item, Ok(Token::Byte(_)));
        if tx.send(item).await.is_err() {
            // comparison is over, nobody is listening
            return;
        }
        if last {
            return;
        }
        emitted += 1;
    }
}
