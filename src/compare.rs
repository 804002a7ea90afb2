//! Lockstep comparison of two byte channels.
//!
//! [`Comparator::step`] decides what a single pair of tokens means for the
//! comparison, and [`Comparator::run`] drives it over two channels,
//! writing reports as it goes.

use std::fmt;
use std::io::Write;

use crate::reader::{ByteChannel, Token};
use crate::Result;

/// How much to say about the differences found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Nothing is printed, only the exit status tells the outcome
    Quiet,
    /// First difference with its line number
    Lines,
    /// Every differing byte, until one side runs out
    Long,
    /// First difference only
    #[default]
    Default,
}

impl Mode {
    /// Resolve command line flags, first match wins: silent, lines, long.
    pub fn from_flags(silent: bool, lines: bool, long: bool) -> Self {
        if silent {
            Mode::Quiet
        } else if lines {
            Mode::Lines
        } else if long {
            Mode::Long
        } else {
            Mode::Default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Equal,
    Differ,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Equal => 0,
            Verdict::Differ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// Position of the pair being examined. Both counters are 1-based and
/// relative to where each source started, not to the start of the files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub char_number: u64,
    pub line_number: u64,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            char_number: 1,
            line_number: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Char {
        char_number: u64,
    },
    Lines {
        char_number: u64,
        line_number: u64,
    },
    Byte {
        char_number: u64,
        first: u8,
        second: u8,
    },
    Eof(Side),
}

impl Report {
    /// Render the report with the source names as the user gave them
    pub fn display<'a>(
        &'a self,
        names: [&'a str; 2],
    ) -> impl fmt::Display + 'a {
        Rendered {
            report: self,
            names,
        }
    }
}

struct Rendered<'a> {
    report: &'a Report,
    names: [&'a str; 2],
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.names;
        match *self.report {
            Report::Char { char_number } => {
                write!(f, "{} {} differ: char {}", first, second, char_number)
            }
            Report::Lines {
                char_number,
                line_number,
            } => write!(
                f,
                "{} {} differ: char {} line {}",
                first, second, char_number, line_number
            ),
            Report::Byte {
                char_number,
                first: a,
                second: b,
            } => write!(f, "{:>8} {:02o} {:02o}", char_number, a, b),
            Report::Eof(Side::First) => write!(f, "EOF on {}", first),
            Report::Eof(Side::Second) => write!(f, "EOF on {}", second),
        }
    }
}

/// Outcome of examining one pair of tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Same byte on both sides
    Advance,
    /// Print the report and keep comparing
    Continue(Report),
    /// Comparison is over
    Finish(Verdict, Option<Report>),
}

pub struct Comparator {
    mode: Mode,
    cursor: Cursor,
    differences: u64,
}

impl Comparator {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            cursor: Cursor::default(),
            differences: 0,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn step(&mut self, first: Token, second: Token) -> Step {
        let Cursor {
            char_number,
            line_number,
        } = self.cursor;

        let step = match (first, second) {
            (Token::End, Token::End) if self.differences > 0 => {
                Step::Finish(Verdict::Differ, None)
            }
            (Token::End, Token::End) => Step::Finish(Verdict::Equal, None),
            (a, b) if a == b => Step::Advance,
            (a, b) => match self.mode {
                Mode::Quiet => Step::Finish(Verdict::Differ, None),
                Mode::Lines => Step::Finish(
                    Verdict::Differ,
                    Some(Report::Lines {
                        char_number,
                        line_number,
                    }),
                ),
                Mode::Long => match (a, b) {
                    (Token::Byte(x), Token::Byte(y)) => {
                        self.differences += 1;
                        Step::Continue(Report::Byte {
                            char_number,
                            first: x,
                            second: y,
                        })
                    }
                    (Token::End, _) => Step::Finish(
                        Verdict::Differ,
                        Some(Report::Eof(Side::First)),
                    ),
                    (_, Token::End) => Step::Finish(
                        Verdict::Differ,
                        Some(Report::Eof(Side::Second)),
                    ),
                },
                Mode::Default => Step::Finish(
                    Verdict::Differ,
                    Some(Report::Char { char_number }),
                ),
            },
        };

        if !matches!(step, Step::Finish(..)) {
            self.cursor.char_number += 1;
            // lines are counted on the first source only
            if first == Token::Byte(b'\n') {
                self.cursor.line_number += 1;
            }
        }
        step
    }

    /// Compare the two channels pair by pair until a verdict is reached.
    /// A read error on either side aborts the comparison.
    pub async fn run<W: Write>(
        mut self,
        mut first: ByteChannel,
        mut second: ByteChannel,
        names: [&str; 2],
        out: &mut W,
    ) -> Result<Verdict> {
        loop {
            let (a, b) = tokio::join!(first.recv(), second.recv());
            let a = a.transpose()?.unwrap_or(Token::End);
            let b = b.transpose()?.unwrap_or(Token::End);

            match self.step(a, b) {
                Step::Advance => {}
                Step::Continue(report) => {
                    writeln!(out, "{}", report.display(names))?;
                }
                Step::Finish(verdict, report) => {
                    if let Some(report) = report {
                        writeln!(out, "{}", report.display(names))?;
                    }
                    out.flush()?;
                    log::debug!(
                        "comparison finished at char {}: {:?}",
                        self.cursor.char_number,
                        verdict
                    );
                    return Ok(verdict);
                }
            }
        }
    }
}
