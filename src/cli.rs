use clap::Parser;

use crate::compare::Mode;
use crate::config::CmpConfig;
use crate::offset::parse_offset;
use crate::reader::DEFAULT_CAPACITY;
use crate::source::SourceSpec;

#[derive(Parser, Debug)]
#[clap(name = "ark-cmp", version)]
#[clap(about = "Compare two files byte by byte", long_about = None)]
pub struct Cli {
    #[clap(
        short = 'l',
        long,
        action,
        help = "Print the byte number (decimal) and the differing bytes \
                (octal) for each difference"
    )]
    pub long: bool,

    #[clap(
        short = 'L',
        long,
        action,
        help = "Print the line number of the first differing byte"
    )]
    pub lines: bool,

    #[clap(
        short = 's',
        long,
        action,
        help = "Print nothing for differing files, only set the exit status"
    )]
    pub silent: bool,

    #[clap(
        long,
        default_value_t = DEFAULT_CAPACITY,
        value_parser = parse_capacity,
        help = "Bytes a reader may buffer ahead of the comparison"
    )]
    pub capacity: usize,

    #[clap(value_name = "SOURCE1", help = "First file, - for standard input")]
    pub first: String,

    #[clap(value_name = "SOURCE2", help = "Second file, - for standard input")]
    pub second: String,

    #[clap(
        value_name = "OFFSET1",
        value_parser = parse_offset,
        help = "Start of the first file: 0x.. hex, 0.. octal, else decimal"
    )]
    pub first_offset: Option<u64>,

    #[clap(
        value_name = "OFFSET2",
        value_parser = parse_offset,
        help = "Start of the second file"
    )]
    pub second_offset: Option<u64>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        Mode::from_flags(self.silent, self.lines, self.long)
    }

    pub fn config(&self) -> CmpConfig {
        CmpConfig::new(
            SourceSpec::new(&self.first, self.first_offset.unwrap_or(0)),
            SourceSpec::new(&self.second, self.second_offset.unwrap_or(0)),
        )
        .with_mode(self.mode())
        .with_capacity(self.capacity)
    }
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let argv = std::iter::once("ark-cmp").chain(args.iter().copied());
        Cli::try_parse_from(argv)
    }

    #[test]
    fn two_sources_default_to_zero_offsets() {
        let config = parse(&["a", "b"]).unwrap().config();
        assert_eq!(config.mode, Mode::Default);
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(
            config.sources,
            [SourceSpec::new("a", 0), SourceSpec::new("b", 0)]
        );
    }

    #[test]
    fn offsets_apply_to_their_own_source() {
        let config = parse(&["a", "b", "0x1A"]).unwrap().config();
        assert_eq!(config.sources[0].offset, 26);
        assert_eq!(config.sources[1].offset, 0);

        let config = parse(&["-", "b", "0", "032"]).unwrap().config();
        assert!(config.sources[0].is_stdin());
        assert_eq!(config.sources[0].offset, 0);
        assert_eq!(config.sources[1].offset, 26);
    }

    #[rstest]
    #[case(&["-l", "a", "b"], Mode::Long)]
    #[case(&["-L", "a", "b"], Mode::Lines)]
    #[case(&["-s", "a", "b"], Mode::Quiet)]
    #[case(&["-lLs", "a", "b"], Mode::Quiet)]
    #[case(&["-l", "-L", "a", "b"], Mode::Lines)]
    fn flags_resolve_to_one_mode(#[case] args: &[&str], #[case] mode: Mode) {
        assert_eq!(parse(args).unwrap().mode(), mode);
    }

    #[rstest]
    #[case(&["a"])]
    #[case(&["a", "b", "1", "2", "3"])]
    #[case(&["a", "b", "0xZZ"])]
    #[case(&["a", "b", "1", "nine"])]
    #[case(&["--capacity", "0", "a", "b"])]
    fn usage_errors(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
