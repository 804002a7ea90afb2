use crate::compare::Mode;
use crate::reader::DEFAULT_CAPACITY;
use crate::source::SourceSpec;

/// Everything a comparison run needs, resolved once before it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmpConfig {
    pub mode: Mode,
    pub sources: [SourceSpec; 2],
    /// Bytes each reader may run ahead of the comparison
    pub capacity: usize,
}

impl CmpConfig {
    pub fn new(first: SourceSpec, second: SourceSpec) -> Self {
        Self {
            mode: Mode::default(),
            sources: [first, second],
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn names(&self) -> [&str; 2] {
        [self.sources[0].name.as_str(), self.sources[1].name.as_str()]
    }
}
