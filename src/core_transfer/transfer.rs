/// Progress of one data transfer.
#[derive(Debug, Clone)]
pub struct Transfer {
    expected_size: Option<u64>,
    bytes_moved: u64,
}

impl Transfer {
    pub fn new(expected_size: Option<u64>) -> Self {
        Self {
            expected_size,
            bytes_moved: 0,
        }
    }

    pub fn record(&mut self, n: usize) {
        self.bytes_moved += n as u64;
    }

    /// True once the announced size has been moved. Transfers without a
    /// known size only finish at end of stream.
    pub fn is_complete(&self) -> bool {
        self.expected_size
            .map_or(false, |expected| self.bytes_moved >= expected)
    }

    /// Size of the next read: never more than what is still expected.
    pub fn next_chunk(&self, capacity: usize) -> usize {
        match self.expected_size {
            Some(expected) => {
                let remaining = expected.saturating_sub(self.bytes_moved);
                capacity.min(usize::try_from(remaining).unwrap_or(usize::MAX))
            }
            None => capacity,
        }
    }

    pub fn bytes_moved(&self) -> u64 {
        self.bytes_moved
    }

    pub fn expected_size(&self) -> Option<u64> {
        self.expected_size
    }
}
