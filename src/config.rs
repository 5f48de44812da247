//! Relay configuration

/// Configuration options shared by the publisher and subscriber loops
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Initial capacity of the record accumulation buffer (grows by doubling)
    pub initial_buffer_capacity: usize,

    /// Initial number of subscriber slots in the registry (grows by doubling)
    pub initial_subscriber_slots: usize,

    /// Scratch size for a single read from the input or upstream channel
    pub read_chunk_size: usize,

    /// Record delimiter byte
    pub delimiter: u8,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            initial_buffer_capacity: 128,
            initial_subscriber_slots: 32,
            read_chunk_size: 8 * 1024,
            delimiter: b'\n',
        }
    }
}

impl RelayConfig {
    /// Set the initial buffer capacity
    pub fn initial_buffer_capacity(mut self, capacity: usize) -> Self {
        self.initial_buffer_capacity = capacity.max(1);
        self
    }

    /// Set the initial number of subscriber slots
    pub fn initial_subscriber_slots(mut self, slots: usize) -> Self {
        self.initial_subscriber_slots = slots.max(1);
        self
    }

    /// Set the read chunk size
    pub fn read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size.max(1);
        self
    }

    /// Set the record delimiter byte
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
