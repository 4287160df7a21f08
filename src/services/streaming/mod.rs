//! Word-by-word reveal of completed replies

mod buffer;

pub use buffer::StreamingBuffer;
