pub mod chunk;
pub mod chunker;
pub mod driver;
pub mod pacer;
pub mod session;

pub use chunk::{count_words, Chunk};
pub use chunker::chunk_text;
pub use driver::PlainDriver;
pub use pacer::{chunk_delay, seconds_per_word, wpm_to_milliseconds, Pacer, PacingMode};
pub use session::ReadingSession;
