pub mod bound;
pub mod orientation;
pub mod seq_path;
pub mod sequence;

// re-export for cleaner imports
pub use self::bound::{Bound, End};
pub use self::orientation::Orientation;
pub use self::seq_path::{PathRecord, SeqPath};
pub use self::sequence::{Sequence, SequenceBackend};
