#[cfg(feature = "core")]
#[doc(inline)]
pub use seqpath_core as core;

#[cfg(feature = "io")]
#[doc(inline)]
pub use seqpath_io as io;
