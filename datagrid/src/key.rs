#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type IdSet<'a> = HashSet<&'a str>;
#[cfg(not(feature = "std"))]
pub(crate) type IdSet<'a> = BTreeSet<&'a str>;
