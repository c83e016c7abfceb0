mod collect;
mod restart;
mod round;
mod summary;

pub use self::collect::*;
pub use self::restart::*;
pub use self::round::*;
pub use self::summary::*;
