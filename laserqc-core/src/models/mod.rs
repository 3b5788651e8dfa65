pub mod archive;
pub mod histogram1d;
pub mod histogram2d;

// re-export for cleaner imports
pub use self::archive::{MonitorCollection, MonitorObject, QcArchive, QcObject};
pub use self::histogram1d::{Histogram1D, Statistics};
pub use self::histogram2d::Histogram2D;
