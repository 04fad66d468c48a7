// 8.0: the evaluation layer. one ChartLens per mounted chart, a LensBook
// keyed by token symbol routing feed updates to the right chart.
// deterministic and single-writer with no external I/O.

mod book;
mod core;
mod frame;

pub use self::book::LensBook;
pub use self::core::ChartLens;
pub use self::frame::{LensError, LensFrame};
