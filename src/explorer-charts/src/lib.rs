mod error;
pub use error::ChartError;

mod figure;
pub use figure::{Figure, Ohlc, Plot, Series, Stack, XAxis};

mod render;
