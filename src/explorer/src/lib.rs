#[macro_use]
extern crate log;

pub mod html;

pub mod report;
pub use report::Report;

pub mod demo;
pub use demo::{DemoError, run_demo};

pub mod preview;
pub use preview::{HubSettings, PreviewError, PreviewOutcome, PreviewSource};

pub mod landing;
pub use landing::{LandingConfig, LandingPage};
