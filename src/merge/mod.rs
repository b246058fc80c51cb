//! Merge orchestration.
//!
//! This module drives the external merge binary:
//! - [`command`] builds the invocation and quotes its arguments
//! - [`merger`] runs one merge call from validated input to delivered output
//!
//! # Examples
//!
//! ```no_run
//! use pdftk_merge::config::{Config, OutputTarget};
//! use pdftk_merge::merge::Merger;
//! use pdftk_merge::validation::InputFiles;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let files = InputFiles::new(["a.pdf", "b.pdf"])?;
//! let config = Config::default().with_output(OutputTarget::file("merged.pdf"));
//!
//! let output = Merger::new().merge(&files, &config).await?;
//! println!("Merged {} bytes", output.as_bytes().map_or(0, <[u8]>::len));
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod merger;

pub use command::{Invocation, MergeCommand, Platform, select_invocation};
pub use merger::Merger;
