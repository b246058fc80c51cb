//! Output adaptation for merged documents.
//!
//! The merged bytes of one call flow through [`deliver`] exactly once and come
//! back in the representation the [`OutputTarget`] asks for:
//!
//! - [`OutputTarget::Buffer`] returns the bytes unchanged
//! - [`OutputTarget::Stream`] returns a [`MergedStream`] already closed for writing
//! - [`OutputTarget::File`] writes the bytes to disk and still returns them
//!
//! The console formatter used by the command-line front end lives in
//! [`formatter`].

pub mod formatter;

pub use formatter::{OutputFormatter, Verbosity};

use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, DuplexStream, ReadBuf};

use crate::config::OutputTarget;
use crate::error::Result;
use crate::io::PdfWriter;

/// The merged document in the representation the caller asked for.
#[derive(Debug)]
pub enum MergeOutput {
    /// Merged bytes held in memory.
    Buffer(Vec<u8>),
    /// A readable stream over the merged bytes.
    Stream(MergedStream),
    /// Merged bytes, after they were written to `path`.
    File {
        /// Where the bytes were written.
        path: PathBuf,
        /// The bytes that were written.
        bytes: Vec<u8>,
    },
}

impl MergeOutput {
    /// Returns the in-memory bytes for buffer and file outputs.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(bytes) | Self::File { bytes, .. } => Some(bytes.as_slice()),
            Self::Stream(_) => None,
        }
    }

    /// Returns the output path for file outputs.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Buffer(_) | Self::Stream(_) => None,
        }
    }

    /// Consume the output and collect the merged bytes, draining the stream
    /// if there is one.
    pub async fn into_bytes(self) -> io::Result<Vec<u8>> {
        match self {
            Self::Buffer(bytes) | Self::File { bytes, .. } => Ok(bytes),
            Self::Stream(stream) => stream.into_bytes().await,
        }
    }
}

/// A duplex stream pre-filled with merged bytes and closed for writing.
///
/// Reading to EOF yields the full buffer. Writes fail with
/// [`io::ErrorKind::BrokenPipe`] because the feeding half is already closed.
#[derive(Debug)]
pub struct MergedStream {
    inner: DuplexStream,
    len: usize,
}

impl MergedStream {
    /// Push `bytes` into a fresh duplex pipe and close its writing half.
    pub async fn from_bytes(bytes: &[u8]) -> io::Result<Self> {
        let (mut feeder, inner) = tokio::io::duplex(bytes.len().max(1));
        feeder.write_all(bytes).await?;
        feeder.shutdown().await?;
        drop(feeder);

        Ok(Self {
            inner,
            len: bytes.len(),
        })
    }

    /// Number of bytes the stream was filled with.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stream was filled with an empty buffer.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the stream to completion.
    pub async fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.len);
        self.inner.read_to_end(&mut bytes).await?;
        Ok(bytes)
    }
}

impl AsyncRead for MergedStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

impl AsyncWrite for MergedStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.inner).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_shutdown(cx)
    }
}

/// Hand merged bytes back in the representation `target` asks for.
///
/// # Errors
///
/// Returns [`crate::PdfMergeError::FailedToWrite`] if a file target cannot be
/// written.
pub async fn deliver(target: &OutputTarget, bytes: Vec<u8>) -> Result<MergeOutput> {
    match target {
        OutputTarget::Buffer => Ok(MergeOutput::Buffer(bytes)),
        OutputTarget::Stream => Ok(MergeOutput::Stream(MergedStream::from_bytes(&bytes).await?)),
        OutputTarget::File(path) => {
            let (bytes, stats) = PdfWriter::new().write(bytes, path).await?;
            tracing::debug!(
                path = %stats.output_path.display(),
                size = stats.file_size,
                "wrote merged output"
            );
            Ok(MergeOutput::File {
                path: path.clone(),
                bytes,
            })
        }
    }
}
