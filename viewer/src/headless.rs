//! Non-interactive outputs: JSON lines on stdout and file traces.
//!
//! Both streams share the same line discipline. The first line is the
//! initial sequence as a bare JSON array, every following line is one
//! [`RunEvent`], so a recorded file replays exactly what a headless
//! consumer saw.

use std::io::{self, Write};
use std::path::Path;

use async_trait::async_trait;
use engine::RunEvent;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::ViewerResult;
use crate::traits::Frontend;

/// Frontend that prints one JSON line per event to stdout.
pub struct JsonRenderer {
    out: io::Stdout,
}

impl JsonRenderer {
    /// Opens the stream by printing the initial sequence.
    pub fn new(values: &[u32]) -> ViewerResult<Self> {
        let mut out = io::stdout();
        let header = serde_json::to_string(values)?;
        writeln!(out, "{header}")?;
        Ok(Self { out })
    }
}

#[async_trait]
impl Frontend for JsonRenderer {
    async fn handle_event(&mut self, event: RunEvent) -> ViewerResult<()> {
        let line = serde_json::to_string(&event)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    async fn finish(&mut self) -> ViewerResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the run trace to a file, one JSON line per event.
///
/// The target is truncated on creation, so a path can be reused across
/// runs and always holds a single complete trace.
pub struct TraceRecorder {
    file: File,
}

impl TraceRecorder {
    pub async fn create(path: &Path, values: &[u32]) -> ViewerResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)
            .await?;
        let mut recorder = Self { file };
        let header = serde_json::to_string(values)?;
        recorder.write_line(&header).await?;
        Ok(recorder)
    }

    pub async fn record(&mut self, event: &RunEvent) -> ViewerResult<()> {
        let line = serde_json::to_string(event)?;
        self.write_line(&line).await
    }

    pub async fn finish(mut self) -> ViewerResult<()> {
        self.file.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, line: &str) -> ViewerResult<()> {
        self.file.write_all(line.as_bytes()).await?;
        self.file.write_all(b"\n").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{AnimationStep, RunStats};

    #[tokio::test]
    async fn test_recorder_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");

        let mut recorder = TraceRecorder::create(&path, &[5, 3]).await.unwrap();
        recorder
            .record(&RunEvent::Step(AnimationStep::Compare { i: 0, j: 1 }))
            .await
            .unwrap();
        recorder
            .record(&RunEvent::Completed {
                values: vec![3, 5],
                stats: RunStats::default(),
            })
            .await
            .unwrap();
        recorder.finish().await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let mut lines = raw.lines();

        let header: Vec<u32> = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(header, vec![5, 3]);

        let first: RunEvent = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(first, RunEvent::Step(AnimationStep::Compare { i: 0, j: 1 }));

        let last: RunEvent = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert!(last.is_terminal());
        assert!(lines.next().is_none());
    }

    #[tokio::test]
    async fn test_recorder_truncates_previous_trace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");

        let recorder = TraceRecorder::create(&path, &[1, 2, 3]).await.unwrap();
        recorder.finish().await.unwrap();

        let recorder = TraceRecorder::create(&path, &[9]).await.unwrap();
        recorder.finish().await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.lines().count(), 1);
        let header: Vec<u32> = serde_json::from_str(raw.lines().next().unwrap()).unwrap();
        assert_eq!(header, vec![9]);
    }
}
