use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::puzzle::PuzzleState;

/// Writes numbered text frames of the board into one directory.
///
/// The counter lives in the writer, so independent runs can each own one.
#[derive(Debug)]
pub struct FrameWriter {
    dir: PathBuf,
    count: usize,
}

impl FrameWriter {
    /// Creates `dir` (and its parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, count: 0 })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Writes `frame_NNNNN.txt` with the caption above the board.
    pub fn save(&mut self, state: &PuzzleState, caption: &str) -> io::Result<PathBuf> {
        let path = self.dir.join(format!("frame_{:05}.txt", self.count));
        fs::write(&path, format!("{}\n{}\n", caption, state))?;
        debug!("saved frame {}", path.display());
        self.count += 1;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_numbered_per_writer() {
        let dir = std::env::temp_dir()
            .join(format!("eight-puzzle-frames-{}", std::process::id()));
        let mut writer = FrameWriter::new(dir.join("run")).unwrap();
        let start = PuzzleState::fixture(0).unwrap();

        let first = writer.save(&start, "Starting State").unwrap();
        let goal = PuzzleState::goal(3).unwrap();
        let second = writer.save(&goal, "After 1 move: left").unwrap();

        assert_eq!(first.file_name().unwrap(), "frame_00000.txt");
        assert_eq!(second.file_name().unwrap(), "frame_00001.txt");
        assert_eq!(writer.count(), 2);

        let text = fs::read_to_string(&first).unwrap();
        assert!(text.starts_with("Starting State\n-------------\n| 1 |   | 2 |"));

        let other = FrameWriter::new(dir.join("other")).unwrap();
        assert_eq!(other.count(), 0);

        fs::remove_dir_all(&dir).unwrap();
    }
}
