use std::io::{self, BufRead, Write};

use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};
use thiserror::Error;

use crate::error::PuzzleError;
use crate::frames::FrameWriter;
use crate::puzzle::{Move, PuzzleState};

/// Text-mode playback of a solution, one board per move.
pub struct Replay<'a, W: Write> {
    out: W,
    frames: Option<&'a mut FrameWriter>,
    pause: Option<Box<dyn BufRead + 'a>>,
}

impl<'a, W: Write> Replay<'a, W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames: None,
            pause: None,
        }
    }

    /// Also save every shown board through `frames`.
    pub fn with_frames(mut self, frames: &'a mut FrameWriter) -> Self {
        self.frames = Some(frames);
        self
    }

    /// Wait for a line on `input` after every board.
    pub fn with_pause(mut self, input: impl BufRead + 'a) -> Self {
        self.pause = Some(Box::new(input));
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn show(&mut self, state: &PuzzleState, caption: &str) -> io::Result<()> {
        queue!(
            self.out,
            PrintStyledContent(caption.bold()),
            Print("\n"),
            Print(state),
            Print("\n")
        )?;
        if let Some(frames) = self.frames.as_deref_mut() {
            frames.save(state, caption)?;
        }
        if let Some(input) = self.pause.as_mut() {
            queue!(self.out, Print("Press return for the next state...\n"))?;
            self.out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
        }
        self.out.flush()
    }

    /// Prints the path summary, the start board, then the board after each move.
    ///
    /// Returns the final state.
    pub fn play(
        &mut self,
        start: &PuzzleState,
        path: &[Move],
    ) -> Result<PuzzleState, ReplayError> {
        let labels: Vec<&str> = path.iter().map(Move::label).collect();
        queue!(
            self.out,
            Print(format!(
                "The algorithm found a path of {} moves: {:?}\n",
                path.len(),
                labels
            ))
        )?;
        self.show(start, "Starting State")?;

        let mut state = start.clone();
        for (i, &mv) in path.iter().enumerate() {
            state = state.result(mv)?;
            let caption = format!(
                "After {} move{}: {}",
                i + 1,
                if i > 0 { "s" } else { "" },
                mv
            );
            self.show(&state, &caption)?;
        }
        Ok(state)
    }
}

/// Failure while replaying a path.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error("failed to write replay output")]
    Io(#[from] io::Error),
}
