use std::convert::Infallible;
use std::io::{self, BufWriter, Write};
use std::time::Duration;

use log::{debug, trace};
use thiserror::Error;

use crate::life::LifeGrid;

/// Cursor home, then clear the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
/// Full-width asterisk, two terminal columns wide.
pub const ALIVE_GLYPH: &str = "\u{ff0a}";
pub const DEAD_GLYPH: &str = "  ";
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

const PAGE_SIZE: usize = 4096;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write frame {generation}")]
    Write {
        generation: u64,
        #[source]
        source: io::Error,
    },
    #[error("failed to flush frame {generation}")]
    Flush {
        generation: u64,
        #[source]
        source: io::Error,
    },
}

/// Where the render loop goes to wait between frames.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Upper bound on the bytes in one frame of a `width` x `height` grid.
pub fn frame_len(width: usize, height: usize) -> usize {
    let cell = ALIVE_GLYPH.len().max(DEAD_GLYPH.len());
    CLEAR_SCREEN.len() + height * (width * cell + 1)
}

/// Output buffer size: whole pages, with at least one to spare past a frame.
pub fn buffer_capacity(width: usize, height: usize) -> usize {
    (frame_len(width, height) / PAGE_SIZE + 1) * PAGE_SIZE
}

/// Serialize the current generation of `grid`, clear sequence included.
pub fn write_frame<W: Write>(grid: &LifeGrid, out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    for row in grid.rows() {
        for &alive in row {
            let glyph = if alive { ALIVE_GLYPH } else { DEAD_GLYPH };
            out.write_all(glyph.as_bytes())?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Owns the board and drives it: draw, step, sleep, forever.
pub struct Renderer<W: Write, C: Clock> {
    grid: LifeGrid,
    output: BufWriter<W>,
    clock: C,
    generation: u64,
}

impl<W: Write, C: Clock> Renderer<W, C> {
    pub fn new(grid: LifeGrid, output: W, clock: C) -> Self {
        let capacity = buffer_capacity(grid.width(), grid.height());
        Self {
            grid,
            output: BufWriter::with_capacity(capacity, output),
            clock,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    /// The wrapped sink. Everything up to the last completed tick has been flushed to it.
    pub fn output(&self) -> &W {
        self.output.get_ref()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of frames drawn so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn output_capacity(&self) -> usize {
        self.output.capacity()
    }

    /// Draw the current generation, then advance the board and wait out the frame.
    pub fn tick(&mut self) -> Result<(), RenderError> {
        let generation = self.generation;
        write_frame(&self.grid, &mut self.output)
            .map_err(|source| RenderError::Write { generation, source })?;
        self.output
            .flush()
            .map_err(|source| RenderError::Flush { generation, source })?;
        trace!("frame {generation} flushed");

        self.grid.update();
        self.generation += 1;
        debug!("generation {}: population {}", self.generation, self.grid.population());

        self.clock.sleep(FRAME_INTERVAL);
        Ok(())
    }

    /// Tick until the output fails. There is no other way out.
    pub fn run(&mut self) -> Result<Infallible, RenderError> {
        loop {
            self.tick()?;
        }
    }
}
