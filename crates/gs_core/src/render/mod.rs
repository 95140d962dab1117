//! Text renderer
//!
//! Renderers only ever see a [`StateSnapshot`]; they cannot reach the
//! environment. Failures are reported as [`RenderError`] and leave the
//! simulation untouched.
//!
//! ```text
//! +------+
//! |#..2.#|
//!  ..1...     <- goal-mouth rows have no side wall
//!  ......
//! |#....#|
//! +------+
//! step 3/50  ball: player1
//! ```

use std::io::Write;

use thiserror::Error;

use crate::engine::snapshot::StateSnapshot;
use crate::engine::types::Cell;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Renderer already closed")]
    Closed,
}

/// Read-only observer of simulation state
pub trait Renderer {
    fn render(&mut self, snapshot: &StateSnapshot) -> Result<(), RenderError>;

    /// Release whatever the renderer holds. Must be safe to call twice.
    fn close(&mut self);
}

// ============================================================================
// Frame layout
// ============================================================================

/// Draw a snapshot as text lines (no trailing newline on the last line)
pub fn frame(snapshot: &StateSnapshot) -> String {
    let grid = snapshot.grid;
    let border = format!("+{}+", "-".repeat(grid.width as usize));

    let mut out = String::with_capacity(((grid.width + 3) * (grid.height + 3)) as usize);
    out.push_str(&border);
    out.push('\n');

    for y in 0..grid.height {
        let side = if grid.is_goal_row(y) { ' ' } else { '|' };
        out.push(side);
        for x in 0..grid.width {
            let cell = Cell::new(x, y);
            let ch = match snapshot.occupant(cell) {
                Some(p) => char::from(b'0' + p.number()),
                None if snapshot.is_obstacle(cell) => '#',
                None => '.',
            };
            out.push(ch);
        }
        out.push(side);
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!(
        "step {}/{}  ball: {}",
        snapshot.step_count, snapshot.max_steps, snapshot.possession
    ));
    out
}

// ============================================================================
// AsciiRenderer
// ============================================================================

/// Writes text frames to any `Write` sink
pub struct AsciiRenderer<W: Write> {
    out: W,
    closed: bool,
    frames: usize,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, closed: false, frames: 0 }
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, snapshot: &StateSnapshot) -> Result<(), RenderError> {
        if self.closed {
            return Err(RenderError::Closed);
        }
        writeln!(self.out, "{}\n", frame(snapshot))?;
        self.frames += 1;
        Ok(())
    }

    fn close(&mut self) {
        if !self.closed {
            if let Err(err) = self.out.flush() {
                tracing::warn!(error = %err, "flush on renderer close failed");
            }
            self.closed = true;
        }
    }
}

// ============================================================================
// RenderSession
// ============================================================================

/// Scoped renderer: `close()` runs on drop, including early returns and
/// unwinding.
pub struct RenderSession<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
}

impl<'a, R: Renderer + ?Sized> RenderSession<'a, R> {
    pub fn new(renderer: &'a mut R) -> Self {
        Self { renderer }
    }

    pub fn render(&mut self, snapshot: &StateSnapshot) -> Result<(), RenderError> {
        self.renderer.render(snapshot)
    }
}

impl<R: Renderer + ?Sized> Drop for RenderSession<'_, R> {
    fn drop(&mut self) {
        self.renderer.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{EnvConfig, Variant};
    use crate::engine::env::GridSoccerEnv;
    use crate::engine::state::EpisodeState;
    use crate::engine::types::PlayerId;

    fn walled_env() -> GridSoccerEnv {
        let cfg = EnvConfig::small().with_variant(Variant::Walled).with_seed(3);
        let mut env = GridSoccerEnv::new(cfg).unwrap();
        env.load_state(EpisodeState::new(Cell::new(2, 1), Cell::new(3, 0), PlayerId::One))
            .unwrap();
        env
    }

    #[test]
    fn test_frame_layout() {
        let text = frame(&walled_env().snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "+------+",
                "|#..2.#|",
                " ..1... ",
                " ...... ",
                "|#....#|",
                "+------+",
                "step 0/50  ball: player1",
            ]
        );
    }

    #[test]
    fn test_renderer_writes_frames() {
        let env = walled_env();
        let mut renderer = AsciiRenderer::new(Vec::new());
        renderer.render(&env.snapshot()).unwrap();
        renderer.render(&env.snapshot()).unwrap();
        assert_eq!(renderer.frames_written(), 2);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.matches("step 0/50").count(), 2);
    }

    #[test]
    fn test_session_closes_on_drop() {
        let env = walled_env();
        let mut renderer = AsciiRenderer::new(Vec::new());
        {
            let mut session = RenderSession::new(&mut renderer);
            session.render(&env.snapshot()).unwrap();
        }
        assert!(renderer.is_closed());
        assert!(matches!(renderer.render(&env.snapshot()), Err(RenderError::Closed)));
    }

    #[test]
    fn test_render_failure_leaves_state_alone() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "display gone"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let env = walled_env();
        let before = *env.state();
        let mut renderer = AsciiRenderer::new(FailingSink);
        assert!(matches!(renderer.render(&env.snapshot()), Err(RenderError::Io(_))));
        assert_eq!(*env.state(), before);
    }
}
