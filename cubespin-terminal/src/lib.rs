//! Terminal animation loop for the rotating cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use cubespin_core::VertexService;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::WireframeRenderer;

/// Degrees added to the angle on every tick
pub const ANGLE_STEP: i64 = 2;
/// Milliseconds between ticks unless configured otherwise
pub const DEFAULT_TEMPO_MS: u64 = 200;
/// Fastest allowed tick interval in milliseconds
pub const MIN_TEMPO_MS: u64 = 10;
/// Tempo change per key press in milliseconds
pub const TEMPO_STEP_MS: u64 = 10;

/// Angle and tick interval of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    angle: i64,
    tempo_ms: u64,
}

impl Animation {
    /// The start angle is brought into [0, 360)
    pub fn new(angle: i64, tempo_ms: u64) -> Self {
        Self {
            angle: angle.rem_euclid(360),
            tempo_ms: tempo_ms.max(MIN_TEMPO_MS),
        }
    }

    pub fn angle(&self) -> i64 {
        self.angle
    }

    pub fn tempo(&self) -> Duration {
        Duration::from_millis(self.tempo_ms)
    }

    /// Step the angle forward, wrapping to 0 once a full turn is reached
    pub fn advance(&mut self) {
        self.angle += ANGLE_STEP;
        if self.angle >= 360 {
            self.angle = 0;
        }
    }

    pub fn faster(&mut self) {
        self.tempo_ms = self.tempo_ms.saturating_sub(TEMPO_STEP_MS).max(MIN_TEMPO_MS);
    }

    pub fn slower(&mut self) {
        self.tempo_ms += TEMPO_STEP_MS;
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0, DEFAULT_TEMPO_MS)
    }
}

/// Main application struct for terminal cube rendering
pub struct TerminalApp {
    service: VertexService,
    animation: Animation,
    renderer: WireframeRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(service: VertexService, animation: Animation) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            service,
            animation,
            // Top row is the status line
            renderer: WireframeRenderer::new(width as usize, height.saturating_sub(1) as usize),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            self.render()?;
            self.animation.advance();

            // Wait out the tick, handling keys as they arrive
            loop {
                let elapsed = frame_start.elapsed();
                let tempo = self.animation.tempo();
                if elapsed >= tempo || !self.running {
                    break;
                }
                if event::poll(tempo - elapsed)? {
                    self.handle_input()?;
                }
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('+') | KeyCode::Char('f') => {
                    self.animation.faster();
                }
                KeyCode::Char('-') | KeyCode::Char('s') => {
                    self.animation.slower();
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.service.compute_frame(self.animation.angle());

        self.renderer.clear();
        self.renderer.render_frame(&frame);

        let mut stdout = stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(format!(
                "cubespin | {} | angle: {:>3} | tempo: {} ms | +/f=Faster -/s=Slower Q=Quit",
                frame.server_name,
                frame.angle,
                self.animation.tempo().as_millis()
            )),
            ResetColor,
            cursor::MoveTo(0, 1)
        )?;

        self.renderer.draw(&mut stdout)?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_at_full_turn() {
        let mut animation = Animation::new(356, DEFAULT_TEMPO_MS);
        animation.advance();
        assert_eq!(animation.angle(), 358);
        animation.advance();
        assert_eq!(animation.angle(), 0);
    }

    #[test]
    fn test_tempo_floor() {
        let mut animation = Animation::new(0, 25);
        animation.faster();
        assert_eq!(animation.tempo(), Duration::from_millis(15));
        animation.faster();
        assert_eq!(animation.tempo(), Duration::from_millis(MIN_TEMPO_MS));
        animation.faster();
        assert_eq!(animation.tempo(), Duration::from_millis(MIN_TEMPO_MS));
    }

    #[test]
    fn test_slower() {
        let mut animation = Animation::default();
        animation.slower();
        assert_eq!(animation.tempo(), Duration::from_millis(210));
    }

    #[test]
    fn test_start_angle_is_normalized() {
        assert_eq!(Animation::new(-2, DEFAULT_TEMPO_MS).angle(), 358);
        assert_eq!(Animation::new(725, DEFAULT_TEMPO_MS).angle(), 5);

        let mut animation = Animation::new(i64::MAX, DEFAULT_TEMPO_MS);
        assert_eq!(animation.angle(), i64::MAX % 360);
        for _ in 0..400 {
            animation.advance();
            assert!((0..360).contains(&animation.angle()));
        }
    }

    #[test]
    fn test_new_clamps_tempo() {
        assert_eq!(Animation::new(0, 0).tempo(), Duration::from_millis(MIN_TEMPO_MS));
    }
}
