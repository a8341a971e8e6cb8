//! Terminal frontend (ratatui + crossterm)
//!
//! Controls: Left/`a` rotate counter-clockwise, Right/`d` clockwise,
//! `q`/Esc/Ctrl-C quit.

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use super::Frontend;
use super::autopilot::Autopilot;
use super::input::{Key, KeyState};
use crate::error::FrontendError;
use crate::renderer::RenderRequest;
use crate::renderer::shapes::{flip_y, paddle_band, view_bounds};
use crate::sim::{GameState, TickInput};

/// Extra world units around the paddle band
const VIEW_MARGIN: f32 = 15.0;

/// Interactive session on the user's terminal
pub struct TerminalFrontend {
    terminal: DefaultTerminal,
    keys: KeyState,
    autopilot: Option<Autopilot>,
    enhanced_keys: bool,
    title: String,
}

impl TerminalFrontend {
    /// Take over the terminal (raw mode, alternate screen)
    pub fn new(title: impl Into<String>, autopilot: bool) -> Result<Self, FrontendError> {
        // Built before any further setup so that an early return restores the terminal
        let mut frontend = Self {
            terminal: ratatui::try_init()?,
            keys: KeyState::new(false),
            autopilot: autopilot.then_some(Autopilot),
            enhanced_keys: false,
            title: title.into(),
        };

        if matches!(crossterm::terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            frontend.enhanced_keys = true;
            frontend.keys = KeyState::new(true);
        }
        log::info!("Terminal ready (key release events: {})", frontend.enhanced_keys);

        Ok(frontend)
    }
}

/// Feed one key event into `keys`; returns true when the key asks to quit
fn map_key(keys: &mut KeyState, key: KeyEvent, now: Instant) -> bool {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = key;
    let is_press = kind == KeyEventKind::Press;

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => is_press,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => is_press,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            keys.apply(Key::Left, kind, now);
            false
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            keys.apply(Key::Right, kind, now);
            false
        }
        _ => false,
    }
}

impl Frontend for TerminalFrontend {
    fn poll_input(&mut self, state: &GameState, now: Instant) -> Result<TickInput, FrontendError> {
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                quit |= map_key(&mut self.keys, key, now);
            }
        }

        let rotation = match &self.autopilot {
            Some(pilot) => pilot.steer(state),
            None => self.keys.rotation(now),
        };
        Ok(TickInput { rotation, quit })
    }

    fn present(&mut self, request: &RenderRequest) -> Result<(), FrontendError> {
        let title = self.title.as_str();
        self.terminal.draw(|frame| draw_frame(frame, request, title))?;
        Ok(())
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
    }
}

fn draw_frame(frame: &mut Frame, request: &RenderRequest, title: &str) {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
    let hud = Line::from(vec![
        Span::styled(request.hud.hits.clone(), Style::default().fg(Color::White)),
        separator.clone(),
        Span::styled(request.hud.fastest_speed.clone(), Style::default().fg(Color::White)),
        separator.clone(),
        Span::styled(request.hud.time.clone(), Style::default().fg(Color::White)),
        separator,
        Span::styled("←/→ rotate  q quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(hud), hud_area);

    let center = request.arena.center;
    let band = paddle_band(center, &request.paddle);
    let ball = flip_y(request.ball.pos, center);
    let (x_bounds, y_bounds) = view_bounds(request, VIEW_MARGIN);

    let canvas = Canvas::default()
        .block(Block::bordered().title(title))
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: center.x as f64,
                y: center.y as f64,
                radius: request.arena.radius as f64,
                color: Color::White,
            });
            for &(a, b) in &band {
                let (a, b) = (flip_y(a, center), flip_y(b, center));
                ctx.draw(&CanvasLine {
                    x1: a.x as f64,
                    y1: a.y as f64,
                    x2: b.x as f64,
                    y2: b.y as f64,
                    color: Color::Green,
                });
            }
            ctx.draw(&Circle {
                x: ball.x as f64,
                y: ball.y as f64,
                radius: request.ball.radius as f64,
                color: Color::Red,
            });
        });
    frame.render_widget(canvas, square_area(play_area));
}

/// Largest centered area that looks square, given cells about twice as tall as wide
fn square_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
