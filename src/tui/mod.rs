//! Ratatui-based terminal UI.
//!
//! The TUI is a form for a single employee. Both views of the input (labels as
//! chosen, codes as the model sees them) update live; the salary estimate is
//! computed on demand and cleared whenever an input changes.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::config::AppConfig;
use crate::domain::{DisplayRow, Estimate, FeatureRow, RawRecord};
use crate::encode::{display_row, encode};
use crate::error::{AppError, EstimateError};
use crate::models::Predictor;
use crate::report::format_salary;

pub mod form;

use form::{FIELDS, Field, FormState};

/// Start the TUI. The model is loaded before the terminal is taken over so
/// load errors print normally.
pub fn run(config: AppConfig) -> Result<(), AppError> {
    let model = crate::models::load_predictor(&config)?;
    let mut app = App::new(model, config.currency)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    form: FormState,
    model: Box<dyn Predictor>,
    currency: String,
    estimate: Option<Estimate>,
    status: String,
}

impl App {
    fn new(model: Box<dyn Predictor>, currency: String) -> Result<Self, AppError> {
        let form = FormState::from_record(&RawRecord::example()).map_err(EstimateError::from)?;
        let status = format!("model: {}", model.describe());
        Ok(Self {
            form,
            model,
            currency,
            estimate: None,
            status,
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.form.select_prev(),
            KeyCode::Down => self.form.select_next(),
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::PageDown => self.adjust(-10),
            KeyCode::PageUp => self.adjust(10),
            KeyCode::Enter | KeyCode::Char('p') => self.predict(),
            _ => {}
        }
        false
    }

    fn adjust(&mut self, delta: i64) {
        self.form.adjust(delta);
        self.estimate = None;
        let field = self.form.field();
        self.status = format!("{}: {}", field.label(), self.form.value(field));
    }

    fn predict(&mut self) {
        match crate::app::pipeline::estimate_one(&self.form.record(), self.model.as_ref()) {
            Ok(estimate) => {
                self.status = format_salary(estimate.salary, &self.currency);
                self.estimate = Some(estimate);
            }
            Err(err) => {
                log::warn!("estimate failed: {err}");
                self.estimate = None;
                self.status = format!("Error: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled("salary", Style::default().fg(Color::Cyan)),
                Span::raw(" · Employee Salary Estimator"),
            ]),
            Line::from(Span::styled(
                format!("model: {}", self.model.describe()),
                Style::default().fg(Color::Gray),
            )),
        ];
        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)])
            .split(area);

        self.draw_form(frame, chunks[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(chunks[1]);

        self.draw_inputs(frame, right[0]);
        self.draw_estimate(frame, right[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = FIELDS
            .iter()
            .map(|&field| {
                let marker = match field {
                    Field::Choice(_) => "◂ ▸",
                    Field::Age | Field::Hours => "− +",
                };
                ListItem::new(format!("{:<16} {:<20} {marker}", field.label(), self.form.value(field)))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Employee").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.form.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// Labels beside codes, one feature per line.
    fn draw_inputs(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let record = self.form.record();
        let display = display_row(&record);
        let header_style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled(
            format!("{:<16} {:<28} {:>6}", "column", "your selected inputs", "model"),
            header_style,
        ))];

        match encode(&record) {
            Ok(features) => lines.extend(input_lines(&display, &features)),
            Err(err) => lines.push(Line::from(Span::styled(
                format!("{err}"),
                Style::default().fg(Color::Red),
            ))),
        }

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Inputs").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_estimate(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = match &self.estimate {
            Some(estimate) => Line::from(Span::styled(
                format_salary(estimate.salary, &self.currency),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "Press Enter to predict salary",
                Style::default().fg(Color::Yellow),
            )),
        };
        let p = Paragraph::new(line).block(Block::default().title("Estimate").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ change  PgUp/PgDn ±10  Enter predict  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn input_lines(display: &DisplayRow, features: &FeatureRow) -> Vec<Line<'static>> {
    DisplayRow::COLUMNS
        .iter()
        .zip(&display.cells)
        .zip(features.values())
        .map(|((column, label), code)| Line::from(format!("{column:<16} {label:<28} {code:>6}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InferenceError;

    struct Flat;

    impl Predictor for Flat {
        fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, InferenceError> {
            Ok(vec![42_000.0; rows.len()])
        }

        fn describe(&self) -> String {
            "flat".to_string()
        }
    }

    fn app() -> App {
        App::new(Box::new(Flat), "₹".to_string()).unwrap()
    }

    #[test]
    fn enter_predicts_and_change_clears() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Enter));
        assert_eq!(app.estimate.as_ref().map(|e| e.salary), Some(42_000.0));
        assert_eq!(app.status, "Estimated Salary: ₹42,000 per year");

        app.handle_key(KeyCode::Right);
        assert!(app.estimate.is_none());
        assert_eq!(app.status, "Age: 31");
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }

    #[test]
    fn input_lines_pair_labels_with_codes() {
        let record = RawRecord::example();
        let lines = input_lines(&display_row(&record), &encode(&record).unwrap());
        assert_eq!(lines.len(), 8);
        let text: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("educational-num"));
        assert!(text.contains("Some-college"));
        assert!(text.trim_end().ends_with("10"));
    }
}
