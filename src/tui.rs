use crate::browser::{BannerReporter, ProfileBrowser};
use crate::card::Card;
use crate::config::ViewerConfig;
use crate::error::{IgError, Result};
use crate::ingest;
use crate::paginate::{PageView, PAGE_SIZE};
use crate::store::Store;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const GRID_COLUMNS: usize = 3;
const GRID_ROWS: usize = PAGE_SIZE / GRID_COLUMNS;

pub fn run<S: Store>(viewer: &mut Viewer<S>) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(io_to_err)?;
    execute!(stdout, EnterAlternateScreen, Hide).map_err(io_to_err)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(io_to_err)?;

    let loop_result = run_loop(&mut terminal, viewer);

    let mut cleanup_error = None;
    if let Err(err) = disable_raw_mode().map_err(io_to_err) {
        cleanup_error = Some(err);
    }
    if let Err(err) =
        execute!(terminal.backend_mut(), Show, LeaveAlternateScreen).map_err(io_to_err)
    {
        cleanup_error = Some(err);
    }
    if let Err(err) = terminal.show_cursor().map_err(io_to_err) {
        cleanup_error = Some(err);
    }

    loop_result?;
    if let Some(err) = cleanup_error {
        return Err(err);
    }
    Ok(())
}

fn run_loop<S: Store>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    viewer: &mut Viewer<S>,
) -> Result<()> {
    loop {
        viewer.drain_reads();
        terminal
            .draw(|frame| viewer.render(frame))
            .map_err(io_to_err)?;

        if event::poll(Duration::from_millis(200)).map_err(io_to_err)? {
            if let Event::Key(key) = event::read().map_err(io_to_err)? {
                if key.kind == KeyEventKind::Press && viewer.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Grid,
    Upload,
}

struct ReadDone {
    path: PathBuf,
    result: Result<String>,
}

/// Interactive front end over a [`ProfileBrowser`].
///
/// Files are read on a worker thread. Every finished read is committed in
/// completion order, so the latest read to finish is what stays loaded.
pub struct Viewer<S: Store> {
    browser: ProfileBrowser<S, BannerReporter>,
    config: ViewerConfig,
    focus: Focus,
    path_input: String,
    status: String,
    pending_reads: usize,
    tx: Sender<ReadDone>,
    rx: Receiver<ReadDone>,
}

impl<S: Store> Viewer<S> {
    pub fn new(browser: ProfileBrowser<S, BannerReporter>, config: ViewerConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let focus = if browser.dataset().is_empty() {
            Focus::Upload
        } else {
            Focus::Grid
        };
        let status = config.locale.key_help.to_string();
        Self {
            browser,
            config,
            focus,
            path_input: String::new(),
            status,
            pending_reads: 0,
            tx,
            rx,
        }
    }

    pub fn browser(&self) -> &ProfileBrowser<S, BannerReporter> {
        &self.browser
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn pending_reads(&self) -> usize {
        self.pending_reads
    }

    /// Returns `true` when the viewer should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        match self.focus {
            Focus::Grid => self.handle_grid_key(key),
            Focus::Upload => {
                self.handle_upload_key(key);
                false
            }
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Char('o') => self.focus = Focus::Upload,
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => {
                self.browser.next_page();
            }
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => {
                self.browser.prev_page();
            }
            KeyCode::Char('v') if self.config.filtering => self.browser.toggle_verified(),
            _ => {}
        }
        false
    }

    fn handle_upload_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.start_read(),
            KeyCode::Tab | KeyCode::Esc => {
                if !self.browser.dataset().is_empty() {
                    self.focus = Focus::Grid;
                }
            }
            _ => edit_text_field(key, &mut self.path_input),
        }
    }

    /// Starts reading `path` in the background.
    pub fn open(&mut self, path: PathBuf) {
        let tx = self.tx.clone();
        self.pending_reads += 1;
        self.status = format!("{}: {}", self.config.locale.loading, path.display());
        log::debug!("reading {} in background", path.display());
        thread::spawn(move || {
            let result = ingest::read_text(&path);
            let _ = tx.send(ReadDone { path, result });
        });
    }

    fn start_read(&mut self) {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            return;
        }
        let path = PathBuf::from(trimmed);
        self.open(path);
    }

    /// Commits reads that finished since the last call.
    pub fn drain_reads(&mut self) -> usize {
        let mut committed = 0;
        while let Ok(done) = self.rx.try_recv() {
            self.pending_reads = self.pending_reads.saturating_sub(1);
            self.finish_read(done);
            committed += 1;
        }
        committed
    }

    /// Blocks until every started read has been committed.
    pub fn wait_for_reads(&mut self) {
        while self.pending_reads > 0 {
            match self.rx.recv() {
                Ok(done) => {
                    self.pending_reads -= 1;
                    self.finish_read(done);
                }
                Err(_) => break,
            }
        }
    }

    fn finish_read(&mut self, done: ReadDone) {
        let loaded = match done.result {
            Ok(text) => self.browser.load_from_text(&text),
            Err(err) => {
                self.browser
                    .report(&format!("loading {}", done.path.display()), &err);
                None
            }
        };
        match loaded {
            Some(count) => {
                self.status = format!(
                    "{count} {}: {}",
                    self.config.locale.loaded,
                    done.path.display()
                );
                self.path_input.clear();
                self.focus = Focus::Grid;
            }
            None => {
                let message = self.browser.reporter_mut().take();
                if self.config.surface_errors {
                    if let Some(message) = message {
                        self.status = format!("{}: {message}", self.config.locale.error);
                    }
                }
            }
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>) {
        let locale = &self.config.locale;
        let outer = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

        let title = Paragraph::new(format!("{} :: {}", locale.title, locale.title_keys))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(title, outer[0]);

        self.render_upload_bar(frame, outer[1]);

        let view = self.browser.view();
        if self.browser.dataset().is_empty() {
            frame.render_widget(
                Paragraph::new(locale.start_prompt)
                    .alignment(Alignment::Center)
                    .block(Block::bordered()),
                outer[2],
            );
        } else {
            self.render_grid(frame, outer[2], &view);
        }

        if view.shows_pagination() {
            frame.render_widget(
                Paragraph::new(self.pagination_line(&view))
                    .alignment(Alignment::Center)
                    .block(Block::bordered()),
                outer[3],
            );
        }

        frame.render_widget(
            Paragraph::new(self.status.clone())
                .block(Block::bordered().title(locale.status_title)),
            outer[4],
        );
    }

    fn render_upload_bar(&self, frame: &mut Frame<'_>, area: Rect) {
        let locale = &self.config.locale;
        let prompt = if self.browser.dataset().is_empty() {
            locale.start_prompt
        } else {
            locale.reload_prompt
        };
        let input_style = if self.focus == Focus::Upload {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        let upload = Paragraph::new(Line::from(vec![
            Span::raw(format!("{}: ", locale.path_label)),
            Span::styled(format!("{}_", self.path_input), input_style),
        ]))
        .block(Block::bordered().title(prompt));

        let show_toggle = self.config.filtering && !self.browser.dataset().is_empty();
        if !show_toggle {
            frame.render_widget(upload, area);
            return;
        }

        let parts =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(28)]).split(area);
        frame.render_widget(upload, parts[0]);
        let show_verified = self.browser.state().show_verified;
        let toggle_style = if show_verified {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        frame.render_widget(
            Paragraph::new(locale.toggle_label(show_verified))
                .style(toggle_style)
                .block(Block::bordered().title("v")),
            parts[1],
        );
    }

    fn render_grid(&self, frame: &mut Frame<'_>, area: Rect, view: &PageView<'_>) {
        let rows =
            Layout::vertical([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS]).split(area);
        for (row_idx, row) in rows.iter().enumerate() {
            let cells =
                Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .split(*row);
            for (col_idx, cell) in cells.iter().enumerate() {
                if let Some(user) = view.users.get(row_idx * GRID_COLUMNS + col_idx) {
                    Card::new(user, &self.config).render(frame, *cell);
                }
            }
        }
    }

    fn pagination_line(&self, view: &PageView<'_>) -> Line<'static> {
        let locale = &self.config.locale;
        let button = Style::default().fg(Color::Black).bg(Color::Yellow);
        let mut spans = Vec::new();
        if view.has_prev() {
            spans.push(Span::styled(format!(" ← {} ", locale.prev), button));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::raw(locale.page_status(
            view.current_page,
            view.total_pages,
            self.browser.state().total_users,
        )));
        if view.has_next() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!(" {} → ", locale.next), button));
        }
        Line::from(spans)
    }
}

fn edit_text_field(key: KeyEvent, target: &mut String) {
    match key.code {
        KeyCode::Backspace => {
            target.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if c == 'u' {
                    target.clear();
                }
            } else {
                target.push(c);
            }
        }
        _ => {}
    }
}

fn io_to_err(err: io::Error) -> IgError {
    IgError::Io(err)
}
