use crate::chart::{ChartData, ChartSink};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Rectangle},
        Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
    Frame, Terminal,
};
use std::io;

/// Full-screen terminal chart; closes on `q` or `Esc`
#[derive(Debug, Default)]
pub struct TerminalChart;

impl TerminalChart {
    pub fn new() -> Self {
        TerminalChart
    }
}

impl ChartSink for TerminalChart {
    fn render(&mut self, title: &str, data: &ChartData) -> Result<()> {
        // Setup terminal; raw mode is switched off however this returns
        enable_raw_mode()?;
        let raw_mode = RestoreGuard::new(|| {
            let _ = disable_raw_mode();
        });
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = run_chart(&mut terminal, title, data);

        // Restore terminal
        drop(raw_mode);
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res?;
        Ok(())
    }
}

/// Runs `restore` when dropped, including on early `?` returns
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        RestoreGuard { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)()
    }
}

fn run_chart<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    title: &str,
    data: &ChartData,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_charts(f, title, data))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            }
        }
    }
}

/// Header, bar chart beside scatter chart, status bar
pub fn draw_charts(f: &mut Frame, title: &str, data: &ChartData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Charts
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], title, data);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_bar_chart(f, chart_chunks[0], data);
    render_scatter(f, chart_chunks[1], data);
    render_status_bar(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, title: &str, data: &ChartData) {
    let deaths: u64 = data.deaths_series().iter().map(|&v| u64::from(v)).sum();
    let injured: u64 = data.injured_series().iter().map(|&v| u64::from(v)).sum();

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(format!("Deaths: {}", deaths), Style::default().fg(Color::Red)),
        Span::raw("  "),
        Span::styled(format!("Injured: {}", injured), Style::default().fg(Color::Cyan)),
    ])])
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_bar_chart(f: &mut Frame, area: Rect, data: &ChartData) {
    let segments = stacked_segments(data);
    let categories = data.categories();
    let x_upper = categories.len() as f64 * BAR_SLOT;
    let y_upper = stacked_upper_bound(data);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Casualties by Sex (Deaths + Injured) "),
        )
        .x_bounds([0.0, x_upper])
        .y_bounds([0.0, y_upper])
        .paint(move |ctx| {
            for segment in &segments {
                ctx.draw(segment);
            }
            for (i, category) in categories.iter().enumerate() {
                ctx.print(i as f64 * BAR_SLOT + BAR_OFFSET, 0.0, Line::from(*category));
            }
        });

    f.render_widget(canvas, area);
}

/// Width of the x range given to each sex; the bar sits centred in it
const BAR_SLOT: f64 = 2.0;
const BAR_OFFSET: f64 = 0.5;
const BAR_WIDTH: f64 = 1.0;

/// Deaths segment from 0, injured segment stacked on top, one pair per sex
fn stacked_segments(data: &ChartData) -> Vec<Rectangle> {
    let mut segments = Vec::with_capacity(data.by_sex.len() * 2);

    for (i, pair) in data.by_sex.values().enumerate() {
        let x = i as f64 * BAR_SLOT + BAR_OFFSET;
        let deaths = f64::from(pair[0]);
        let injured = f64::from(pair[1]);

        segments.push(Rectangle {
            x,
            y: 0.0,
            width: BAR_WIDTH,
            height: deaths,
            color: Color::Red,
        });
        segments.push(Rectangle {
            x,
            y: deaths,
            width: BAR_WIDTH,
            height: injured,
            color: Color::Cyan,
        });
    }

    segments
}

/// Top of the stacked chart: tallest stack plus headroom; never zero
fn stacked_upper_bound(data: &ChartData) -> f64 {
    (data.max_stacked() as f64 * 1.2).ceil().max(1.0)
}

fn render_scatter(f: &mut Frame, area: Rect, data: &ChartData) {
    let deaths_points = scatter_points(&data.deaths_series());
    let injured_points = scatter_points(&data.injured_series());

    let datasets = vec![
        Dataset::default()
            .name("Deaths")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&deaths_points),
        Dataset::default()
            .name("Injured")
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan))
            .data(&injured_points),
    ];

    let categories = data.categories();
    let x_labels: Vec<Span> = categories.iter().map(|c| Span::raw(*c)).collect();
    let x_upper = categories.len().saturating_sub(1) as f64 + 0.5;

    let y_upper = y_upper_bound(data);
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_upper / 2.0)),
        Span::raw(format!("{:.0}", y_upper)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Deaths / Injured per Sex "),
        )
        .x_axis(
            Axis::default()
                .title("Sex")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([-0.5, x_upper])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_upper])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let status = Paragraph::new(vec![Line::from(vec![
        Span::styled(" q", Style::default().fg(Color::Red)),
        Span::raw(" / "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status, area);
}

/// One point per category: x = category index, y = count
fn scatter_points(series: &[u32]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, f64::from(v)))
        .collect()
}

/// Top of the y axis, with a little headroom; never zero
fn y_upper_bound(data: &ChartData) -> f64 {
    let max = data
        .deaths_series()
        .into_iter()
        .chain(data.injured_series())
        .max()
        .unwrap_or(0);
    (f64::from(max) * 1.2).ceil().max(1.0)
}
