use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::config::AnalysisMode;
use crate::internal::notification::NotificationKind;
use crate::internal::pipeline::Phase;

use super::app::{App, InputMode};

pub fn draw(app: &App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_top_bar(app, f, chunks[0]);

    match app.phase {
        Phase::Idle | Phase::ImagePending => render_upload_prompt(app, f, chunks[1]),
        Phase::Previewing => render_preview(app, f, chunks[1]),
        Phase::Analyzing => {
            render_preview(app, f, chunks[1]);
            render_loading_overlay(app, f);
        }
        Phase::ShowingResults => render_results(app, f, chunks[1]),
    }

    render_status_bar(app, f, chunks[2]);

    if app.input_mode == InputMode::PathEntry {
        render_path_entry_overlay(app, f);
    }

    if app.notification.is_some() {
        render_notification(app, f);
    }
}

fn render_top_bar(app: &App, f: &mut Frame, area: Rect) {
    let mode = match app.config.analysis_mode {
        AnalysisMode::Guided => "guided",
        AnalysisMode::Instant => "instant",
    };

    let bar = Line::from(vec![
        Span::styled(
            " fitcheck ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("v{} ", app.app_version)),
        Span::styled(
            format!("[{} mode]", mode),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    f.render_widget(Paragraph::new(bar), area);
}

fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let hints = match app.phase {
        Phase::Previewing => " o: choose photo | a: analyze | q: quit ",
        Phase::ShowingResults => " o: choose photo | e: export html | q: quit ",
        _ => " o: choose photo | q: quit ",
    };

    let p = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(p, area);
}

fn render_upload_prompt(app: &App, f: &mut Frame, area: Rect) {
    let max_mb = app.config.max_upload_bytes / (1024 * 1024);

    let lines = vec![
        Line::raw(""),
        Line::styled(
            "Upload Your Photo",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw("Press o and type the path to an image file."),
        Line::raw("PNG, JPG, GIF and WebP are all fine."),
        Line::raw(format!("Maximum size: {}MB.", max_mb)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Style Analyzer ")
        .padding(Padding::horizontal(2));

    let p = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn render_preview(app: &App, f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    match (&app.preview, &app.upload.preview) {
        (Some(meta), Some(data_url)) => {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled("File: ", Style::default().fg(Color::DarkGray)),
                Span::raw(meta.file_name.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
                Span::raw(meta.media_type.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Size: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format_size(meta.size_bytes)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Encoded: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{} chars", data_url.len())),
            ]));
            lines.push(Line::raw(""));
            if app.phase == Phase::Previewing && !app.config.auto_analyze() {
                lines.push(Line::styled(
                    "Press a to analyze your style.",
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
        }
        _ => {
            lines.push(Line::raw("No photo selected yet."));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .padding(Padding::horizontal(2));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_results(app: &App, f: &mut Frame, area: Rect) {
    let inner_width = area.width.saturating_sub(6).max(20);

    let mut lines = Vec::new();
    for rec in &app.results {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", rec.icon)),
            Span::styled(
                rec.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        for wrapped in wrap_card_description(&rec.description, inner_width) {
            lines.push(Line::styled(
                format!("   {}", wrapped),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::raw(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Your Style Analysis ({} cards) ", app.results.len()))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_loading_overlay(app: &App, f: &mut Frame) {
    let label = app
        .loading_label
        .as_deref()
        .unwrap_or("Analyzing your style...");

    let area = f.area();
    let popup_width =
        (textwrap::core::display_width(label) as u16 + 6).min(area.width.saturating_sub(4));
    let popup_height = 3;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let p = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Working "));
    f.render_widget(p, popup_area);
}

fn render_path_entry_overlay(app: &App, f: &mut Frame) {
    let area = f.area();
    let popup_width = area.width.saturating_sub(8).min(70).max(20);
    let popup_height = 4;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let lines = vec![
        Line::from(vec![
            Span::raw("> "),
            Span::raw(app.path_input.clone()),
            Span::styled("█", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::styled(
            "Enter: upload | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Photo path "),
    );
    f.render_widget(p, popup_area);
}

fn render_notification(app: &App, f: &mut Frame) {
    if let Some(notification) = &app.notification {
        let area = f.area();

        // Fixed position: top-right corner. Width in columns, not bytes.
        let popup_width = (textwrap::core::display_width(&notification.message) as u16 + 4)
            .min(area.width.saturating_sub(2));
        let popup_height = 3;
        let popup_x = area.width.saturating_sub(popup_width + 1);
        let popup_area = Rect::new(popup_x, 1, popup_width, popup_height);

        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::Blue,
        };

        let mut style = Style::default().fg(color);
        if notification.is_fading() {
            style = style.add_modifier(Modifier::DIM);
        }

        f.render_widget(Clear, popup_area);
        let p = Paragraph::new(notification.message.clone())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, popup_area);
    }
}

/// Wrap a card description to the given column width.
pub fn wrap_card_description(text: &str, width: u16) -> Vec<String> {
    textwrap::wrap(text, width.max(1) as usize)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Human-readable byte count for the preview panel.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.0} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
