//! Rendering of the log pane.
//!
//! One row per line: timestamp column, gap, body. Rows are padded to the full
//! width so a highlight reads as a solid band.

use crate::state::{LogPane, TIMESTAMP_COLUMN_WIDTH};
use crate::view::constants::COLUMN_GAP;
use crate::view::styles::LineStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit `text` into `width` display columns, padding or cutting with `…`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut fitted = String::with_capacity(text.len() + width - text_width);
        fitted.push_str(text);
        fitted.extend(std::iter::repeat_n(' ', width - text_width));
        return fitted;
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push('…');
    used += 1;
    fitted.extend(std::iter::repeat_n(' ', width - used));
    fitted
}

/// Build the rows currently visible in `pane`.
pub fn visible_lines(pane: &LogPane, width: u16, styles: &LineStyles) -> Vec<Line<'static>> {
    let body_width = usize::from(width.saturating_sub(TIMESTAMP_COLUMN_WIDTH + COLUMN_GAP));
    let gap = " ".repeat(usize::from(COLUMN_GAP));

    pane.visible_range()
        .map(|position| {
            let line = &pane.lines()[position];

            let mut timestamp_style = styles.timestamp();
            if position == pane.cursor() {
                timestamp_style = timestamp_style.patch(styles.cursor());
            }

            let row = Line::from(vec![
                Span::styled(line.time_label(), timestamp_style),
                Span::raw(gap.clone()),
                Span::styled(
                    fit_to_width(&line.to_string(), body_width),
                    styles.body(line.kind()),
                ),
            ]);

            if pane.is_highlighted(position) {
                row.patch_style(styles.highlight())
            } else {
                row
            }
        })
        .collect()
}

/// Draw `pane` into `area`.
pub fn render_log_pane(frame: &mut Frame, area: Rect, pane: &LogPane, styles: &LineStyles) {
    if pane.is_empty() {
        frame.render_widget(Paragraph::new("(no lines)").style(styles.timestamp()), area);
        return;
    }
    let lines = visible_lines(pane, area.width, styles);
    frame.render_widget(Paragraph::new(lines), area);
}
