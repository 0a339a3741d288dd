use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Which border row of a block a title sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleEdge {
    Top,
    Bottom,
}

/// Draw `line` over a border row of `area`, one cell in from the corners.
///
/// Block titles are clipped to the measured line width, which loses the last
/// letter of Arabic text containing a lam-alef pair. Paragraph rows do not.
pub fn render_border_title(frame: &mut Frame, area: Rect, line: Line<'_>, edge: TitleEdge) {
    if area.width <= 2 || area.height == 0 {
        return;
    }
    let y = match edge {
        TitleEdge::Top => area.top(),
        TitleEdge::Bottom => area.bottom() - 1,
    };
    let row = Rect::new(area.x + 1, y, area.width - 2, 1);
    frame.render_widget(Paragraph::new(line), row);
}
