use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use ecosys_core::snapshot::{Canvas, WorldSnapshot};
use ecosys_core::world::Phase;
use ecosys_data::Appearance;

/// Terminal cells are roughly twice as tall as wide; grid cells span two columns.
const COLUMNS_PER_ROW: f64 = 2.0;

/// Paints a [`WorldSnapshot`] into a ratatui buffer.
pub struct GridWidget<'a> {
    snapshot: &'a WorldSnapshot,
}

impl<'a> GridWidget<'a> {
    pub fn new(snapshot: &'a WorldSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Side of the square drawing surface, in rows, that fits inside `inner`.
    pub fn surface_side(inner: Rect) -> f64 {
        (f64::from(inner.width) / COLUMNS_PER_ROW).min(f64::from(inner.height))
    }

    fn title(&self) -> String {
        let state = match self.snapshot.phase {
            Phase::Terminated => " [done]",
            _ => "",
        };
        format!(
            "Ecosys {0}x{0} (Step: {1}){2}",
            self.snapshot.grid_dim, self.snapshot.step, state
        )
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::get_inner_area(area);
        if inner.is_empty() {
            return;
        }
        let mut canvas = BufferCanvas { buf, area: inner };
        self.snapshot.draw(&mut canvas, Self::surface_side(inner));
    }
}

/// [`Canvas`] over a buffer region. Units are terminal rows; x is stretched
/// by [`COLUMNS_PER_ROW`].
pub struct BufferCanvas<'b> {
    pub buf: &'b mut Buffer,
    pub area: Rect,
}

impl BufferCanvas<'_> {
    fn span(start: f64, len: f64, scale: f64) -> (u16, u16) {
        let from = (start * scale).round().max(0.0) as u16;
        let to = ((start + len) * scale).round().max(0.0) as u16;
        (from, to.max(from + 1))
    }
}

impl Canvas for BufferCanvas<'_> {
    fn clear(&mut self, (r, g, b): (u8, u8, u8)) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                let cell = &mut self.buf[(x, y)];
                cell.set_symbol(" ");
                cell.set_bg(Color::Rgb(r, g, b));
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, appearance: &Appearance) {
        let (x0, x1) = Self::span(x, width, COLUMNS_PER_ROW);
        let (y0, y1) = Self::span(y, height, 1.0);
        let mut symbol = [0u8; 4];
        let symbol = appearance.symbol.encode_utf8(&mut symbol);
        for row in y0..y1 {
            for col in x0..x1 {
                let (sx, sy) = (self.area.x + col, self.area.y + row);
                if sx >= self.area.right() || sy >= self.area.bottom() {
                    continue;
                }
                let cell = &mut self.buf[(sx, sy)];
                cell.set_symbol(symbol);
                cell.set_fg(Color::Rgb(appearance.r, appearance.g, appearance.b));
            }
        }
    }
}
