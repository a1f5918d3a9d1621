//! Frame buffer and attribute types for the composited scene.

/// One of the eight terminal colours a mask character can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Colour plus intensity for a single cell.
///
/// Built from the single-character colour codes used in attribute masks:
/// `x r g y b m c w` for normal intensity, uppercase for bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attr {
    pub color: Color,
    pub bold: bool,
}

impl Default for Attr {
    fn default() -> Self {
        Self {
            color: Color::White,
            bold: false,
        }
    }
}

impl Attr {
    pub const fn new(color: Color, bold: bool) -> Self {
        Self { color, bold }
    }

    /// Look up a colour code.
    ///
    /// An exact match wins; otherwise the lowercase form is tried (at normal
    /// intensity), and anything still unknown falls back to [`Attr::default`].
    pub fn from_code(code: char) -> Self {
        Self::exact(code)
            .or_else(|| Self::exact(code.to_ascii_lowercase()))
            .unwrap_or_default()
    }

    fn exact(code: char) -> Option<Self> {
        let color = match code.to_ascii_lowercase() {
            'x' => Color::Black,
            'r' => Color::Red,
            'g' => Color::Green,
            'y' => Color::Yellow,
            'b' => Color::Blue,
            'm' => Color::Magenta,
            'c' => Color::Cyan,
            'w' => Color::White,
            _ => return None,
        };
        // 'X' has no bold entry and resolves through the lowercase path.
        if code == 'X' {
            return None;
        }
        Some(Self::new(color, code.is_ascii_uppercase()))
    }
}

/// A single glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: Attr::default(),
        }
    }
}

/// 2D grid of glyph + attribute cells, sized to the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Resize the buffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Row `y` as a string of glyphs. Empty if out of range.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }
}
