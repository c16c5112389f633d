//! Terminal-cell drawing surface.

use std::f32::consts::PI;

use galaxia_core::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Point, SurfaceSize};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::chars::{HALO_CHAR, HEAVY_LINE_CHARS, STAR_CHARS, THIN_LINE_CHARS};
use crate::color::{halo_color, starlight_color};
use crate::surface::Surface;

/// Ink below this is invisible on a terminal and is not drawn.
const MIN_VISIBLE_INK: f32 = 0.02;

/// Fraction of a star's opacity carried by its halo.
const HALO_INK: f32 = 0.35;

/// Lines at least this wide use heavy glyphs.
const HEAVY_LINE_WIDTH: f32 = 1.5;

/// What put the ink in a cell. Later variants win over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Layer {
    Halo,
    Line,
    Star,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    glyph: char,
    ink: f32,
    layer: Layer,
}

/// A [`Surface`] made of terminal cells.
///
/// Every cell covers [`CELL_WIDTH_PX`] x [`CELL_HEIGHT_PX`] surface pixels
/// and shows a single glyph.
#[derive(Debug, Clone)]
pub struct CellRaster {
    columns: u16,
    rows: u16,
    cells: Vec<Option<Cell>>,
}

impl CellRaster {
    /// Create a blank raster of `columns` x `rows` cells.
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Glyph and ink at a cell, if anything visible was drawn there.
    pub fn cell(&self, column: u16, row: u16) -> Option<(char, f32)> {
        self.index(column as i64, row as i64)
            .and_then(|i| self.cells[i])
            .map(|cell| (cell.glyph, cell.ink))
    }

    /// Convert the raster into one styled line per row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span> = (0..self.columns)
                    .map(|column| {
                        let i = row as usize * self.columns as usize + column as usize;
                        match self.cells[i] {
                            Some(cell) => Span::styled(
                                cell.glyph.to_string(),
                                Style::new().fg(cell_color(cell)),
                            ),
                            None => Span::raw(" "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn index(&self, column: i64, row: i64) -> Option<usize> {
        if column < 0 || row < 0 || column >= self.columns as i64 || row >= self.rows as i64 {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    /// Ink a cell, keeping whatever is already there if it ranks higher.
    fn mark(&mut self, column: i64, row: i64, glyph: char, ink: f32, layer: Layer) {
        if ink < MIN_VISIBLE_INK {
            return;
        }
        let Some(i) = self.index(column, row) else {
            return;
        };
        let ink = ink.min(1.0);
        let replace = match self.cells[i] {
            None => true,
            Some(existing) => {
                layer > existing.layer || (layer == existing.layer && ink > existing.ink)
            }
        };
        if replace {
            self.cells[i] = Some(Cell { glyph, ink, layer });
        }
    }
}

fn cell_color(cell: Cell) -> Color {
    match cell.layer {
        Layer::Halo => halo_color(cell.ink),
        Layer::Line | Layer::Star => starlight_color(cell.ink),
    }
}

fn to_cell(point: Point) -> (i64, i64) {
    (
        (point.x / CELL_WIDTH_PX).floor() as i64,
        (point.y / CELL_HEIGHT_PX).floor() as i64,
    )
}

/// Pick a star glyph from its radius and how much glow it carries.
fn star_glyph(radius: f32, glow_blur: f32) -> char {
    let glow = glow_blur - radius * 5.0;
    if glow > 4.0 {
        return STAR_CHARS[4];
    }
    let index = match radius {
        r if r < 0.9 => 0,
        r if r < 1.4 => 1,
        r if r < 1.8 => 2,
        _ => 3,
    };
    STAR_CHARS[index]
}

/// Pick a line glyph from the direction of travel.
fn line_glyph(from: Point, to: Point, width: f32) -> char {
    let chars = if width >= HEAVY_LINE_WIDTH {
        HEAVY_LINE_CHARS
    } else {
        THIN_LINE_CHARS
    };
    let mut angle = (to.y - from.y).atan2(to.x - from.x);
    if angle < 0.0 {
        angle += PI;
    }
    let octant = PI / 8.0;
    if angle < octant || angle >= 7.0 * octant {
        chars[0]
    } else if angle < 3.0 * octant {
        chars[1]
    } else if angle < 5.0 * octant {
        chars[2]
    } else {
        chars[3]
    }
}

impl Surface for CellRaster {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::from_cells(self.columns, self.rows)
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, opacity: f32, glow_blur: f32) {
        let (column, row) = to_cell(center);

        if glow_blur > 0.0 {
            let reach_x = (glow_blur / CELL_WIDTH_PX).ceil() as i64;
            let reach_y = (glow_blur / CELL_HEIGHT_PX).ceil() as i64;
            for r in row - reach_y..=row + reach_y {
                for c in column - reach_x..=column + reach_x {
                    if (c, r) == (column, row) {
                        continue;
                    }
                    let cell_center = Point::new(
                        (c as f32 + 0.5) * CELL_WIDTH_PX,
                        (r as f32 + 0.5) * CELL_HEIGHT_PX,
                    );
                    let distance = cell_center.distance(center);
                    if distance < glow_blur {
                        let ink = opacity * HALO_INK * (1.0 - distance / glow_blur);
                        self.mark(c, r, HALO_CHAR, ink, Layer::Halo);
                    }
                }
            }
        }

        self.mark(column, row, star_glyph(radius, glow_blur), opacity, Layer::Star);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, opacity: f32) {
        let glyph = line_glyph(from, to, width);
        let start = (from.x / CELL_WIDTH_PX, from.y / CELL_HEIGHT_PX);
        let end = (to.x / CELL_WIDTH_PX, to.y / CELL_HEIGHT_PX);
        let steps = (end.0 - start.0)
            .abs()
            .max((end.1 - start.1).abs())
            .ceil()
            .max(1.0) as usize;

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let column = (start.0 + (end.0 - start.0) * t).floor() as i64;
            let row = (start.1 + (end.1 - start.1) * t).floor() as i64;
            self.mark(column, row, glyph, opacity, Layer::Line);
        }
    }
}
