use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;
use crate::grid::Grid;
use crate::view::ViewState;

pub const ALIVE_COLOR: [u8; 4] = [255, 255, 255, 255];
pub const DEAD_COLOR: [u8; 4] = [0, 0, 0, 255];
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        // Minimised windows report a zero size
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("Failed to resize buffer: {}", err);
        }
    }

    pub fn render(&mut self, grid: &Grid, view: &ViewState) {
        let frame = self.pixels.frame_mut();
        draw_grid(frame, self.width, self.height, grid, view);
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

/// Clears `frame` and paints every on-screen cell of `grid` at its
/// panned and zoomed position.
pub fn draw_grid(frame: &mut [u8], width: u32, height: u32, grid: &Grid, view: &ViewState) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND_COLOR);
    }
    if width == 0 || height == 0 || grid.size() == 0 {
        return;
    }

    let size = grid.size() as i64;
    let (first_col, first_row) = view.screen_to_grid(0, 0);
    let (last_col, last_row) = view.screen_to_grid(width as i32 - 1, height as i32 - 1);
    let cols = (first_col as i64).max(0)..(last_col as i64 + 1).min(size);
    let rows = (first_row as i64).max(0)..(last_row as i64 + 1).min(size);
    let cell_size = view.cell_size();

    for (row, cells) in grid.rows().enumerate() {
        if !rows.contains(&(row as i64)) {
            continue;
        }
        for col in cols.clone() {
            let color = if cells[col as usize] { ALIVE_COLOR } else { DEAD_COLOR };
            let (x, y) = view.grid_to_screen(col as i32, row as i32);
            draw_cell(frame, x, y, cell_size, color, width, height);
        }
    }
}

/// Byte offset of pixel `(x, y)` in an RGBA frame `width` pixels wide.
fn pixel_index(x: u32, y: u32, width: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4
}

fn draw_cell(frame: &mut [u8], x: i32, y: i32, size: u32, color: [u8; 4], width: u32, height: u32) {
    let x0 = x.max(0) as u32;
    let y0 = y.max(0) as u32;
    let x1 = (x as i64 + size as i64).clamp(0, width as i64) as u32;
    let y1 = (y as i64 + size as i64).clamp(0, height as i64) as u32;

    for py in y0..y1 {
        for px in x0..x1 {
            let index = pixel_index(px, py, width);
            if index + 3 < frame.len() {
                frame[index..index + 4].copy_from_slice(&color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let index = pixel_index(x, y, width);
        [frame[index], frame[index + 1], frame[index + 2], frame[index + 3]]
    }

    #[test]
    fn live_cell_drawn_at_transformed_position() {
        let (width, height) = (40, 30);
        let mut frame = vec![7u8; (width * height * 4) as usize];
        let mut grid = Grid::new(10);
        grid.set(2, 3, true);
        let mut view = ViewState::new(4);
        view.offset_x = 5;
        view.offset_y = -2;

        draw_grid(&mut frame, width, height, &grid, &view);

        // Column 3, row 2 covers x 17..21, y 6..10
        for y in 0..height {
            for x in 0..width {
                let inside = (17..21).contains(&x) && (6..10).contains(&y);
                let expected = if inside { ALIVE_COLOR } else { DEAD_COLOR };
                assert_eq!(pixel(&frame, width, x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn cells_partially_off_screen_are_clipped() {
        let (width, height) = (10, 10);
        let mut frame = vec![0u8; (width * height * 4) as usize];
        let mut grid = Grid::new(4);
        grid.set(0, 0, true);
        grid.set(3, 3, true);
        let mut view = ViewState::new(4);
        view.offset_x = -2;
        view.offset_y = -2;

        draw_grid(&mut frame, width, height, &grid, &view);

        assert_eq!(pixel(&frame, width, 0, 0), ALIVE_COLOR);
        assert_eq!(pixel(&frame, width, 1, 1), ALIVE_COLOR);
        assert_eq!(pixel(&frame, width, 2, 2), DEAD_COLOR);
        // Cell (3, 3) starts at pixel 10, just past the right edge.
        assert_eq!(pixel(&frame, width, 9, 9), DEAD_COLOR);
    }

    #[test]
    fn grid_entirely_off_screen_leaves_background() {
        let (width, height) = (8, 8);
        let mut frame = vec![1u8; (width * height * 4) as usize];
        let mut grid = Grid::new(3);
        grid.set(1, 1, true);
        let mut view = ViewState::new(2);
        view.offset_x = 500;

        draw_grid(&mut frame, width, height, &grid, &view);
        assert!(frame.chunks_exact(4).all(|p| p == BACKGROUND_COLOR));
    }

    #[test]
    fn pixel_index_does_not_wrap_on_huge_frames() {
        assert_eq!(pixel_index(3, 2, 10), 92);
        // 40000 x 40000 pixels is past 2^30, where a u32 byte offset wraps.
        let expected = (39_999usize * 40_000 + 39_999) * 4;
        assert_eq!(pixel_index(39_999, 39_999, 40_000), expected);
        assert!(expected > u32::MAX as usize);
    }
}
