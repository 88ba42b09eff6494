pub const MIN_CELL_SIZE: u32 = 1;
pub const MAX_CELL_SIZE: u32 = 50;

/// Change in cell size per scroll notch. Also the factor of the pan correction.
pub const ZOOM_STEP: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Pan offset and zoom level of the grid on screen, plus mouse drag state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub offset_x: i32,
    pub offset_y: i32,
    cell_size: u32,
    dragging: bool,
    anchor_x: i32,
    anchor_y: i32,
}

impl ViewState {
    pub fn new(cell_size: u32) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            cell_size: cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE),
            dragging: false,
            anchor_x: 0,
            anchor_y: 0,
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Grid cell `(col, row)` under a screen pixel. Exact multiples of the
    /// cell size belong to the cell starting there.
    pub fn screen_to_grid(&self, x: i32, y: i32) -> (i32, i32) {
        let cell = self.cell_size as i64;
        let to_cell = |pixel: i32, offset: i32| {
            (pixel as i64 - offset as i64)
                .div_euclid(cell)
                .clamp(i32::MIN as i64, i32::MAX as i64) as i32
        };
        (to_cell(x, self.offset_x), to_cell(y, self.offset_y))
    }

    /// Top-left screen pixel of grid cell `(col, row)`.
    pub fn grid_to_screen(&self, col: i32, row: i32) -> (i32, i32) {
        let cell = self.cell_size as i32;
        (col * cell + self.offset_x, row * cell + self.offset_y)
    }

    pub fn drag_start(&mut self, x: i32, y: i32) {
        self.anchor_x = x.saturating_sub(self.offset_x);
        self.anchor_y = y.saturating_sub(self.offset_y);
        self.dragging = true;
    }

    pub fn drag_move(&mut self, x: i32, y: i32) {
        if self.is_dragging() {
            self.offset_x = x.saturating_sub(self.anchor_x);
            self.offset_y = y.saturating_sub(self.anchor_y);
        }
    }

    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Steps the cell size and shifts the pan offset by twice the grid
    /// coordinate under the cursor, measured before the size change.
    pub fn zoom(&mut self, direction: ZoomDirection, x: i32, y: i32) {
        let (grid_x, grid_y) = self.screen_to_grid(x, y);
        let shift_x = grid_x.saturating_mul(ZOOM_STEP as i32);
        let shift_y = grid_y.saturating_mul(ZOOM_STEP as i32);

        match direction {
            ZoomDirection::In => {
                self.cell_size = (self.cell_size + ZOOM_STEP).min(MAX_CELL_SIZE);
                self.offset_x = self.offset_x.saturating_sub(shift_x);
                self.offset_y = self.offset_y.saturating_sub(shift_y);
            }
            ZoomDirection::Out => {
                self.cell_size = self.cell_size.saturating_sub(ZOOM_STEP).max(MIN_CELL_SIZE);
                self.offset_x = self.offset_x.saturating_add(shift_x);
                self.offset_y = self.offset_y.saturating_add(shift_y);
            }
        }
        log::debug!(
            "Zoom {:?} at ({}, {}): cell size {}, offset ({}, {})",
            direction,
            x,
            y,
            self.cell_size,
            self.offset_x,
            self.offset_y
        );
    }
}
