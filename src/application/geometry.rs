/// Base on-screen size of a cell, in pixels, at zoom 0
pub const BASE_CELL_SIZE: usize = 12;
/// Zoom adds this many pixels per cell per step
pub const ZOOM_STEP: u32 = 2;
pub const MAX_ZOOM: u32 = 20;
/// Gap between the top of the window and the board
pub const BOARD_TOP_MARGIN: f32 = 10.0;

/// Axis-aligned pixel rectangle, half-open on the right and bottom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegion {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl HitRegion {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// BoardGeometry maps between board cells and window pixels.
///
/// The board surface keeps its zoom-0 size. Zooming in enlarges every cell,
/// so cells past the surface edge are clipped: they are neither drawn nor
/// clickable. Rendering and hit-testing both go through this type, so a
/// click always lands on the cell drawn under the pointer, even before the
/// first frame has been painted.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardGeometry {
    board_width: usize,
    board_height: usize,
    origin_x: f32,
    origin_y: f32,
    zoom: u32,
}

impl BoardGeometry {
    /// Geometry for a `board_width` x `board_height` board centered
    /// horizontally in a window `window_width` pixels wide
    pub fn new(board_width: usize, board_height: usize, window_width: u32) -> Self {
        let board_pixels = (board_width * BASE_CELL_SIZE) as f32;
        Self {
            board_width,
            board_height,
            origin_x: ((window_width as f32 - board_pixels) / 2.0).floor(),
            origin_y: BOARD_TOP_MARGIN,
            zoom: 0,
        }
    }

    pub const fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP);
    }

    /// Pixel distance between neighboring cells at the current zoom
    pub fn pitch(&self) -> f32 {
        (BASE_CELL_SIZE as u32 + self.zoom) as f32
    }

    /// Top-left of the board surface in window pixels
    pub const fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    /// The board surface, including its one-pixel border
    pub fn surface(&self) -> HitRegion {
        HitRegion {
            x: self.origin_x,
            y: self.origin_y,
            w: (self.board_width * BASE_CELL_SIZE + 2) as f32,
            h: (self.board_height * BASE_CELL_SIZE + 2) as f32,
        }
    }

    /// On-screen rectangle of visible cell `(x, y)`, clipped to the surface.
    /// `None` if the cell is off the board or clipped away entirely.
    pub fn cell_rect(&self, x: usize, y: usize) -> Option<HitRegion> {
        if x >= self.board_width || y >= self.board_height {
            return None;
        }
        let pitch = self.pitch();
        let surface = self.surface();
        let left = self.origin_x + x as f32 * pitch + 1.0;
        let top = self.origin_y + y as f32 * pitch + 1.0;
        let right = (left + pitch).min(surface.x + surface.w);
        let bottom = (top + pitch).min(surface.y + surface.h);
        (right > left && bottom > top).then(|| HitRegion {
            x: left,
            y: top,
            w: right - left,
            h: bottom - top,
        })
    }

    /// Visible cell under the pointer, if any
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !self.surface().contains(px, py) {
            return None;
        }
        let pitch = self.pitch();
        let lx = px - self.origin_x - 1.0;
        let ly = py - self.origin_y - 1.0;
        if lx < 0.0 || ly < 0.0 {
            return None;
        }
        let (x, y) = ((lx / pitch) as usize, (ly / pitch) as usize);
        (x < self.board_width && y < self.board_height).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        // 10x5 board in a 200px window: board is 120px wide, origin x = 40
        BoardGeometry::new(10, 5, 200)
    }

    #[test]
    fn test_origin_centers_board() {
        assert_eq!(geometry().origin(), (40.0, BOARD_TOP_MARGIN));
    }

    #[test]
    fn test_zoom_saturates() {
        let mut g = geometry();
        g.zoom_out();
        assert_eq!(g.zoom(), 0);
        for _ in 0..20 {
            g.zoom_in();
        }
        assert_eq!(g.zoom(), MAX_ZOOM);
        g.zoom_out();
        assert_eq!(g.zoom(), 18);
        assert_eq!(g.pitch(), 30.0);
    }

    #[test]
    fn test_cell_rect_layout() {
        let g = geometry();
        let rect = g.cell_rect(2, 1).unwrap();
        assert_eq!(
            rect,
            HitRegion {
                x: 40.0 + 24.0 + 1.0,
                y: 10.0 + 12.0 + 1.0,
                w: 12.0,
                h: 12.0
            }
        );
        assert_eq!(g.cell_rect(10, 0), None);
    }

    #[test]
    fn test_cell_at_inverts_cell_rect() {
        let g = geometry();
        assert_eq!(g.cell_at(40.0 + 25.0, 10.0 + 13.0), Some((2, 1)));
        assert_eq!(g.cell_at(40.0 + 36.9, 10.0 + 24.9), Some((2, 1)));
        assert_eq!(g.cell_at(40.0 + 37.0, 10.0 + 13.0), Some((3, 1)));
    }

    #[test]
    fn test_outside_board_is_none() {
        let g = geometry();
        assert_eq!(g.cell_at(0.0, 0.0), None);
        assert_eq!(g.cell_at(39.0, 20.0), None);
        // Border pixel
        assert_eq!(g.cell_at(40.0, 20.0), None);
        assert_eq!(g.cell_at(40.0 + 122.0, 20.0), None);
        assert_eq!(g.cell_at(50.0, 10.0 + 62.0), None);
    }

    #[test]
    fn test_zoom_clips_far_cells() {
        let mut g = geometry();
        for _ in 0..5 {
            g.zoom_in();
        }
        // pitch 22: cells past ~122px are off the surface
        assert!(g.cell_rect(5, 0).is_some());
        assert_eq!(g.cell_rect(6, 0), None);
        let partial = g.cell_rect(5, 0).unwrap();
        assert!(partial.w < 22.0);
        assert_eq!(g.cell_at(40.0 + 1.0 + 22.0 * 5.0 + 3.0, 15.0), Some((5, 0)));
    }

    #[test]
    fn test_every_pixel_hits_its_drawn_cell() {
        let mut g = geometry();
        g.zoom_in();
        let surface = g.surface();
        let mut py = surface.y;
        while py < surface.y + surface.h {
            let mut px = surface.x;
            while px < surface.x + surface.w {
                let hit = g.cell_at(px, py);
                let drawn: Vec<_> = (0..5)
                    .flat_map(|y| (0..10).map(move |x| (x, y)))
                    .filter(|&(x, y)| g.cell_rect(x, y).is_some_and(|r| r.contains(px, py)))
                    .collect();
                assert!(drawn.len() <= 1);
                assert_eq!(hit, drawn.first().copied(), "pixel ({}, {})", px, py);
                px += 1.0;
            }
            py += 1.0;
        }
    }
}
