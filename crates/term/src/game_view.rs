//! GameView: maps a session [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, centered in the viewport:
//!
//! ```text
//!          TETRIS
//!
//! ┌────────────────────┐  Score: 0
//! │· · · · · · · · · · │
//! │· · · · · · · · · · │  Next
//! │         ...        │  ┌──────────┐
//! │                    │  │   ████   │
//! └────────────────────┘  └──────────┘
//! ```

use crate::core::Snapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH, MASK_SIZE};

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_DOT: Rgb = Rgb::new(40, 40, 40);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const TEXT: Rgb = Rgb::new(255, 255, 255);
const GAME_OVER: Rgb = Rgb::new(255, 80, 80);

const BLOCK: char = '█';
const DOT: char = '·';

/// Rows between the title and the playfield frame.
const TITLE_GAP: u16 = 2;
/// Columns between the playfield frame and the side panel.
const PANEL_GAP: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where each part of the game screen goes for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the playfield frame.
    pub board_x: u16,
    pub board_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Column of the side panel (score and preview).
    pub panel_x: u16,
    pub title_y: u16,
}

/// Terminal renderer for the game and menu screens.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares cells for typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn preview_w(&self) -> u16 {
        MASK_SIZE as u16 * self.cell_w + 2
    }

    fn preview_h(&self) -> u16 {
        MASK_SIZE as u16 * self.cell_h + 2
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + self.preview_w();
        let total_h = TITLE_GAP + frame_h;

        let board_x = viewport.width.saturating_sub(total_w) / 2;
        let title_y = viewport.height.saturating_sub(total_h) / 2;
        Layout {
            board_x,
            board_y: title_y + TITLE_GAP,
            frame_w,
            frame_h,
            panel_x: board_x + frame_w + PANEL_GAP,
            title_y,
        }
    }

    /// Render the game screen into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', CellStyle::new(TEXT, SCREEN_BG)));

        let layout = self.layout(viewport);
        let text = CellStyle::new(TEXT, SCREEN_BG);

        fb.put_str_centered(
            layout.board_x + layout.frame_w / 2,
            layout.title_y,
            "TETRIS",
            text.bold(),
        );

        fb.draw_box(
            layout.board_x,
            layout.board_y,
            layout.frame_w,
            layout.frame_h,
            CellStyle::new(BORDER, SCREEN_BG).bold(),
        );
        self.draw_grid(fb, snap, &layout);
        self.draw_panel(fb, snap, &layout);

        if snap.game_over {
            fb.put_str_centered(
                layout.board_x + layout.frame_w / 2,
                layout.board_y + layout.frame_h / 2,
                "GAME OVER",
                CellStyle::new(GAME_OVER, SCREEN_BG).bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render the start menu.
    pub fn render_menu_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', CellStyle::new(TEXT, SCREEN_BG)));

        let cx = viewport.width / 2;
        let cy = viewport.height / 2;
        let text = CellStyle::new(TEXT, SCREEN_BG);
        fb.put_str_centered(cx, cy.saturating_sub(2), "TETRIS", text.bold());
        fb.put_str_centered(cx, cy, "Press ENTER to start", text);
        fb.put_str_centered(cx, cy + 2, "q to exit", text.dim());
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &Snapshot, layout: &Layout) {
        let origin = (layout.board_x + 1, layout.board_y + 1);
        let dot = CellStyle::new(GRID_DOT, PLAYFIELD_BG);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (px, py) = self.cell_origin(origin, x as u16, y as u16);
                match cell {
                    Some(color) => {
                        fb.fill_rect(
                            px,
                            py,
                            self.cell_w,
                            self.cell_h,
                            BLOCK,
                            CellStyle::new(*color, PLAYFIELD_BG),
                        );
                    }
                    None => {
                        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', dot);
                        fb.put_char(px, py, DOT, dot);
                    }
                }
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &Snapshot, layout: &Layout) {
        let text = CellStyle::new(TEXT, SCREEN_BG);
        let x = layout.panel_x;
        let mut y = layout.board_y;

        fb.put_str(x, y, &format!("Score: {}", snap.score), text);
        y += 2;
        fb.put_str(x, y, "Next", text);
        y += 1;

        fb.draw_box(
            x,
            y,
            self.preview_w(),
            self.preview_h(),
            CellStyle::new(BORDER, SCREEN_BG),
        );

        let style = CellStyle::new(snap.next.color, SCREEN_BG);
        for (row, col) in snap.next.mask.occupied() {
            let (px, py) = self.cell_origin((x + 1, y + 1), col as u16, row as u16);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }

    fn cell_origin(&self, origin: (u16, u16), cell_x: u16, cell_y: u16) -> (u16, u16) {
        (
            origin.0 + cell_x * self.cell_w,
            origin.1 + cell_y * self.cell_h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::new_session;

    const VIEW: Viewport = Viewport {
        width: 60,
        height: 30,
    };

    fn count(fb: &FrameBuffer, ch: char) -> usize {
        fb.glyphs().iter().filter(|g| g.ch == ch).count()
    }

    #[test]
    fn test_layout_centers_screen() {
        let layout = GameView::default().layout(VIEW);
        // 22 frame + 2 gap + 12 preview = 36 wide; 2 + 22 = 24 tall.
        assert_eq!(layout.frame_w, 22);
        assert_eq!(layout.frame_h, 22);
        assert_eq!(layout.board_x, 12);
        assert_eq!(layout.title_y, 3);
        assert_eq!(layout.board_y, 5);
        assert_eq!(layout.panel_x, 36);
    }

    #[test]
    fn test_fresh_game_screen() {
        let snap = new_session(7).snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, VIEW);
        let text = fb.to_text();

        assert!(text.contains("TETRIS"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Next"));
        assert!(!text.contains("GAME OVER"));

        // Active piece starts in the buffer: only the preview is drawn.
        assert_eq!(count(&fb, BLOCK), 8);
        assert_eq!(count(&fb, DOT), 200);
    }

    #[test]
    fn test_filled_cells_use_their_color() {
        let mut snap = new_session(7).snapshot();
        let red = Rgb::new(230, 90, 90);
        snap.grid[19][0] = Some(red);

        let view = GameView::default();
        let fb = view.render(&snap, VIEW);
        let layout = view.layout(VIEW);
        let (px, py) = (layout.board_x + 1, layout.board_y + 20);

        for dx in 0..2 {
            let g = fb.get(px + dx, py).unwrap();
            assert_eq!(g.ch, BLOCK);
            assert_eq!(g.style.fg, red);
        }
        assert_eq!(count(&fb, DOT), 199);
    }

    #[test]
    fn test_preview_draws_next_color() {
        let snap = new_session(3).snapshot();
        let fb = GameView::default().render(&snap, VIEW);
        let preview: Vec<_> = fb.glyphs().iter().filter(|g| g.ch == BLOCK).collect();
        assert_eq!(preview.len(), 8);
        assert!(preview.iter().all(|g| g.style.fg == snap.next.color));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snap = new_session(7).snapshot();
        snap.game_over = true;
        let fb = GameView::default().render(&snap, VIEW);
        assert!(fb.to_text().contains("GAME OVER"));
    }

    #[test]
    fn test_menu_screen() {
        let mut fb = FrameBuffer::new(1, 1);
        GameView::default().render_menu_into(VIEW, &mut fb);
        assert_eq!((fb.width(), fb.height()), (60, 30));
        assert!(fb.to_text().contains("Press ENTER to start"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = new_session(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.glyphs().len(), 15);
    }
}
