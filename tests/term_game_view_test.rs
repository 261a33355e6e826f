use tui_2048::core::{GameSnapshot, GameState, Grid};
use tui_2048::term::{tile_style, AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use tui_2048::types::{GameStatus, MoveOutcome, RESTART_HINT};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn snapshot_of(rows: [[u32; 4]; 4]) -> GameSnapshot {
    GameState::with_grid(1, Grid::from_rows(rows).unwrap()).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // Tiles are 7x3: board 28x12, frame 30x14, below a one-row header.
    let fb = view.render(&snap, Viewport::new(30, 15));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 14).unwrap().ch, '└');
    assert_eq!(fb.get(29, 14).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_score_header() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(30, 15));

    assert!(fb.row_text(0).starts_with("Score: 1234"));
}

#[test]
fn term_view_centers_tile_value() {
    let snap = snapshot_of([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(30, 15));

    // Tile (0, 0) spans x 1..7 (6 colored + 1 gap), y 2..5; the value sits on the middle row.
    let row: Vec<char> = fb.row_text(3).chars().collect();
    assert_eq!(row[1..7].iter().collect::<String>(), " 2048 ");
    assert_eq!(fb.get(2, 3).unwrap().style.bg, tile_style(2048).bg);
}

#[test]
fn term_view_colors_empty_and_filled_tiles_differently() {
    let snap = snapshot_of([[0, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(30, 15));

    let empty_bg = fb.get(1, 2).unwrap().style.bg;
    let two_bg = fb.get(8, 2).unwrap().style.bg;
    assert_eq!(two_bg, Rgb::from_hex(0xeee4da));
    assert_ne!(empty_bg, two_bg);
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // Header + frame is 15 rows; (25 - 15) / 2 = 5 => header at 5, frame at 6.
    let fb = view.render(&snap, Viewport::new(30, 25));
    assert_eq!(fb.get(0, 6).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_win_message() {
    let snap = snapshot_of([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(snap.status, GameStatus::Won);

    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    let all = screen_text(&fb);
    assert!(all.contains("You Won!!"));
    assert!(all.contains(RESTART_HINT));
}

#[test]
fn term_view_shows_game_over_message() {
    let snap = snapshot_of([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert_eq!(snap.status, GameStatus::Lost);

    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    assert!(screen_text(&fb).contains("Game Over!!!"));
}

#[test]
fn term_view_has_no_overlay_while_playing() {
    let mut state = GameState::new(3);
    state.start();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(40, 20));
    let all = screen_text(&fb);
    assert!(!all.contains("You Won!!"));
    assert!(!all.contains("Game Over!!!"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot_of([[64, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    snap.moves = 17;
    snap.last_outcome = Some(MoveOutcome {
        changed: true,
        score_delta: 128,
        spawned: true,
    });

    let fb = GameView::default().render(&snap, Viewport::new(60, 20));
    let all = screen_text(&fb);
    assert!(all.contains("BEST"));
    assert!(all.contains("MOVES"));
    assert!(all.contains("17"));
    assert!(all.contains("+128"));
}

#[test]
fn term_view_hides_side_panel_on_narrow_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 20));
    assert!(!screen_text(&fb).contains("BEST"));
}

#[test]
fn term_view_render_into_reuses_framebuffer() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(40, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));

    view.render_into(&snap, Viewport::new(50, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 22));
    assert_eq!(fb, view.render(&snap, Viewport::new(50, 22)));
}
