use crossterm::style::Color;
use tui_tetromino::core::{ActiveSnapshot, GameSnapshot, GameState, Phase, ScriptedPieces};
use tui_tetromino::term::{AnchorY, GameView, Viewport};
use tui_tetromino::types::{Cell, ShapeId};

fn top_left_view() -> GameView {
    GameView::default().with_anchor_y(AnchorY::Top)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();

    // 10 cells x 2 columns + border => 22 wide, 20 rows + border => 22 high
    let fb = top_left_view().render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Cell::Occupied(ShapeId::I);

    let fb = top_left_view().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for dx in 0..2 {
        let glyph = fb.get(x0 + dx, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, Color::Cyan);
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
}

#[test]
fn term_view_uses_shape_colors() {
    let expected = [
        (ShapeId::I, Color::Cyan),
        (ShapeId::J, Color::Blue),
        (ShapeId::L, Color::Yellow),
        (ShapeId::O, Color::Magenta),
        (ShapeId::S, Color::Green),
        (ShapeId::T, Color::Red),
        (ShapeId::Z, Color::White),
    ];
    let mut snap = GameSnapshot::default();
    for (x, (shape, _)) in expected.iter().enumerate() {
        snap.board[19][x] = Cell::Occupied(*shape);
    }

    let fb = top_left_view().render(&snap, Viewport::new(22, 22));
    for (x, (_, color)) in expected.iter().enumerate() {
        let glyph = fb.get(1 + 2 * x as u16, 20).unwrap();
        assert_eq!(glyph.style.fg, *color);
    }
}

#[test]
fn term_view_hides_piece_cells_above_board() {
    let mut snap = GameSnapshot::default();
    // Vertical I with its top two cells above the board
    snap.active = Some(ActiveSnapshot {
        shape: ShapeId::I,
        rotation: 1,
        x: 0,
        y: -2,
    });

    let fb = top_left_view().render(&snap, Viewport::new(22, 22));

    // Border row untouched
    assert_eq!(fb.get(1, 0).unwrap().ch, '─');
    // Rows 0 and 1 of the board show the piece
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1, 2).unwrap().ch, '█');
    assert_eq!(fb.get(1, 3).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::with_source(ScriptedPieces::repeat(ShapeId::T));
    game.start(0);
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.lines = 12;

    let fb = top_left_view().render(&snap, Viewport::new(40, 22));

    // Panel starts two columns right of the 22-wide frame
    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("1234"));
    assert!(fb.row_text(3).contains("LINES"));
    assert!(fb.row_text(4).contains("12"));
}

#[test]
fn term_view_game_over_overlay_shows_score() {
    let snap = GameSnapshot {
        phase: Phase::GameOver,
        score: 700,
        ..GameSnapshot::default()
    };

    let fb = top_left_view().render(&snap, Viewport::new(22, 22));
    let text: Vec<String> = (0..22).map(|y| fb.row_text(y)).collect();

    assert!(text.iter().any(|row| row.contains("GAME OVER")));
    assert!(text.iter().any(|row| row.contains("SCORE 700")));
    assert!(text.iter().any(|row| row.contains("press any key")));
}

#[test]
fn term_view_running_game_has_no_overlay() {
    let mut game = GameState::with_source(ScriptedPieces::repeat(ShapeId::O));
    game.start(0);
    let fb = top_left_view().render(&game.snapshot(), Viewport::new(22, 22));
    assert!((0..22).all(|y| !fb.row_text(y).contains("GAME OVER")));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
