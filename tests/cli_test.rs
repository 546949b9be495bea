use puissance4::cli::{format_board, parse_column};
use puissance4::{Board, Disc, COLUMNS, ROWS};

#[test]
fn test_format_empty_board() {
    let rendered = format_board(&Board::new());
    let lines: Vec<&str> = rendered.lines().collect();
    // header row plus one line per board row
    assert_eq!(lines.len(), ROWS + 1);
    assert_eq!(lines[0].trim_end(), "0 1 2 3 4 5 6");
    for line in &lines[1..] {
        assert_eq!(line.trim_end(), ". . . . . . .");
    }
}

#[test]
fn test_format_board_shows_marks_bottom_up() {
    let mut board = Board::new();
    board.drop_disc(0, Disc::Red).unwrap();
    board.drop_disc(0, Disc::Yellow).unwrap();
    board.drop_disc(3, Disc::Red).unwrap();

    let rendered = format_board(&board);
    let lines: Vec<&str> = rendered.lines().collect();
    // bottom row: red in column 0, red in column 3
    assert_eq!(lines[ROWS].trim_end(), "X . . X . . .");
    // row above: yellow stacked on the first red
    assert_eq!(lines[ROWS - 1].trim_end(), "O . . . . . .");
}

#[test]
fn test_parse_column_accepts_digits_with_whitespace() {
    assert_eq!(parse_column("3"), Some(3));
    assert_eq!(parse_column("  6\n"), Some(6));
    assert_eq!(parse_column("0"), Some(0));
}

#[test]
fn test_parse_column_rejects_garbage() {
    assert_eq!(parse_column(""), None);
    assert_eq!(parse_column("abc"), None);
    assert_eq!(parse_column("-1"), None);
    assert_eq!(parse_column("3.5"), None);
}

#[test]
fn test_parse_column_is_not_range_checked() {
    // range handling is the game's job, the parser just reads a number
    assert_eq!(parse_column("99"), Some(99));
    assert!(99 >= COLUMNS);
}
