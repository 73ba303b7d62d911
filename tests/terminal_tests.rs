//! Painting through the ANSI terminal sink
use boxpaint::{
    compositor, BoxStyle, Color, Glyphs, GridSink, PaintWarning, Point, Size, TerminalSink,
};

#[test]
fn test_paint_box_to_terminal() {
    let frame = Glyphs::unicode()
        .with_colors(Color::Black, Color::Green)
        .rectangle(Point::new(0, 0), Size::new(2, 3), BoxStyle::Light)
        .build()
        .unwrap();

    let mut out = Vec::new();
    let report = {
        let mut sink = TerminalSink::acquire(&mut out, Size::new(10, 10)).unwrap();
        compositor::paint(&[frame], &mut sink).unwrap()
    };
    assert_eq!(report.cells_written, 6);
    assert!(report.warnings.is_empty());

    let text = String::from_utf8(out).unwrap();
    for ch in ['┌', '─', '┐', '└', '┘'] {
        assert!(text.contains(ch), "missing {ch}");
    }
    // Bottom-right corner sits on terminal row 2, column 3
    assert!(text.contains("\x1b[2;3H┘"));
    assert!(text.ends_with("\x1b[?25h"));
}

#[test]
fn test_terminal_bounds_clip() {
    let arrow = Glyphs::unicode()
        .arrow_line(Point::new(0, 0), Size::new(1, 6))
        .build()
        .unwrap();

    let mut out = Vec::new();
    let report = {
        let mut sink = TerminalSink::acquire(&mut out, Size::new(1, 4)).unwrap();
        assert_eq!(sink.dimensions(), Size::new(1, 4));
        compositor::paint(&[arrow], &mut sink).unwrap()
    };
    assert_eq!(report.cells_written, 4);
    assert_eq!(
        report.warnings,
        vec![PaintWarning::Clipped { shape: 0, cells: 2 }]
    );
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains('▶'), "arrow head was clipped");
}
