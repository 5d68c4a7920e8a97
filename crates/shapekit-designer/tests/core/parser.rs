use shapekit_designer::{parse, CommandDef, PathCommands, PathError, Point};

#[test]
fn test_parse_mixed_commands() {
    let defs = parse("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();
    assert_eq!(
        defs,
        vec![
            CommandDef::move_to(false, Point::new(0.0, 0.0)),
            CommandDef::cubic_bezier(
                false,
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, 0.0),
            ),
            CommandDef::smooth_cubic_bezier(false, Point::new(20.0, -10.0), Point::new(20.0, 0.0)),
        ]
    );
}

#[test]
fn test_parse_compact_syntax() {
    let compact = parse("M0,0C0,10,10,10,10,0s10-10,10,0z").unwrap();
    let spaced = parse("M 0 0 C 0 10 10 10 10 0 s 10 -10 10 0 z").unwrap();
    assert_eq!(compact, spaced);
}

#[test]
fn test_parse_rejects_extra_numbers() {
    let err = parse("M 1 2 H 3 4").unwrap_err();
    assert!(matches!(err, PathError::Syntax { .. }));
    assert!(PathCommands::from_d("M 1 2 H 3 4").is_err());
}

#[test]
fn test_parse_requires_leading_move() {
    assert!(matches!(
        parse("L 1 1"),
        Err(PathError::Syntax { position: 0, .. })
    ));
    assert!(parse("m 1 1").is_ok());
}

#[test]
fn test_parse_rejects_unsupported_commands() {
    for d in ["M 0 0 Q 1 1 2 2", "M 0 0 T 1 1", "M 0 0 a 1 1 0 0 1 2 2"] {
        assert!(
            matches!(parse(d), Err(PathError::Syntax { .. })),
            "{} should fail",
            d
        );
    }
}

#[test]
fn test_parse_output_feeds_path() {
    let path = PathCommands::from_d("M 10 10 L 5 5 l 1 1").unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.to_defs(), parse("M 10 10 L 5 5 l 1 1").unwrap());
}

#[test]
fn test_parse_accepts_any_ascii_whitespace() {
    let spaced = parse("M 0 0 L 1 1").unwrap();
    assert_eq!(parse("M 0\x0C0 L 1 1").unwrap(), spaced);
    assert_eq!(parse("M\t0\r\n0,L 1\x0C1").unwrap(), spaced);
}
