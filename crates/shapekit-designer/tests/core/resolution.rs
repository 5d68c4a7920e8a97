use shapekit_designer::{CommandDef, PathCommands, PathError, Point};

#[test]
fn test_mixed_absolute_and_relative_ends() {
    let path = PathCommands::from_d("M 10 10 L 5 5 l 1 1").unwrap();

    assert_eq!(path.absolute_end(0), Point::new(10.0, 10.0));
    assert_eq!(path.absolute_end(1), Point::new(5.0, 5.0));
    assert_eq!(path.absolute_end(2), Point::new(6.0, 6.0));
}

#[test]
fn test_relative_chain_accumulates() {
    let path = PathCommands::from_d("M 1 1 l 1 0 l 0 2 h 3 v -1 c 1 1 2 2 3 3 z").unwrap();

    assert_eq!(
        path.absolute_ends(),
        vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 3.0),
            Point::new(5.0, 3.0),
            Point::new(5.0, 2.0),
            Point::new(8.0, 5.0),
            Point::new(8.0, 5.0),
        ]
    );
}

#[test]
fn test_single_and_batch_resolution_agree() {
    let path = PathCommands::from_d("m 5 5 l 1 2 H 0 v 4 C 1 1 2 2 3 3 s 1 1 2 0 L 9 9 Z").unwrap();
    let ends = path.absolute_ends();

    for (i, end) in ends.iter().enumerate() {
        assert_eq!(path.absolute_end(i), *end, "segment {}", i);
    }
}

#[test]
fn test_relative_cubic_controls_resolve_from_predecessor() {
    let path = PathCommands::from_d("M 10 10 c 0 5 5 5 5 0").unwrap();
    let handles = path.interaction_points(1);

    assert_eq!(
        handles.position(shapekit_designer::HandleName::Control1),
        Some(Point::new(10.0, 15.0))
    );
    assert_eq!(
        handles.position(shapekit_designer::HandleName::Control2),
        Some(Point::new(15.0, 15.0))
    );
    assert_eq!(
        handles.position(shapekit_designer::HandleName::End),
        Some(Point::new(15.0, 10.0))
    );
}

#[test]
fn test_close_path_returns_predecessor_end() {
    let path = PathCommands::from_d("M 0 0 L 4 0 L 4 4 Z").unwrap();
    assert_eq!(path.absolute_end(3), Point::new(4.0, 4.0));
    assert!(path.interaction_points(3).is_empty());
}

#[test]
fn test_first_command_rule() {
    let err = PathCommands::from_defs(&[CommandDef::line_to(false, Point::new(1.0, 1.0))])
        .unwrap_err();
    assert!(matches!(err, PathError::MalformedCommand { index: 0, .. }));
}

#[test]
fn test_bad_arity_rejects_whole_path() {
    let defs = vec![
        CommandDef::move_to(false, Point::ZERO),
        CommandDef::line_to(false, Point::new(1.0, 1.0)),
        CommandDef::new('S', [Point::new(1.0, 1.0).into()]),
    ];
    let err = PathCommands::from_defs(&defs).unwrap_err();
    assert!(matches!(err, PathError::MalformedCommand { index: 2, .. }));
}

#[test]
fn test_round_trip_through_defs_and_text() {
    let d = "M 0 0 L 10 10 h 5 V 3 C 1 2, 3 4, 5 6 s 1 1, 2 2 Z";
    let path = PathCommands::from_d(d).unwrap();

    assert_eq!(path.serialize(), d);
    assert_eq!(path.to_string(), d);

    let defs = path.to_defs();
    assert_eq!(PathCommands::from_defs(&defs).unwrap().to_defs(), defs);
    assert_eq!(shapekit_designer::parse(&path.serialize()).unwrap(), defs);
}

#[test]
fn test_non_finite_coordinates_are_malformed() {
    let infinite_point = vec![
        CommandDef::move_to(false, Point::ZERO),
        CommandDef::line_to(false, Point::new(f64::INFINITY, 1.0)),
    ];
    let err = PathCommands::from_defs(&infinite_point).unwrap_err();
    assert!(matches!(err, PathError::MalformedCommand { index: 1, .. }));

    let nan_length = vec![
        CommandDef::move_to(false, Point::ZERO),
        CommandDef::line_to(true, Point::new(1.0, 1.0)),
        CommandDef::vertical_line(true, f64::NAN),
    ];
    let err = PathCommands::from_defs(&nan_length).unwrap_err();
    assert!(matches!(err, PathError::MalformedCommand { index: 2, .. }));
}
