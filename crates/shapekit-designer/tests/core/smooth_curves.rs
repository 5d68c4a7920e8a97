use shapekit_designer::{Gesture, HandleName, PathCommands, Point};

#[test]
fn test_reflects_cubic_control() {
    let path = PathCommands::from_d("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();
    assert_eq!(path.effective_control1(2), Some(Point::new(10.0, -10.0)));
}

#[test]
fn test_degenerates_after_line() {
    let path = PathCommands::from_d("M 0 0 L 5 5 S 10 0 10 5").unwrap();
    assert_eq!(path.effective_control1(2), Some(Point::new(5.0, 5.0)));
}

#[test]
fn test_chained_smooth_curves() {
    let path = PathCommands::from_d("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0 S 30 10 30 0").unwrap();
    // predecessor S has control2 (20,-10) and end (20,0)
    assert_eq!(path.effective_control1(3), Some(Point::new(20.0, 10.0)));
}

#[test]
fn test_relative_predecessor_controls_are_resolved() {
    let path = PathCommands::from_d("M 10 10 c 0 10 10 10 10 0 s 10 -10 10 0").unwrap();
    // c: control2 (20,20), end (20,10)
    assert_eq!(path.effective_control1(2), Some(Point::new(20.0, 0.0)));
}

#[test]
fn test_only_smooth_curves_have_reflection() {
    let path = PathCommands::from_d("M 0 0 C 0 10 10 10 10 0").unwrap();
    assert_eq!(path.effective_control1(0), None);
    assert_eq!(path.effective_control1(1), None);
}

#[test]
fn test_reflection_is_read_only_guide() {
    let path = PathCommands::from_d("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();
    let points = path.interaction_points(2);

    let reflected = points.handle(HandleName::Control1).unwrap();
    assert!(!reflected.interactive);
    assert_eq!(reflected.position, Point::new(10.0, -10.0));

    assert_eq!(points.guides.len(), 2);
    assert!(!points.guides[0].interactive);
    assert_eq!(points.guides[0].start, Point::new(10.0, 0.0));
    assert_eq!(points.guides[0].end, Point::new(10.0, -10.0));
    assert!(points.guides[1].interactive);

    let draggable: Vec<HandleName> = points.interactive_handles().map(|h| h.name).collect();
    assert_eq!(draggable, vec![HandleName::Control2, HandleName::End]);
}

#[test]
fn test_reflection_tracks_predecessor_drag() {
    let mut path = PathCommands::from_d("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();

    let update = path.apply_delta(1, HandleName::Control2, Point::new(2.0, 0.0), Gesture::Move);
    assert_eq!(
        update.helpers[2].position(HandleName::Control1),
        Some(Point::new(8.0, -10.0))
    );
    assert_eq!(path.effective_control1(2), Some(Point::new(8.0, -10.0)));
}

#[test]
#[should_panic(expected = "has no draggable 'control1' handle")]
fn test_dragging_reflection_is_a_contract_violation() {
    let mut path = PathCommands::from_d("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();
    path.apply_delta(2, HandleName::Control1, Point::new(1.0, 1.0), Gesture::Move);
}
