use shapekit_designer::{Gesture, HandleName, PathCommands, Point};

#[test]
fn test_relative_successors_follow_without_explicit_calls() {
    let mut path = PathCommands::from_d("M 0 0 l 10 0 l 0 10").unwrap();
    let before = path.helpers().to_vec();

    let update = path.apply_delta(1, HandleName::End, Point::new(0.0, 4.0), Gesture::Move);

    assert_eq!(path.absolute_end(1), Point::new(10.0, 4.0));
    assert_eq!(path.absolute_end(2), Point::new(10.0, 14.0));
    assert_eq!(
        update.helpers[2].position(HandleName::End),
        Some(Point::new(10.0, 14.0))
    );
    assert_ne!(path.helpers()[2], before[2]);
    assert_eq!(path.helpers(), update.helpers.as_slice());
}

#[test]
fn test_absolute_successors_stay_put() {
    let mut path = PathCommands::from_d("M 0 0 L 10 0 L 10 10").unwrap();

    path.apply_delta(1, HandleName::End, Point::new(0.0, 4.0), Gesture::Move);
    assert_eq!(path.absolute_end(2), Point::new(10.0, 10.0));
}

#[test]
fn test_straight_lines_follow_their_predecessor() {
    let mut path = PathCommands::from_d("M 0 0 L 10 0 H 20 V 30").unwrap();

    path.apply_delta(1, HandleName::End, Point::new(0.0, 5.0), Gesture::Move);

    // H keeps its x but takes the new y; V keeps its y and takes H's x
    assert_eq!(path.absolute_end(2), Point::new(20.0, 5.0));
    assert_eq!(path.absolute_end(3), Point::new(20.0, 30.0));
    assert_eq!(
        path.helpers()[2].position(HandleName::End),
        Some(Point::new(20.0, 5.0))
    );
}

#[test]
fn test_cubic_guides_follow_predecessor() {
    let mut path = PathCommands::from_d("M 0 0 L 10 0 c 0 5 5 5 5 0").unwrap();

    let update = path.apply_delta(1, HandleName::End, Point::new(-10.0, 0.0), Gesture::Move);
    let cubic = &update.helpers[2];

    assert_eq!(cubic.guides[0].start, Point::new(0.0, 0.0));
    assert_eq!(cubic.guides[0].end, Point::new(0.0, 5.0));
    assert_eq!(cubic.guides[1].start, Point::new(5.0, 0.0));
    assert_eq!(cubic.guides[1].end, Point::new(5.0, 5.0));
}

#[test]
fn test_smooth_reflection_updates_when_previous_end_moves() {
    let mut path = PathCommands::from_d("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();

    let update = path.apply_delta(1, HandleName::End, Point::new(0.0, 2.0), Gesture::Move);

    // end (10,2) and control2 (10,12) move together, so the mirror moves too
    assert_eq!(
        update.helpers[2].position(HandleName::Control1),
        Some(Point::new(10.0, -8.0))
    );
}

#[test]
fn test_move_then_up_leaves_consistent_state() {
    let mut path = PathCommands::from_d("m 1 1 l 1 1 l 1 1 l 1 1").unwrap();

    for step in 1..=10 {
        let delta = Point::new(step as f64, 0.0);
        let update = path.apply_delta(1, HandleName::End, delta, Gesture::Move);
        let ends = path.absolute_ends();
        for (i, helpers) in update.helpers.iter().enumerate() {
            assert_eq!(helpers.position(HandleName::End), Some(ends[i]));
        }
    }

    path.apply_delta(1, HandleName::End, Point::new(10.0, 0.0), Gesture::Up);
    assert_eq!(path.absolute_end(3), Point::new(14.0, 4.0));
}
