use glam::Vec3;
use path_camera::config::Settings;
use path_camera::core::{NavigationConfig, NavigationPhase, NavigationSession, Smoothing};
use path_camera::math::{CameraPose, CurveOptions, CurvePath};
use path_camera::traits::{normalize_input, InputEvent, InputUnits, TouchDrag, WheelDelta};
use path_camera::Camera;

const FRAME: f32 = 1.0 / 60.0;

fn straight_curve() -> CurvePath {
    CurvePath::from_points(
        vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)],
        &CurveOptions::default(),
    )
    .unwrap()
}

fn winding_curve() -> CurvePath {
    CurvePath::from_points(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 2.0, 0.0),
            Vec3::new(10.0, 4.0, 10.0),
            Vec3::new(0.0, 2.0, 20.0),
            Vec3::new(-5.0, 0.0, 30.0),
        ],
        &CurveOptions::default(),
    )
    .unwrap()
}

/// Straight run along +X with a control point repeated midway
fn repeated_point_curve() -> CurvePath {
    CurvePath::from_points(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(20.0, 0.0, 0.0),
        ],
        &CurveOptions::default(),
    )
    .unwrap()
}

fn session_with(curve: CurvePath, sensitivity: f32, smoothing: Smoothing) -> NavigationSession {
    let settings = Settings {
        navigation: NavigationConfig {
            sensitivity,
            smoothing,
        },
        ..Settings::default()
    };
    NavigationSession::new(curve, &settings)
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_two_point_curve_start_and_end() {
        let mut session = session_with(straight_curve(), 0.001, Smoothing::Immediate);
        let mut camera = Camera::default();

        let start = session.advance_frame(FRAME, &mut camera);
        assert_eq!(start.position, Vec3::ZERO);
        assert_eq!(camera.position, Vec3::ZERO);

        session.jump_to(1.0);
        let end = session.advance_frame(FRAME, &mut camera);
        assert_eq!(end.position, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_forward_scroll_increases_z_monotonically() {
        let mut session = session_with(straight_curve(), 0.001, Smoothing::Immediate);
        let mut camera = Camera::default();
        let mut last_z = session.advance_frame(FRAME, &mut camera).position.z;

        for _ in 0..40 {
            session.handle_input(&WheelDelta::Pixels(-30.0));
            let z = session.advance_frame(FRAME, &mut camera).position.z;
            assert!(z >= last_z, "z went backwards: {} -> {}", last_z, z);
            last_z = z;
        }

        assert_eq!(session.phase(), NavigationPhase::AtEnd);
        assert!((last_z - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_damped_scroll_increases_z_monotonically() {
        let mut session = session_with(straight_curve(), 0.001, Smoothing::Damped { rate: 6.0 });
        let mut camera = Camera::default();
        let mut last_z = 0.0;

        for frame in 0..240 {
            if frame % 10 == 0 {
                session.handle_input(&WheelDelta::Lines(-1.0));
            }
            let z = session.advance_frame(FRAME, &mut camera).position.z;
            assert!(z >= last_z);
            last_z = z;
        }

        assert!(last_z > 9.0);
    }

    #[test]
    fn test_extra_forward_delta_at_end_stays_at_one() {
        let mut session = session_with(straight_curve(), 0.001, Smoothing::Immediate);
        let mut camera = Camera::default();
        session.jump_to(1.0);

        session.handle_input(&WheelDelta::Lines(-3.0));
        session.advance_frame(FRAME, &mut camera);

        assert_eq!(session.progress(), 1.0);
        assert_eq!(session.phase(), NavigationPhase::AtEnd);
    }

    #[test]
    fn test_frame_uniform_matches_camera() {
        let mut session = session_with(winding_curve(), 0.001, Smoothing::Immediate);
        let mut camera = Camera::default();
        session.handle_input(&WheelDelta::Lines(-3.0));
        let pose = session.advance_frame(FRAME, &mut camera);

        let uniform = camera.to_uniform(4.0 / 3.0, session.progress());
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 128);
        assert_eq!(uniform.position, pose.position.to_array());
        assert_eq!(uniform.progress, session.progress());

        // The look target sits at the centre of the screen
        let view_proj = glam::Mat4::from_cols_array_2d(&uniform.view_proj);
        let ndc = view_proj.project_point3(pose.position + pose.forward * 5.0);
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "ndc was {:?}", ndc);
    }

    #[test]
    fn test_boundaries_are_reenterable() {
        let mut session = session_with(straight_curve(), 0.001, Smoothing::Immediate);

        session.handle_input(&WheelDelta::Lines(1.0));
        assert_eq!(session.phase(), NavigationPhase::AtStart);

        session.handle_input(&WheelDelta::Lines(-2.0));
        assert_eq!(session.phase(), NavigationPhase::InTransit);

        session.handle_input(&WheelDelta::Lines(-20.0));
        assert_eq!(session.phase(), NavigationPhase::AtEnd);

        session.handle_input(&WheelDelta::Lines(20.0));
        assert_eq!(session.phase(), NavigationPhase::AtStart);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_progress_stays_clamped_and_bounded() {
        let sensitivity = 0.0007;
        let mut session = session_with(winding_curve(), sensitivity, Smoothing::Immediate);
        let units = InputUnits::default();
        let events = [
            InputEvent::Wheel(WheelDelta::Lines(-3.0)),
            InputEvent::Touch(TouchDrag { previous_y: 900.0, current_y: 100.0 }),
            InputEvent::Wheel(WheelDelta::Pixels(250.0)),
            InputEvent::Wheel(WheelDelta::Lines(-40.0)),
            InputEvent::Touch(TouchDrag { previous_y: 10.0, current_y: 700.0 }),
            InputEvent::Wheel(WheelDelta::Pixels(-1.5)),
            InputEvent::Wheel(WheelDelta::Lines(100.0)),
        ];

        for event in events.iter().cycle().take(50) {
            let before = session.progress();
            session.handle_input(event);
            let after = session.progress();

            assert!((0.0..=1.0).contains(&after));
            let bound = sensitivity * normalize_input(event, &units).abs();
            assert!((after - before).abs() <= bound + 1e-6);
        }
    }

    #[test]
    fn test_wheel_and_touch_travel_equally() {
        let units = InputUnits::default();
        let mut wheel = session_with(winding_curve(), 0.0005, Smoothing::Immediate);
        let mut touch = session_with(winding_curve(), 0.0005, Smoothing::Immediate);

        // Three notches vs. the same distance dragged in small touch increments
        wheel.handle_input(&WheelDelta::Lines(-3.0));
        let total = 3.0 * units.line_height_px;
        let steps = 12;
        let mut y = 800.0;
        for _ in 0..steps {
            let next = y - total / steps as f32;
            touch.handle_input(&TouchDrag { previous_y: y, current_y: next });
            y = next;
        }

        assert!((wheel.progress() - touch.progress()).abs() < 1e-4);
    }

    #[test]
    fn test_advance_frame_is_idempotent_when_idle() {
        let mut session = session_with(winding_curve(), 0.001, Smoothing::Immediate);
        session.handle_input(&WheelDelta::Lines(-4.0));

        let mut first = CameraPose::default();
        let mut second = CameraPose::default();
        let a = session.advance_frame(FRAME, &mut first);
        let b = session.advance_frame(FRAME, &mut second);

        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_orientation_never_jumps_along_path() {
        for (name, curve) in [("winding", winding_curve()), ("repeated", repeated_point_curve())] {
            let mut session = session_with(curve, 0.0001, Smoothing::Immediate);
            let mut camera = Camera::default();
            let mut previous = session.advance_frame(FRAME, &mut camera);

            while session.progress() < 1.0 {
                session.handle_input(&WheelDelta::Pixels(-5.0));
                let pose = session.advance_frame(FRAME, &mut camera);
                assert!(
                    pose.forward.dot(previous.forward) > 0.98,
                    "{} curve: orientation jumped at progress {}",
                    name,
                    session.progress()
                );
                assert!(pose.forward.dot(pose.up).abs() < 1e-4);
                previous = pose;
            }
        }
    }

    #[test]
    fn test_repeated_point_never_moves_backwards() {
        let mut session = session_with(repeated_point_curve(), 0.0001, Smoothing::Immediate);
        let mut camera = Camera::default();
        let mut last_x = session.advance_frame(FRAME, &mut camera).position.x;

        while session.progress() < 1.0 {
            session.handle_input(&WheelDelta::Pixels(-5.0));
            let pose = session.advance_frame(FRAME, &mut camera);
            assert!(
                pose.position.x >= last_x - 1e-4,
                "x went backwards at progress {}: {} -> {}",
                session.progress(),
                last_x,
                pose.position.x
            );
            assert!(pose.forward.x > 0.9, "camera turned away at progress {}", session.progress());
            last_x = pose.position.x;
        }

        assert_eq!(last_x, 20.0);
    }

    #[test]
    fn test_camera_faces_along_the_path() {
        let mut session = session_with(winding_curve(), 0.001, Smoothing::Immediate);
        let mut camera = Camera::default();

        for step in 0..=10 {
            session.jump_to(step as f32 / 10.0);
            let pose = session.advance_frame(FRAME, &mut camera);
            let tangent = session.curve().tangent_at(session.progress());
            assert!(pose.forward.dot(tangent) > 0.9, "at step {}", step);
        }
    }
}
