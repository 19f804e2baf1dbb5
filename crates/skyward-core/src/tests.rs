#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::FlightCommand;
    use crate::enums::*;
    use crate::events::FlightEvent;
    use crate::state::{FlightSnapshot, HudView};
    use crate::types::{Attitude, Position, SimTime};

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn test_level_attitude_points_along_z() {
        assert_vec_close(Attitude::default().forward(), DVec3::Z);
    }

    #[test]
    fn test_yaw_turns_nose_about_vertical_axis() {
        // Positive yaw about +y swings +z toward +x.
        let forward = Attitude::new(0.0, 0.0, 90.0).forward();
        assert_vec_close(forward, DVec3::X);
    }

    #[test]
    fn test_negative_pitch_lifts_nose() {
        // Rotation about +x by a negative angle tips +z upward.
        let forward = Attitude::new(-30.0, 0.0, 0.0).forward();
        assert!(forward.y > 0.0, "nose should point up, got {forward:?}");
        assert!((forward.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_roll_alone_keeps_heading() {
        let forward = Attitude::new(0.0, 45.0, 0.0).forward();
        assert_vec_close(forward, DVec3::Z);
    }

    #[test]
    fn test_display_yaw_wraps_and_keeps_sign() {
        assert_eq!(Attitude::new(0.0, 0.0, 370.4).display_yaw(), 10);
        assert_eq!(Attitude::new(0.0, 0.0, -725.0).display_yaw(), -5);
        assert_eq!(Attitude::new(0.0, 0.0, 359.6).display_yaw(), 0);
    }

    #[test]
    fn test_range_to() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 12.0);
        assert!((a.range_to(&b) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_tracks_host_clock() {
        let mut time = SimTime::default();
        time.advance_to(0.5);
        time.advance_to(2.25);
        assert_eq!(time.frame, 2);
        assert_eq!(time.elapsed_secs, 2.25);
    }

    #[test]
    fn test_balloon_material_glow() {
        assert_eq!(BalloonMaterial::default(), BalloonMaterial::Normal);
        assert_eq!(BalloonMaterial::Normal.emissive(), 0xffff00);
        assert_eq!(BalloonMaterial::Hit.emissive(), 0xff0000);
        assert!(BalloonMaterial::Hit.emissive_intensity() > BalloonMaterial::Normal.emissive_intensity());
    }

    #[test]
    fn test_command_json_is_tagged() {
        let cmd = FlightCommand::key_down("e", "KeyE");
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"KeyDown\""), "got {json}");
        let back: FlightCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_snapshot_serializes_events() {
        let snapshot = FlightSnapshot {
            phase: FlightPhase::Crashed,
            hud: HudView {
                speed: 0,
                score: 4,
                ..Default::default()
            },
            events: vec![FlightEvent::Crashed {
                balloon_id: 7,
                final_score: 4,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FlightSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, FlightPhase::Crashed);
        assert_eq!(back.hud, snapshot.hud);
        assert_eq!(back.events, snapshot.events);
    }
}
