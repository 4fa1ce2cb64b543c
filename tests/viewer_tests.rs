//! Chart feed, camera rig, scene consumer and SSE decoder tests

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use drone_relay::state::SimulationSnapshot;
    use drone_relay::vector::Vec3;
    use drone_relay::viewer::camera::{CameraPose, CameraRig, CYCLE_DEBOUNCE};
    use drone_relay::viewer::chart::ChartFeed;
    use drone_relay::viewer::scene::{to_render, SceneConsumer, CAMERA_LIFT};
    use drone_relay::viewer::sse::FrameDecoder;

    fn snapshot(ts: i64, drone_vel: Vec3, ball_vel: Vec3) -> SimulationSnapshot {
        SimulationSnapshot {
            ts,
            drone_vel,
            ball_vel,
            ..SimulationSnapshot::default()
        }
    }

    // -----------------------------------------------------------------------
    // Chart feed
    // -----------------------------------------------------------------------

    #[test]
    fn window_keeps_only_the_last_n_samples() {
        let mut feed = ChartFeed::new(3, 1);

        for i in 0..5 {
            let accepted = feed.push(&snapshot(
                i * 1_000_000,
                Vec3::new(i as f64, 0.0, 0.0),
                Vec3::ZERO,
            ));
            assert!(accepted);
        }

        assert_eq!(feed.capacity(), 3);
        assert_eq!(feed.timestamps(), vec![2.0, 3.0, 4.0]);
        assert_eq!(feed.drone_speeds(), vec![2.0 * 3.6, 3.0 * 3.6, 4.0 * 3.6]);
    }

    #[test]
    fn speed_displays_in_kmh() {
        let mut feed = ChartFeed::new(4, 1);
        feed.push(&snapshot(0, Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO));

        let (t_ms, drone_kmh, _) = feed.latest().unwrap();
        assert_eq!(t_ms, 0.0);
        assert_eq!(drone_kmh, 36.0);
    }

    #[test]
    fn decimation_keeps_one_of_every_k() {
        let mut feed = ChartFeed::new(8, 3);

        let accepted: Vec<bool> = (0..9)
            .map(|i| feed.push(&snapshot(i, Vec3::ZERO, Vec3::ZERO)))
            .collect();

        assert_eq!(
            accepted,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn zero_capacity_is_clamped_and_stays_fixed() {
        let mut feed = ChartFeed::new(0, 1);
        assert_eq!(feed.capacity(), 1);

        for i in 0..3 {
            feed.push(&snapshot(i * 1_000_000, Vec3::new(i as f64, 0.0, 0.0), Vec3::ZERO));
        }

        assert_eq!(feed.capacity(), 1);
        assert_eq!(feed.timestamps(), vec![2.0]);
    }

    #[test]
    fn time_base_is_relative_to_first_accepted_sample() {
        let mut feed = ChartFeed::new(4, 1);
        feed.push(&snapshot(5_000_000_000, Vec3::ZERO, Vec3::ZERO));
        feed.push(&snapshot(5_250_000_000, Vec3::ZERO, Vec3::ZERO));

        let (t_ms, _, _) = feed.latest().unwrap();
        assert_eq!(t_ms, 250.0);
    }

    // -----------------------------------------------------------------------
    // Camera rig
    // -----------------------------------------------------------------------

    #[test]
    fn cycling_through_all_slots_returns_to_free_camera() {
        let mut rig = CameraRig::new(2);
        assert_eq!(rig.slots(), 3);
        assert_eq!(rig.index(), 0);
        assert!(rig.orbit_enabled());

        let mut now = Instant::now();
        for expected in [1, 2, 0] {
            assert!(rig.cycle_at(now));
            assert_eq!(rig.index(), expected);
            now += Duration::from_millis(300);
        }
        assert!(rig.orbit_enabled());
    }

    #[test]
    fn cycle_is_debounced() {
        let mut rig = CameraRig::new(2);
        let now = Instant::now();

        assert!(rig.cycle_at(now));
        assert!(!rig.cycle_at(now + Duration::from_millis(100)));
        assert_eq!(rig.index(), 1);

        assert!(rig.cycle_at(now + CYCLE_DEBOUNCE));
        assert_eq!(rig.index(), 2);
    }

    #[test]
    fn orbit_input_is_disabled_on_chase_slots() {
        let mut rig = CameraRig::new(1);
        rig.cycle_at(Instant::now());
        assert_eq!(rig.index(), 1);
        assert!(!rig.orbit_enabled());
    }

    #[test]
    fn free_pose_is_only_saved_on_the_free_slot() {
        let mut rig = CameraRig::new(1);
        let parked = rig.free_pose();

        let orbited = CameraPose {
            position: Vec3::new(3.0, 3.0, 3.0),
            look_at: Vec3::ZERO,
        };
        rig.save_free_pose(orbited);
        assert_eq!(rig.free_pose(), orbited);

        // On a chase slot the user is not orbiting; saves are ignored.
        rig.cycle_at(Instant::now());
        rig.save_free_pose(CameraPose {
            position: Vec3::new(9.0, 9.0, 9.0),
            look_at: Vec3::ZERO,
        });
        assert_eq!(rig.free_pose(), orbited);
        assert_ne!(rig.free_pose(), parked);
    }

    #[test]
    fn chase_places_camera_behind_the_anchor() {
        let mut rig = CameraRig::new(1);
        rig.cycle_at(Instant::now());

        // Anchor at the origin, target ten units up: offset -7 walks the
        // camera seven units out on the far side of the anchor.
        let pose = rig
            .chase(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0))
            .expect("chase slot active");
        assert_eq!(pose.position, Vec3::new(0.0, 0.0, -7.0));
        assert_eq!(pose.look_at, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn chase_is_inactive_on_the_free_slot() {
        let rig = CameraRig::new(1);
        assert!(rig.chase(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn chase_with_coincident_points_stays_finite() {
        let mut rig = CameraRig::new(1);
        rig.cycle_at(Instant::now());

        let anchor = Vec3::new(1.0, 2.0, 3.0);
        let pose = rig.chase(anchor, anchor).unwrap();
        assert_eq!(pose.position, anchor);
    }

    // -----------------------------------------------------------------------
    // Scene consumer
    // -----------------------------------------------------------------------

    #[test]
    fn render_frame_swaps_y_and_z() {
        assert_eq!(to_render(Vec3::new(1.0, 2.0, 3.0)), [1.0, 3.0, 2.0]);
    }

    #[test]
    fn apply_updates_all_transforms() {
        let mut scene = SceneConsumer::new(1);
        let snap = SimulationSnapshot {
            ts: 1,
            drone_pos: Vec3::new(1.0, 2.0, 3.0),
            drone_ang: Vec3::new(0.1, 0.2, 0.3),
            ball_pos: Vec3::new(4.0, 5.0, 0.0),
            ..SimulationSnapshot::default()
        };

        scene.apply(&snap);
        let pose = scene.pose();
        assert_eq!(pose.drone_pos, snap.drone_pos);
        assert_eq!(pose.drone_ang, snap.drone_ang);
        assert_eq!(pose.ball_pos, snap.ball_pos);

        // Free slot: orbit camera rules, no chase pose.
        assert!(scene.camera().is_none());
    }

    #[test]
    fn chase_camera_render_position_is_lifted() {
        let mut scene = SceneConsumer::new(1);
        scene.cycle_camera();

        scene.apply(&SimulationSnapshot {
            ts: 1,
            drone_pos: Vec3::ZERO,
            ball_pos: Vec3::new(0.0, 0.0, 10.0),
            ..SimulationSnapshot::default()
        });

        let cam = scene.camera().unwrap();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, -7.0));

        let [x, y, z] = scene.camera_render_position().unwrap();
        assert_eq!([x, y, z], [0.0, -7.0 + CAMERA_LIFT, CAMERA_LIFT]);
    }

    // -----------------------------------------------------------------------
    // SSE frame decoder
    // -----------------------------------------------------------------------

    #[test]
    fn decodes_a_single_frame() {
        let mut decoder = FrameDecoder::new();
        let payloads = decoder.feed(b"data: {\"ts\":1}\n\n");
        assert_eq!(payloads, vec!["{\"ts\":1}"]);
    }

    #[test]
    fn reassembles_frames_split_across_chunks() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(b"data: {\"ts\"").is_empty());
        assert!(decoder.feed(b":1}\n").is_empty());
        assert_eq!(decoder.feed(b"\n"), vec!["{\"ts\":1}"]);
    }

    #[test]
    fn decodes_multiple_frames_per_chunk() {
        let mut decoder = FrameDecoder::new();
        let payloads = decoder.feed(b"data: one\n\ndata: two\n\n");
        assert_eq!(payloads, vec!["one", "two"]);
    }

    #[test]
    fn tolerates_crlf_and_comments() {
        let mut decoder = FrameDecoder::new();
        let payloads = decoder.feed(b": keep-alive\r\ndata: one\r\n\r\n");
        assert_eq!(payloads, vec!["one"]);
    }

    #[test]
    fn joins_multi_line_data_fields() {
        let mut decoder = FrameDecoder::new();
        let payloads = decoder.feed(b"data: a\ndata: b\n\n");
        assert_eq!(payloads, vec!["a\nb"]);
    }

    #[test]
    fn lone_cr_terminates_lines() {
        let mut decoder = FrameDecoder::new();
        let payloads = decoder.feed(b"data: one\r\r");
        assert_eq!(payloads, vec!["one"]);
    }

    #[test]
    fn crlf_split_across_chunks_is_one_terminator() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(b"data: one\r").is_empty());
        assert_eq!(decoder.feed(b"\n\n"), vec!["one"]);
    }

    #[test]
    fn cr_separated_data_lines_reassemble_into_valid_json() {
        // A CR/LF-pretty-printed snapshot passes ingest validation and is
        // relayed raw; the event framing then emits one data line per
        // payload line, mixing terminators. Joining must restore
        // parseable JSON.
        let mut decoder = FrameDecoder::new();
        let payloads = decoder.feed(b"data: {\rdata:  \"ts\": 1\r\ndata: }\n\n");

        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0], "{\n \"ts\": 1\n}");
        let value: serde_json::Value = serde_json::from_str(&payloads[0]).unwrap();
        assert_eq!(value["ts"], 1);
    }
}
