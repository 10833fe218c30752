use glam::Vec2;
use lines_intersection::{
    AppCommand, AppController, AppIntent, AppState, CollapseState, DrawPrimitive, EditorOptions,
};
use std::time::{Duration, Instant};

/// Zieht eine Linie per Pointer-Intents (Down → Move → Up).
fn drag_line(controller: &mut AppController, state: &mut AppState, from: Vec2, to: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { pos: from })
        .expect("PointerPressed sollte funktionieren");
    controller
        .handle_intent(state, AppIntent::PointerMoved { pos: to })
        .expect("PointerMoved sollte funktionieren");
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte funktionieren");
}

/// Lässt die Animation bis zum Ende laufen, ein fälliger Frame pro Aufruf.
fn run_frames(controller: &mut AppController, state: &mut AppState, start: Instant, frames: u32) {
    let interval = state.scheduler.interval();
    for frame in 1..=frames {
        controller
            .handle_intent(
                state,
                AppIntent::FrameElapsed {
                    now: start + interval * frame,
                },
            )
            .expect("FrameElapsed sollte funktionieren");
    }
}

#[test]
fn test_drag_commits_segment_without_extra_redraw() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(10.0, 10.0),
        Vec2::new(200.0, 10.0),
    );

    assert_eq!(state.segment_count(), 1);
    assert!(!state.drawing.is_drawing());
    assert_eq!(state.drawing.segments[0].end, Vec2::new(200.0, 10.0));

    // Letzter Redraw stammt vom Move
    assert_eq!(state.surface.line_count(), 1);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::CommitSegment));
    assert_eq!(state.command_log.total(), 3);
}

#[test]
fn test_move_while_drawing_redraws_with_intersection_marker() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(5.0, -5.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(5.0, 5.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");

    // Laufendes Segment wird mitgezeichnet und mitgeschnitten
    assert_eq!(state.surface.line_count(), 2);
    assert_eq!(state.marker_count(), 1);
    assert!(state.surface.primitives().contains(&DrawPrimitive::Marker {
        center: Vec2::new(5.0, 0.0),
        radius: 5.0,
    }));
}

#[test]
fn test_parallel_lines_produce_no_marker() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
    );
    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 1.0),
        Vec2::new(10.0, 1.0),
    );

    assert_eq!(state.segment_count(), 2);
    assert_eq!(state.marker_count(), 0);
}

#[test]
fn test_pointer_moved_without_press_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(50.0, 50.0),
            },
        )
        .expect("PointerMoved sollte robust sein");

    assert!(state.surface.is_blank());
    assert!(state.command_log.is_empty());
}

#[test]
fn test_collapse_clears_segments_after_frame_budget() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        Vec2::new(600.0, 400.0),
    );
    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 400.0),
        Vec2::new(600.0, 100.0),
    );

    let start = Instant::now();
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: start })
        .expect("StartCollapse sollte funktionieren");

    // Erster Frame läuft sofort
    assert_eq!(
        state.collapse.state(),
        CollapseState::Animating {
            frames_remaining: 179
        }
    );
    assert!(state.scheduler.is_armed());

    run_frames(&mut controller, &mut state, start, 178);
    assert_eq!(state.segment_count(), 2);
    assert_eq!(
        state.collapse.state(),
        CollapseState::Animating {
            frames_remaining: 1
        }
    );

    run_frames(&mut controller, &mut state, start + Duration::from_secs(10), 1);
    assert_eq!(state.segment_count(), 0);
    assert_eq!(state.collapse.state(), CollapseState::Idle);
    assert!(!state.scheduler.is_armed());
    assert!(state.surface.is_blank());
}

#[test]
fn test_collapse_frames_shrink_segments_and_keep_crossing_marker() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 300.0),
        Vec2::new(600.0, 300.0),
    );
    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(300.0, 0.0),
        Vec2::new(300.0, 600.0),
    );
    let initial_length = state.drawing.segments[0].length();

    let start = Instant::now();
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: start })
        .expect("StartCollapse sollte funktionieren");
    run_frames(&mut controller, &mut state, start, 10);

    let length = state.drawing.segments[0].length();
    assert!(length < initial_length);
    // Beide Linien schrumpfen um ihre Mitte (300, 300) → Schnitt bleibt erhalten
    assert_eq!(state.marker_count(), 1);
}

#[test]
fn test_frame_before_deadline_does_not_tick() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let start = Instant::now();
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: start })
        .expect("StartCollapse sollte funktionieren");
    let before = state.collapse.state();

    controller
        .handle_intent(&mut state, AppIntent::FrameElapsed { now: start })
        .expect("FrameElapsed sollte funktionieren");

    assert_eq!(state.collapse.state(), before);
}

#[test]
fn test_restart_during_collapse_resets_countdown() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(500.0, 0.0),
    );

    let start = Instant::now();
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: start })
        .expect("StartCollapse sollte funktionieren");
    run_frames(&mut controller, &mut state, start, 50);

    let restart_at = start + Duration::from_secs(5);
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: restart_at })
        .expect("Neustart sollte funktionieren");

    assert_eq!(
        state.collapse.state(),
        CollapseState::Animating {
            frames_remaining: 179
        }
    );
    // Genau eine Deadline: ein Frame nach dem Neustart
    assert_eq!(
        state.scheduler.time_until_due(restart_at),
        Some(state.scheduler.interval())
    );
    assert_eq!(state.segment_count(), 1);
}

#[test]
fn test_collapse_with_custom_budget_from_options() {
    let options = EditorOptions {
        collapse_frame_budget: 3,
        ..EditorOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );

    let start = Instant::now();
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: start })
        .expect("StartCollapse sollte funktionieren");
    run_frames(&mut controller, &mut state, start, 2);

    assert_eq!(state.segment_count(), 0);
    assert_eq!(state.collapse.state(), CollapseState::Idle);
}

#[test]
fn test_drawing_during_collapse_keeps_in_progress_segment() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
    );

    let start = Instant::now();
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: start })
        .expect("StartCollapse sollte funktionieren");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(10.0, 10.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(20.0, 20.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");

    run_frames(&mut controller, &mut state, start, 1);

    // Committed-Linie + laufende Linie werden gezeichnet
    assert_eq!(state.surface.line_count(), 2);
    let in_progress = state
        .drawing
        .in_progress()
        .expect("laufendes Segment erwartet");
    assert_eq!(in_progress.end, Vec2::new(20.0, 20.0));
}

#[test]
fn test_save_options_writes_toml() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join(format!(
        "lines_intersection_test_{}.toml",
        std::process::id()
    ));
    state.options_path = path.clone();
    state.options.collapse_frame_budget = 42;

    controller
        .handle_intent(&mut state, AppIntent::SaveOptionsRequested)
        .expect("SaveOptionsRequested sollte funktionieren");

    let loaded = EditorOptions::load_from_file(&path);
    assert_eq!(loaded.collapse_frame_budget, 42);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_out_of_range_options_are_bounded_in_state() {
    let options = EditorOptions {
        canvas_width: f32::INFINITY,
        collapse_frame_interval_ms: 1e30,
        contraction_iterations: 4_000_000_000,
        ..EditorOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    assert_eq!(state.surface.size(), [900.0, 700.0]);
    assert_eq!(state.options.contraction_iterations, 24);
    assert_eq!(state.scheduler.interval().as_millis(), 16);

    drag_line(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
    );
    let start = Instant::now();
    controller
        .handle_command(&mut state, AppCommand::StartCollapse { now: start })
        .expect("StartCollapse sollte funktionieren");
    run_frames(&mut controller, &mut state, start, 1);
    assert_eq!(state.segment_count(), 1);
}
