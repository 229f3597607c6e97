//! The FrameManager coordinates frame lifecycle, z-order, and dragging.

mod drag;
mod focus;
mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::FrameEvent;
    use crate::frame::FrameSpec;
    use crate::surface::{NullSurface, Surface};
    use benchdeck_common::{FrameError, FrameId, Point, Size};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn container() -> Size {
        Size::new(1280.0, 720.0)
    }

    fn manager() -> FrameManager {
        FrameManager::with_surface(Box::new(NullSurface::new(container())))
    }

    fn spec(title: &str) -> FrameSpec {
        FrameSpec::new(title, Size::new(400.0, 300.0)).header_height(30.0)
    }

    /// Surface that logs every call for assertions.
    struct RecordingSurface {
        size: Size,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Size {
            self.size
        }
        fn attach(&mut self, id: FrameId, _at: Point, z: u32) {
            self.calls.lock().unwrap().push(format!("attach {id} z{z}"));
        }
        fn detach(&mut self, id: FrameId) {
            self.calls.lock().unwrap().push(format!("detach {id}"));
        }
        fn place(&mut self, id: FrameId, at: Point) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("place {id} {},{}", at.x, at.y));
        }
        fn raise(&mut self, id: FrameId, z: u32) {
            self.calls.lock().unwrap().push(format!("raise {id} z{z}"));
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let mgr = FrameManager::new();
        assert_eq!(mgr.frame_count(), 0);
        assert_eq!(mgr.topmost(), None);
        assert!(!mgr.is_dragging());
    }

    #[test]
    fn create_assigns_monotonic_ids_and_z() {
        let mut mgr = manager();
        let a = mgr.create(spec("A"));
        let b = mgr.create(spec("B"));
        assert_eq!(a, FrameId(1));
        assert_eq!(b, FrameId(2));
        assert_eq!(mgr.frame(a).unwrap().z(), INITIAL_Z);
        assert_eq!(mgr.frame(b).unwrap().z(), INITIAL_Z + 1);
        assert_eq!(mgr.topmost(), Some(b));
    }

    #[test]
    fn created_frame_is_not_shown() {
        let mut mgr = manager();
        let id = mgr.create(spec("A"));
        assert!(!mgr.frame(id).unwrap().is_shown());
    }

    #[test]
    fn show_without_surface_fails() {
        let mut mgr = FrameManager::new();
        let id = mgr.create(spec("A"));
        assert!(matches!(mgr.show(id), Err(FrameError::NoSurface)));
    }

    #[test]
    fn show_unknown_frame_fails() {
        let mut mgr = manager();
        assert!(matches!(
            mgr.show(FrameId(99)),
            Err(FrameError::UnknownFrame(FrameId(99)))
        ));
    }

    #[test]
    fn show_twice_fails() {
        let mut mgr = manager();
        let id = mgr.create(spec("A"));
        mgr.show(id).unwrap();
        assert!(matches!(mgr.show(id), Err(FrameError::AlreadyShown(_))));
    }

    #[test]
    fn focus_reorders_stack() {
        // Scenario: create A, B, C, focus A -> ranking B < C < A.
        let mut mgr = manager();
        let a = mgr.create(spec("A"));
        let b = mgr.create(spec("B"));
        let c = mgr.create(spec("C"));

        assert!(mgr.focus(a));
        let za = mgr.frame(a).unwrap().z();
        let zb = mgr.frame(b).unwrap().z();
        let zc = mgr.frame(c).unwrap().z();
        assert!(zb < zc && zc < za);
        assert_eq!(mgr.topmost(), Some(a));
    }

    #[test]
    fn focus_topmost_is_a_noop() {
        let mut mgr = manager();
        let a = mgr.create(spec("A"));
        let z = mgr.frame(a).unwrap().z();
        assert!(!mgr.focus(a));
        assert_eq!(mgr.frame(a).unwrap().z(), z);
    }

    #[test]
    fn focus_after_interleaved_creates_keeps_strict_maximum() {
        let mut mgr = manager();
        let a = mgr.create(spec("A"));
        mgr.create(spec("B"));
        mgr.focus(a);
        let c = mgr.create(spec("C"));
        // Most recent create wins over the earlier focus.
        assert_eq!(mgr.topmost(), Some(c));
        let zc = mgr.frame(c).unwrap().z();
        for id in [1, 2] {
            assert!(mgr.frame(FrameId(id)).unwrap().z() < zc);
        }
    }

    #[test]
    fn hit_test_picks_topmost_overlap() {
        let mut mgr = manager();
        let a = mgr.create(spec("A").at(Point::new(100.0, 100.0)));
        let b = mgr.create(spec("B").at(Point::new(150.0, 150.0)));
        mgr.show(a).unwrap();
        mgr.show(b).unwrap();

        // Overlap region belongs to b (created later, higher z).
        assert_eq!(mgr.hit_test(Point::new(200.0, 200.0)), Some(b));
        // A-only region.
        assert_eq!(mgr.hit_test(Point::new(110.0, 110.0)), Some(a));
        // Empty playground.
        assert_eq!(mgr.hit_test(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn hit_test_ignores_hidden_frames() {
        let mut mgr = manager();
        let _hidden = mgr.create(spec("A").at(Point::new(0.0, 0.0)));
        assert_eq!(mgr.hit_test(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn pointer_down_on_header_starts_drag() {
        let mut mgr = manager();
        let id = mgr.create(spec("A").at(Point::new(100.0, 100.0)));
        mgr.show(id).unwrap();

        let hit = mgr.pointer_down(Point::new(140.0, 110.0));
        assert_eq!(hit, Some(id));
        assert!(mgr.is_dragging());
    }

    #[test]
    fn pointer_down_on_body_focuses_without_drag() {
        let mut mgr = manager();
        let a = mgr.create(spec("A").at(Point::new(100.0, 100.0)));
        let b = mgr.create(spec("B").at(Point::new(600.0, 100.0)));
        mgr.show(a).unwrap();
        mgr.show(b).unwrap();

        // Below A's 30px header strip.
        let hit = mgr.pointer_down(Point::new(140.0, 250.0));
        assert_eq!(hit, Some(a));
        assert!(!mgr.is_dragging());
        assert_eq!(mgr.topmost(), Some(a));
    }

    #[test]
    fn drag_preserves_pointer_offset() {
        let mut mgr = manager();
        let id = mgr.create(spec("A").at(Point::new(100.0, 100.0)));
        mgr.show(id).unwrap();

        // Grab the header 40px right, 10px down of the corner.
        mgr.pointer_down(Point::new(140.0, 110.0));
        let pos = mgr.pointer_move(Point::new(340.0, 210.0)).unwrap();
        assert_eq!(pos, Point::new(300.0, 200.0));
        assert_eq!(mgr.frame(id).unwrap().position, pos);
    }

    #[test]
    fn drag_clamps_to_header_box() {
        let mut mgr = manager();
        let id = mgr.create(spec("A").at(Point::new(100.0, 100.0)));
        mgr.show(id).unwrap();
        mgr.pointer_down(Point::new(100.0, 100.0));

        // Way past the bottom-right corner: x limited by frame width,
        // y by header height only, so the body may hang off-screen.
        let pos = mgr.pointer_move(Point::new(5000.0, 5000.0)).unwrap();
        assert_eq!(pos, Point::new(1280.0 - 400.0, 720.0 - 30.0));

        // Way past the top-left corner.
        let pos = mgr.pointer_move(Point::new(-500.0, -500.0)).unwrap();
        assert_eq!(pos, Point::new(0.0, 0.0));
    }

    #[test]
    fn random_walk_never_escapes_bounds() {
        let mut mgr = manager();
        let id = mgr.create(spec("A"));
        mgr.show(id).unwrap();
        mgr.pointer_down(Point::new(10.0, 10.0));

        // Deterministic pseudo-random pointer path.
        let mut seed = 0x2545f491u64;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = ((seed >> 16) % 4000) as f64 - 1000.0;
            let y = ((seed >> 40) % 4000) as f64 - 1000.0;
            let pos = mgr.pointer_move(Point::new(x, y)).unwrap();
            assert!(pos.x >= 0.0 && pos.x <= 1280.0 - 400.0);
            assert!(pos.y >= 0.0 && pos.y <= 720.0 - 30.0);
        }
    }

    #[test]
    fn pointer_up_ends_drag() {
        let mut mgr = manager();
        let id = mgr.create(spec("A"));
        mgr.show(id).unwrap();
        mgr.pointer_down(Point::new(10.0, 10.0));
        mgr.pointer_up();
        assert!(!mgr.is_dragging());
        assert_eq!(mgr.pointer_move(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn blur_cancels_drag() {
        let mut mgr = manager();
        let id = mgr.create(spec("A"));
        mgr.show(id).unwrap();
        mgr.pointer_down(Point::new(10.0, 10.0));
        mgr.cancel_drag();
        assert!(!mgr.is_dragging());
    }

    #[test]
    fn dispose_runs_callback_exactly_once() {
        let mut mgr = manager();
        let fired = Arc::new(AtomicUsize::new(0));
        let f = Arc::clone(&fired);
        let id = mgr.create(spec("A").on_dispose(move || {
            f.fetch_add(1, Ordering::SeqCst);
        }));
        mgr.show(id).unwrap();

        mgr.dispose(id);
        mgr.dispose(id);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(mgr.frame_count(), 0);
    }

    #[test]
    fn dispose_mid_drag_releases_drag() {
        let mut mgr = manager();
        let id = mgr.create(spec("A"));
        mgr.show(id).unwrap();
        mgr.pointer_down(Point::new(10.0, 10.0));

        mgr.dispose(id);
        assert!(!mgr.is_dragging());
        assert_eq!(mgr.pointer_move(Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn surface_sees_lifecycle_calls() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut mgr = FrameManager::with_surface(Box::new(RecordingSurface {
            size: container(),
            calls: Arc::clone(&calls),
        }));

        let a = mgr.create(spec("A"));
        let b = mgr.create(spec("B"));
        mgr.show(a).unwrap();
        mgr.show(b).unwrap();
        mgr.focus(a);
        mgr.dispose(a);

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "attach frame-1 z1000",
                "attach frame-2 z1001",
                "raise frame-1 z1002",
                "detach frame-1",
            ]
        );
    }

    #[test]
    fn event_hub_reports_lifecycle() {
        let mut mgr = manager();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let _guard = mgr.events().listen(move |e: &FrameEvent| {
            s.lock().unwrap().push(*e);
        });

        let id = mgr.create(spec("A"));
        mgr.show(id).unwrap();
        mgr.pointer_down(Point::new(10.0, 10.0));
        mgr.pointer_move(Point::new(60.0, 40.0));
        mgr.pointer_up();
        mgr.dispose(id);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], FrameEvent::Shown(id));
        assert!(matches!(seen[1], FrameEvent::Moved(i, _) if i == id));
        assert_eq!(*seen.last().unwrap(), FrameEvent::Disposed(id));
    }
}
