//! Tests for paced background generation and cancellation

#[cfg(test)]
mod tests {
    use mazecarve::algorithm::executor::RandomSelector;
    use mazecarve::algorithm::pacing::{
        GenerationToken, PacedGenerator, PacedOutcome, PacedRequest,
    };
    use mazecarve::spatial::dimensions::GridDimensions;
    use mazecarve::spatial::walls::WallFrame;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::{Duration, Instant};

    type Frames = Arc<Mutex<Vec<WallFrame>>>;

    fn generator() -> (PacedGenerator, Frames) {
        let frames: Frames = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&frames);
        let generator = PacedGenerator::new(move |frame: &WallFrame| {
            if let Ok(mut frames) = sink.lock() {
                frames.push(frame.clone());
            }
        });
        (generator, frames)
    }

    fn frame_count(frames: &Frames) -> usize {
        frames.lock().map(|frames| frames.len()).unwrap_or_default()
    }

    fn request(width: usize, height: usize, merge_delay: Duration) -> PacedRequest {
        PacedRequest {
            dimensions: GridDimensions::new(width, height, 10)
                .expect("test dimensions should be valid"),
            merge_delay,
        }
    }

    // Tests an unpaced run emits only the finished maze
    // Verified by emitting after every merge regardless of delay
    #[test]
    fn test_zero_delay_emits_final_only() {
        let (mut generator, frames) = generator();
        let token = generator
            .start(request(5, 5, Duration::ZERO), RandomSelector::new(1))
            .expect("run should start");
        assert_eq!(token, GenerationToken(1));

        let outcome = generator.wait().expect("worker should finish");
        let Some(PacedOutcome::Completed(grid)) = outcome else {
            unreachable!("run should complete");
        };
        assert!(grid.is_single_component());

        let frames = frames.lock().expect("frames lock");
        assert_eq!(frames.len(), 1);
        let last = frames.last().expect("one frame");
        assert!(last.is_final);
        assert_eq!(last.segments.len(), 26);
    }

    // Tests a paced run emits once per merge plus the final frame
    // Verified by skipping the final emission
    #[test]
    fn test_paced_run_emits_every_merge() {
        let (mut generator, frames) = generator();
        generator
            .start(request(3, 2, Duration::from_millis(1)), RandomSelector::new(4))
            .expect("run should start");

        assert!(matches!(
            generator.wait(),
            Ok(Some(PacedOutcome::Completed(_)))
        ));
        assert_eq!(frame_count(&frames), 6);
        assert!(matches!(generator.wait(), Ok(None)));
    }

    // Tests no frame from a cancelled run arrives after cancel returns
    // Verified by checking the token before taking the renderer lock
    #[test]
    fn test_cancelled_run_stays_silent() {
        let (mut generator, frames) = generator();
        generator
            .start(request(5, 5, Duration::from_millis(20)), RandomSelector::new(7))
            .expect("run should start");

        let deadline = Instant::now() + Duration::from_secs(5);
        while frame_count(&frames) == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(2));
        }
        assert!(frame_count(&frames) > 0, "paced run never emitted");

        let token = generator.cancel().expect("cancel should succeed");
        assert_eq!(token, GenerationToken(2));
        let emitted_before_cancel = frame_count(&frames);

        thread::sleep(Duration::from_millis(120));
        assert_eq!(frame_count(&frames), emitted_before_cancel);
        assert!(matches!(generator.wait(), Ok(Some(PacedOutcome::Cancelled))));
        assert_eq!(frame_count(&frames), emitted_before_cancel);

        let next = generator
            .start(request(5, 5, Duration::ZERO), RandomSelector::new(8))
            .expect("second run should start");
        assert_eq!(next, GenerationToken(3));
        assert!(matches!(
            generator.wait(),
            Ok(Some(PacedOutcome::Completed(_)))
        ));

        let frames = frames.lock().expect("frames lock");
        assert_eq!(frames.len(), emitted_before_cancel + 1);
        let last = frames.last().expect("final frame");
        assert!(last.is_final);
        assert_eq!(last.segments.len(), 26);
    }

    // Tests starting a run supersedes the one in flight
    // Verified by not cancelling inside start
    #[test]
    fn test_start_supersedes_previous_run() {
        let (mut generator, frames) = generator();
        generator
            .start(request(6, 6, Duration::from_secs(10)), RandomSelector::new(2))
            .expect("slow run should start");

        let started = Instant::now();
        generator
            .start(request(2, 2, Duration::ZERO), RandomSelector::new(3))
            .expect("fast run should start");
        assert!(matches!(
            generator.wait(),
            Ok(Some(PacedOutcome::Completed(_)))
        ));
        assert!(started.elapsed() < Duration::from_secs(5));

        let frames = frames.lock().expect("frames lock");
        let last = frames.last().expect("final frame");
        assert!(last.is_final);
        assert_eq!(last.segments.len(), 5);
        assert_eq!(generator.live_token().ok(), Some(GenerationToken(2)));
    }

    // Tests dropping the generator interrupts a long pause
    // Verified by skipping the condvar notification
    #[test]
    fn test_drop_interrupts_pause() {
        let (mut generator, _frames) = generator();
        generator
            .start(request(4, 4, Duration::from_secs(30)), RandomSelector::new(6))
            .expect("run should start");
        thread::sleep(Duration::from_millis(20));

        let started = Instant::now();
        drop(generator);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
