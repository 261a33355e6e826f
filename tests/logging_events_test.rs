//! Engine log events, captured through a thread-local `fmt` subscriber.

use std::io;
use std::sync::{Arc, Mutex};

use tui_2048::core::GameState;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn captured(f: impl FnOnce()) -> Vec<String> {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.lines()
}

#[test]
fn test_game_started_tells_start_from_restart() {
    let lines = captured(|| {
        let mut state = GameState::new(77);
        state.start();
        state.restart();
    });

    let started: Vec<&String> = lines.iter().filter(|l| l.contains("game started")).collect();
    assert_eq!(started.len(), 2, "{:?}", lines);
    assert!(started[0].contains("episode=0") && started[0].contains("restart=false"));
    assert!(started[1].contains("episode=1") && started[1].contains("restart=true"));
    assert!(started.iter().all(|l| l.contains("seed=77")));
}
