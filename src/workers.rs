//! Work units: named threads that print a greeting and pause, a few times
//! over. Run side by side their lines interleave; sharing a lock makes each
//! worker's whole loop one critical section, so its lines come out together.

use std::io;
use std::panic;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Lines printed by the workers, in the order they were printed.
#[derive(Debug, Clone, Default)]
pub struct Transcript(Arc<Mutex<Vec<String>>>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, line: String) {
        println!("{}", line);
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[derive(Debug, Clone)]
pub struct Greeter {
    pub thread_name: String,
    pub greeting: String,
    pub repeats: usize,
    pub pause: Duration,
}

impl Greeter {
    pub fn new(thread_name: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
            greeting: greeting.into(),
            repeats: 5,
            pause: Duration::from_secs(1),
        }
    }

    pub fn repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

fn greet(greeting: &str, repeats: usize, pause: Duration, transcript: &Transcript) {
    let current = thread::current();
    let name = current.name().unwrap_or("<unnamed>");
    for _ in 0..repeats {
        transcript.record(format!("{} is printing {}", name, greeting));
        thread::sleep(pause);
    }
}

/// Start one named worker. With `lock`, the whole loop runs while holding it.
pub fn spawn_greeter(
    greeter: Greeter,
    transcript: Transcript,
    lock: Option<Arc<Mutex<()>>>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(greeter.thread_name.clone())
        .spawn(move || {
            let _held = lock
                .as_ref()
                .map(|lock| lock.lock().unwrap_or_else(PoisonError::into_inner));
            greet(&greeter.greeting, greeter.repeats, greeter.pause, &transcript);
        })
}

fn run(greeters: Vec<Greeter>, lock: Option<Arc<Mutex<()>>>) -> io::Result<Vec<String>> {
    let transcript = Transcript::new();
    let handles = greeters
        .into_iter()
        .map(|greeter| spawn_greeter(greeter, transcript.clone(), lock.clone()))
        .collect::<io::Result<Vec<_>>>()?;

    for handle in handles {
        handle
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload));
    }
    Ok(transcript.lines())
}

/// All workers at once, no shared lock.
pub fn run_interleaved(greeters: Vec<Greeter>) -> io::Result<Vec<String>> {
    run(greeters, None)
}

/// All workers at once, serialized by one shared lock.
pub fn run_serialized(greeters: Vec<Greeter>) -> io::Result<Vec<String>> {
    run(greeters, Some(Arc::new(Mutex::new(()))))
}
