use std::{collections::HashSet, fs, sync::Arc, thread};

use lvlog::{LogLevel, Logger, SinkFlag, logger_info};

const THREADS: usize = 8;
const LINES: usize = 250;

#[test]
fn every_line_arrives_whole() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let logger = Arc::new(Logger::builder().log_dir(tmp.path()).build());
    logger.configure("load", SinkFlag::FILE, LogLevel::Info);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES {
                    logger_info!(logger, "thread={t} seq={i} payload={}", "x".repeat(64));
                    logger.trace(format_args!("below threshold"));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("writer thread");
    }

    let text = fs::read_to_string(tmp.path().join("load.log")).expect("log file");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("[I] "), "torn line: {line}");
        assert!(line.ends_with(&"x".repeat(64)), "torn line: {line}");
        let msg = line.split(": thread=").nth(1).expect("message body");
        assert!(seen.insert(msg.to_owned()), "duplicate line: {line}");
    }
}

#[test]
fn reconfigure_while_logging_does_not_lose_or_tear_lines() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let logger = Arc::new(Logger::builder().log_dir(tmp.path()).build());
    logger.configure("race", SinkFlag::FILE, LogLevel::Trace);

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES {
                    logger.error(format_args!("w{t}-{i}"));
                }
            })
        })
        .collect();
    // Same file each time, so every line must end up in it.
    for _ in 0..50 {
        logger.configure("race", SinkFlag::FILE, LogLevel::Trace);
    }
    for w in writers {
        w.join().expect("writer thread");
    }

    let text = fs::read_to_string(tmp.path().join("race.log")).expect("log file");
    assert_eq!(text.lines().count(), 4 * LINES);
    assert!(text.lines().all(|l| l.starts_with("[E] ")));
}
