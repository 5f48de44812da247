//! End-to-end relay scenarios over real Unix sockets
//!
//! Each test binds a publisher on a unique path under the temp dir, drives
//! its input through an in-memory pipe, and runs library subscribers whose
//! outputs are captured the same way.

use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};

use bcast::{Publisher, Result, Subscriber};

const WAIT: Duration = Duration::from_secs(5);
// Long enough for the publisher's accept branch to run
const SETTLE: Duration = Duration::from_millis(100);

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bcast-e2e-{}-{}", std::process::id(), name))
}

async fn spawn_subscriber(path: &PathBuf) -> (JoinHandle<Result<()>>, DuplexStream) {
    let subscriber = Subscriber::connect(path).await.unwrap();
    let (out_w, out_r) = duplex(4096);
    let task = tokio::spawn(subscriber.run_until(out_w, std::future::pending()));
    (task, out_r)
}

async fn read_exactly(reader: &mut DuplexStream, n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    timeout(WAIT, reader.read_exact(&mut buf))
        .await
        .expect("timed out waiting for subscriber output")
        .unwrap();
    buf
}

#[tokio::test]
async fn end_to_end_two_subscribers() {
    let path = temp_path("two-subs");
    let publisher = Publisher::bind(&path).unwrap();

    let (mut feed, input) = duplex(4096);
    let pub_task = tokio::spawn(publisher.run(input));

    let (sub1_task, mut out1) = spawn_subscriber(&path).await;
    let (sub2_task, mut out2) = spawn_subscriber(&path).await;
    sleep(SETTLE).await;

    feed.write_all(b"hello\nworld\n").await.unwrap();

    assert_eq!(read_exactly(&mut out1, 12).await, b"hello\nworld\n");
    assert_eq!(read_exactly(&mut out2, 12).await, b"hello\nworld\n");

    // Kill one subscriber; the publisher and the survivor are unaffected
    sub2_task.abort();
    sleep(SETTLE).await;

    feed.write_all(b"more\n").await.unwrap();
    assert_eq!(read_exactly(&mut out1, 5).await, b"more\n");

    drop(feed);
    let pub_result = timeout(WAIT, pub_task).await.unwrap().unwrap();
    assert!(pub_result.is_ok());
    assert!(!path.exists());

    // Survivor sees the channel close and exits cleanly
    let sub1_result = timeout(WAIT, sub1_task).await.unwrap().unwrap();
    assert!(sub1_result.is_ok());
}

#[tokio::test]
async fn partial_record_completed_across_reads() {
    let path = temp_path("partial");
    let publisher = Publisher::bind(&path).unwrap();

    let (mut feed, input) = duplex(4096);
    let pub_task = tokio::spawn(publisher.run(input));

    let (sub_task, mut out) = spawn_subscriber(&path).await;
    sleep(SETTLE).await;

    feed.write_all(b"abc").await.unwrap();
    sleep(SETTLE).await;
    feed.write_all(b"def\n").await.unwrap();
    drop(feed);

    timeout(WAIT, pub_task).await.unwrap().unwrap().unwrap();
    timeout(WAIT, sub_task).await.unwrap().unwrap().unwrap();

    let mut all = Vec::new();
    out.read_to_end(&mut all).await.unwrap();
    assert_eq!(all, b"abcdef\n");
}

#[tokio::test]
async fn late_joiner_receives_only_later_frames() {
    let path = temp_path("late-joiner");
    let publisher = Publisher::bind(&path).unwrap();

    let (mut feed, input) = duplex(4096);
    let pub_task = tokio::spawn(publisher.run(input));

    let (sub1_task, mut out1) = spawn_subscriber(&path).await;
    sleep(SETTLE).await;

    feed.write_all(b"early\n").await.unwrap();
    assert_eq!(read_exactly(&mut out1, 6).await, b"early\n");

    let (sub2_task, mut out2) = spawn_subscriber(&path).await;
    sleep(SETTLE).await;

    feed.write_all(b"late\n").await.unwrap();
    drop(feed);

    timeout(WAIT, pub_task).await.unwrap().unwrap().unwrap();
    timeout(WAIT, sub1_task).await.unwrap().unwrap().unwrap();
    timeout(WAIT, sub2_task).await.unwrap().unwrap().unwrap();

    let mut rest = Vec::new();
    out1.read_to_end(&mut rest).await.unwrap();
    assert_eq!(rest, b"late\n");

    let mut all2 = Vec::new();
    out2.read_to_end(&mut all2).await.unwrap();
    assert_eq!(all2, b"late\n");
}

#[tokio::test]
async fn shutdown_closes_subscribers_and_removes_path() {
    let path = temp_path("shutdown");
    let publisher = Publisher::bind(&path).unwrap();
    assert!(path.exists());

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let (_feed, input) = duplex(4096);
    let pub_task = tokio::spawn(publisher.run_until(input, async {
        let _ = rx.await;
    }));

    let (sub1_task, mut out1) = spawn_subscriber(&path).await;
    let (sub2_task, mut out2) = spawn_subscriber(&path).await;
    sleep(SETTLE).await;

    tx.send(()).unwrap();

    let pub_result = timeout(WAIT, pub_task).await.unwrap().unwrap();
    assert!(pub_result.is_ok());
    assert!(!path.exists());

    // Both subscriber loops exit cleanly on channel close, with no output
    timeout(WAIT, sub1_task).await.unwrap().unwrap().unwrap();
    timeout(WAIT, sub2_task).await.unwrap().unwrap().unwrap();

    let mut buf = Vec::new();
    out1.read_to_end(&mut buf).await.unwrap();
    assert!(buf.is_empty());
    out2.read_to_end(&mut buf).await.unwrap();
    assert!(buf.is_empty());
}

#[tokio::test]
async fn binary_data_passes_through_verbatim() {
    let path = temp_path("binary");
    let publisher = Publisher::bind(&path).unwrap();

    let (mut feed, input) = duplex(4096);
    let pub_task = tokio::spawn(publisher.run(input));

    let (sub_task, mut out) = spawn_subscriber(&path).await;
    sleep(SETTLE).await;

    let record: &[u8] = b"\x00\x01\xfe\xff raw bytes\n";
    feed.write_all(record).await.unwrap();
    drop(feed);

    timeout(WAIT, pub_task).await.unwrap().unwrap().unwrap();
    timeout(WAIT, sub_task).await.unwrap().unwrap().unwrap();

    let mut all = Vec::new();
    out.read_to_end(&mut all).await.unwrap();
    assert_eq!(all, record);
}
