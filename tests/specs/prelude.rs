//! Shared helpers for the spec suite.

use quill_core::{Project, ProjectId, ProjectStatus};
use std::io::{Read, Write};
use std::net::TcpListener;

pub fn project(id: i64, status: &str) -> Project {
    Project {
        id: ProjectId(id),
        title: format!("project-{}", id),
        status: ProjectStatus::new(status),
        active_stage: None,
        completed_stages: vec![],
        created_at: None,
    }
}

/// Spawn a stub HTTP server answering every request with `body` as JSON.
///
/// The listener thread lives for the rest of the test process; each spec
/// gets its own port. Returns the feed URL.
pub fn serve_json(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            // Drain the request head; the stub ignores its contents
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/projects", addr)
}
