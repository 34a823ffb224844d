// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::net::{SocketAddr, TcpListener};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn issuebox() -> assert_cmd::Command {
    cargo_bin_cmd!("issuebox-server")
}

/// Picks a free loopback port by binding to port 0 and releasing it.
pub fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// A running server process, killed on drop.
pub struct RunningServer {
    pub addr: SocketAddr,
    child: Child,
}

impl RunningServer {
    /// Spawns the server binary on a free port with extra arguments.
    pub fn spawn(extra_args: &[&str]) -> Self {
        let addr = free_addr();
        let child = Command::new(env!("CARGO_BIN_EXE_issuebox-server"))
            .arg("--bind")
            .arg(addr.to_string())
            .args(extra_args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();
        RunningServer { addr, child }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// Waits until the server accepts TCP connections.
    pub fn wait_ready(&self) {
        for _ in 0..100 {
            if std::net::TcpStream::connect(self.addr).is_ok() {
                return;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        panic!("server on {} never became ready", self.addr);
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
