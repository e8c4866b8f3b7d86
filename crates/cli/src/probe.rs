// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Database reachability probe.
//!
//! The real-database suite needs MongoDB listening before pytest is
//! worth starting. A TCP connect with a short timeout is the gate;
//! no driver-level handshake is attempted.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};

use crate::config::DatabaseConfig;

/// Probe the configured database endpoint.
pub fn probe_database(db: &DatabaseConfig) -> io::Result<()> {
    let timeout = db.connect_timeout();
    let addrs = (db.host.as_str(), db.port).to_socket_addrs()?;

    let mut last_err = io::Error::new(
        io::ErrorKind::AddrNotAvailable,
        format!("no addresses resolved for {}", db.addr()),
    );

    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(_) => return Ok(()),
            Err(err) => last_err = err,
        }
    }

    Err(last_err)
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
