//! Preconditions checked before install commands
//!
//! Both checks are collaborators of the orchestration core, not part of
//! it: main gates install commands on them the same way it would any
//! other precondition, and the core assumes they have passed.

use crate::error::{CapctlError, Result};

/// Fail unless the current process is elevated.
///
/// On the host OS `net session` succeeds only from an elevated shell.
/// Elsewhere there is nothing meaningful to check; the host tooling
/// itself will refuse unprivileged installs.
pub fn ensure_elevated() -> Result<()> {
    if !cfg!(windows) {
        return Ok(());
    }

    let elevated = std::process::Command::new("net")
        .arg("session")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    if elevated {
        Ok(())
    } else {
        Err(CapctlError::NotElevated)
    }
}

/// Fail unless the network is reachable.
///
/// Capability payloads are fetched on demand, so an unreachable network
/// turns every install into a confusing mechanism error; probing first
/// gives a direct diagnostic instead.
pub fn ensure_connectivity() -> Result<()> {
    ensure_connectivity_to("www.msftconnecttest.com:80")
}

fn ensure_connectivity_to(endpoint: &str) -> Result<()> {
    use std::net::{TcpStream, ToSocketAddrs};
    use std::time::Duration;

    let addrs: Vec<_> = endpoint
        .to_socket_addrs()
        .map_err(|_| CapctlError::NoConnectivity)?
        .collect();

    for addr in addrs {
        if TcpStream::connect_timeout(&addr, Duration::from_secs(3)).is_ok() {
            return Ok(());
        }
    }
    Err(CapctlError::NoConnectivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_endpoint_is_no_connectivity() {
        let err = ensure_connectivity_to("nonexistent.invalid:80").unwrap_err();
        assert!(matches!(err, CapctlError::NoConnectivity));
    }
}
