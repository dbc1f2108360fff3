//! Real process table backed by sysinfo and signal delivery via nix

use async_trait::async_trait;
use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::collections::VecDeque;
use sysinfo::System;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::traits::ProcessTable;
use crate::types::ProcessId;

/// Live OS process table.
pub struct SystemProcessTable {
    system: Mutex<System>,
}

impl SystemProcessTable {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for SystemProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Breadth-first walk over parent links, siblings ordered by pid so the
/// discovery order is stable across snapshots.
fn collect_descendants(system: &System, root: ProcessId) -> Vec<ProcessId> {
    let mut queue = VecDeque::from([sysinfo::Pid::from_u32(root.as_u32())]);
    let mut found = Vec::new();

    while let Some(current) = queue.pop_front() {
        let mut children: Vec<sysinfo::Pid> = system
            .processes()
            .iter()
            .filter(|(_, process)| process.parent() == Some(current))
            .map(|(pid, _)| *pid)
            .collect();
        children.sort_unstable_by_key(|pid| pid.as_u32());

        for child in children {
            found.push(ProcessId::new(child.as_u32()));
            queue.push_back(child);
        }
    }

    found
}

#[async_trait]
impl ProcessTable for SystemProcessTable {
    async fn descendants(&self, root: ProcessId) -> Vec<ProcessId> {
        let mut system = self.system.lock().await;
        system.refresh_processes();
        collect_descendants(&system, root)
    }

    async fn kill_tree(&self, pid: ProcessId, signal: Signal) {
        // Fresh snapshot: a zombie may itself have spawned children since
        // it was discovered.
        let mut targets = vec![pid];
        {
            let mut system = self.system.lock().await;
            system.refresh_processes();
            targets.extend(collect_descendants(&system, pid));
        }

        for target in targets {
            match signal::kill(Pid::from_raw(target.as_raw()), signal) {
                Ok(()) => debug!(%target, ?signal, "signal delivered"),
                Err(Errno::ESRCH) => debug!(%target, "process already gone"),
                Err(err) => warn!(%target, "failed to signal process: {err}"),
            }
        }
    }
}
