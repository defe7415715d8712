// Host statistics backed by sysinfo

use crate::error::{FetchError, Result};
use std::path::Path;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

/// Used and total byte counts of a memory pool or filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

/// Generic, cross-platform host information source.
pub trait HostSource {
    /// Human-readable OS name and version
    fn os_description(&self) -> Result<String>;

    fn kernel_version(&self) -> Result<String>;

    fn uptime_secs(&self) -> Result<u64>;

    /// Model name of the first CPU
    fn cpu_brand(&self) -> Result<String>;

    /// Number of logical CPUs
    fn cpu_count(&self) -> usize;

    fn memory(&self) -> Result<Usage>;

    /// Usage of the filesystem mounted exactly at `mount_point`
    fn disk_usage(&self, mount_point: &Path) -> Result<Usage>;
}

pub struct SysinfoHost {
    system: System,
}

impl SysinfoHost {
    pub fn new() -> Self {
        // CPU list (for brand/count) and RAM only; no usage sampling needed
        let refresh = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: System::new_with_specifics(refresh),
        }
    }
}

impl Default for SysinfoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSource for SysinfoHost {
    fn os_description(&self) -> Result<String> {
        System::long_os_version()
            .or_else(System::name)
            .ok_or_else(|| FetchError::unavailable("OS name not reported"))
    }

    fn kernel_version(&self) -> Result<String> {
        System::kernel_version().ok_or_else(|| FetchError::unavailable("kernel version not reported"))
    }

    fn uptime_secs(&self) -> Result<u64> {
        // sysinfo reports 0 when the uptime cannot be read
        match System::uptime() {
            0 => Err(FetchError::unavailable("uptime not reported")),
            secs => Ok(secs),
        }
    }

    fn cpu_brand(&self) -> Result<String> {
        self.system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .ok_or_else(|| FetchError::unavailable("no CPU brand reported"))
    }

    fn cpu_count(&self) -> usize {
        logical_cpus(self.system.cpus().len())
    }

    fn memory(&self) -> Result<Usage> {
        let total = self.system.total_memory();
        if total == 0 {
            return Err(FetchError::unavailable("total memory not reported"));
        }

        Ok(Usage {
            used_bytes: self.system.used_memory(),
            total_bytes: total,
        })
    }

    fn disk_usage(&self, mount_point: &Path) -> Result<Usage> {
        let disks = Disks::new_with_refreshed_list();

        let disk = disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == mount_point)
            .ok_or_else(|| {
                FetchError::unavailable(format!("no disk mounted at {}", mount_point.display()))
            })?;

        let total = disk.total_space();
        Ok(Usage {
            used_bytes: total.saturating_sub(disk.available_space()),
            total_bytes: total,
        })
    }
}

/// sysinfo's CPU count, or the scheduler's view when sysinfo lists none
pub fn logical_cpus(reported: usize) -> usize {
    if reported > 0 {
        return reported;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
