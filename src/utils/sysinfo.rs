//! Host information shown under the comparison tables.
//!
//! Implemented with `libc` on Linux and macOS; other platforms fall back
//! to the target architecture name and report the rest as unknown.

// ============================================================================
// Linux implementation
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    /// `model name` entry of /proc/cpuinfo
    pub fn processor_name() -> Option<String> {
        let cpuinfo = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        cpuinfo.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            (key.trim() == "model name").then(|| value.trim().to_string())
        })
    }

    pub use super::unix::{logical_cores, total_memory};
}

// ============================================================================
// macOS implementation
// ============================================================================

#[cfg(target_os = "macos")]
mod platform {
    use std::ptr;

    pub fn processor_name() -> Option<String> {
        let name = c"machdep.cpu.brand_string";
        unsafe {
            let mut len: libc::size_t = 0;
            if libc::sysctlbyname(name.as_ptr(), ptr::null_mut(), &mut len, ptr::null_mut(), 0)
                != 0
                || len == 0
            {
                return None;
            }

            let mut buf = vec![0u8; len];
            if libc::sysctlbyname(
                name.as_ptr(),
                buf.as_mut_ptr().cast(),
                &mut len,
                ptr::null_mut(),
                0,
            ) != 0
            {
                return None;
            }
            buf.truncate(len);

            let brand = String::from_utf8_lossy(&buf);
            Some(brand.trim_end_matches('\0').trim().to_string())
        }
    }

    pub use super::unix::{logical_cores, total_memory};
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
mod unix {
    /// Physical memory in bytes
    pub fn total_memory() -> Option<u64> {
        unsafe {
            let pages = libc::sysconf(libc::_SC_PHYS_PAGES);
            let page_size = libc::sysconf(libc::_SC_PAGESIZE);
            if pages <= 0 || page_size <= 0 {
                return None;
            }
            Some(pages as u64 * page_size as u64)
        }
    }

    pub fn logical_cores() -> Option<usize> {
        unsafe {
            let n = libc::sysconf(libc::_SC_NPROCESSORS_ONLN);
            if n <= 0 {
                None
            } else {
                Some(n as usize)
            }
        }
    }
}

// ============================================================================
// Fallback
// ============================================================================

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod platform {
    pub fn processor_name() -> Option<String> {
        None
    }

    pub fn total_memory() -> Option<u64> {
        None
    }

    pub fn logical_cores() -> Option<usize> {
        None
    }
}

const GIB: f64 = (1u64 << 30) as f64;

/// Snapshot of the host the benchmark ran on
#[derive(Clone, Debug, PartialEq)]
pub struct SystemInfo {
    pub processor: String,
    pub total_memory: Option<u64>,
    pub logical_cores: Option<usize>,
}

impl SystemInfo {
    pub fn collect() -> Self {
        Self {
            processor: platform::processor_name()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| std::env::consts::ARCH.to_string()),
            total_memory: platform::total_memory(),
            logical_cores: platform::logical_cores(),
        }
    }

    /// Total memory in gibibytes
    pub fn memory_gib(&self) -> Option<f64> {
        self.total_memory.map(|bytes| bytes as f64 / GIB)
    }
}
