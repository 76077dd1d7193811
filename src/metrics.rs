//! Size and resource measurements used by the benchmark harness.

use serde::Serialize;
use sysinfo::{CpuExt, System, SystemExt};

/// Percentage by which `transformed_size` is smaller than `original_size`.
///
/// Negative values mean the transformed form grew. An empty original yields
/// positive infinity rather than an error.
pub fn size_reduction(original_size: u64, transformed_size: u64) -> f64 {
    if original_size == 0 {
        return f64::INFINITY;
    }
    (original_size as f64 - transformed_size as f64) / original_size as f64 * 100.0
}

/// Host-wide CPU and memory utilisation, both in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResourceUsage {
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

impl ResourceUsage {
    /// Change from `before` to `self`.
    pub fn delta(&self, before: &ResourceUsage) -> ResourceUsage {
        ResourceUsage {
            cpu_percent: self.cpu_percent - before.cpu_percent,
            memory_percent: self.memory_percent - before.memory_percent,
        }
    }
}

/// Keeps one `System` alive so consecutive CPU readings are meaningful.
pub struct ResourceMonitor {
    sys: System,
}

impl ResourceMonitor {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu();
        sys.refresh_memory();
        Self { sys }
    }

    pub fn sample(&mut self) -> ResourceUsage {
        self.sys.refresh_cpu();
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        let memory_percent = if total > 0 {
            (self.sys.used_memory() as f64 / total as f64 * 100.0) as f32
        } else {
            0.0
        };

        ResourceUsage {
            cpu_percent: self.sys.global_cpu_info().cpu_usage(),
            memory_percent,
        }
    }
}

impl Default for ResourceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
