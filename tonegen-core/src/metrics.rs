use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Instant,
};

/// Метрики потока, обновляемые lock-free.
#[derive(Debug, Default)]
pub struct StreamMetrics {
    pub blocks_written: AtomicU64,
    pub samples_written: AtomicU64,
    pub bytes_written: AtomicU64,
}

/// Snapshot метрик для отображения / тестирования.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub duration_secs: f64,
    pub blocks_written: u64,
    pub samples_written: u64,
    pub bytes_written: u64,
    pub throughput_msps: f64,
    pub write_speed_mbps: f64,
}

impl StreamMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Учитывает один записанный блок.
    pub fn record_block(
        &self,
        samples: u64,
        bytes: u64,
    ) {
        self.blocks_written.fetch_add(1, Ordering::Relaxed);
        self.samples_written.fetch_add(samples, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn throughput_msps(
        &self,
        elapsed: &Instant,
    ) -> f64 {
        let secs = elapsed.elapsed().as_secs_f64();

        if secs < 1e-9 {
            return 0.0;
        }

        self.samples_written.load(Ordering::Relaxed) as f64 / secs / 1_000_000.0
    }

    /// Скорость вывода в МБ/с.
    pub fn write_speed_mbps(
        &self,
        elapsed: &Instant,
    ) -> f64 {
        let secs = elapsed.elapsed().as_secs_f64();

        if secs < 1e-9 {
            return 0.0;
        }

        self.bytes_written.load(Ordering::Relaxed) as f64 / secs / 1_000_000.0
    }

    /// Итоговая сводка для вывода в конце сессии.
    pub fn summary(
        &self,
        elapsed: &Instant,
    ) -> MetricsSummary {
        MetricsSummary {
            duration_secs: elapsed.elapsed().as_secs_f64(),
            blocks_written: self.blocks_written.load(Ordering::Relaxed),
            samples_written: self.samples_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            throughput_msps: self.throughput_msps(elapsed),
            write_speed_mbps: self.write_speed_mbps(elapsed),
        }
    }
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "  Duration      : {:.1}s", self.duration_secs)?;
        writeln!(f, "  Blocks        : {}", self.blocks_written)?;
        writeln!(f, "  Samples       : {}", self.samples_written)?;
        writeln!(
            f,
            "  Bytes written : {:.1} MB",
            self.bytes_written as f64 / 1e6
        )?;
        writeln!(f, "  Throughput    : {:.3} Msps", self.throughput_msps)?;
        writeln!(f, "  Write speed   : {:.1} MB/s", self.write_speed_mbps)?;
        write!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")
    }
}
