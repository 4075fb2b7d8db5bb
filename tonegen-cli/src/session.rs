use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};

use log::info;
use tonegen_core::{MetricsSummary, StreamMetrics, ToneStream};
use tonegen_types::{GenerationConfig, ToneResult};

/// Сессия генерации (single-threaded).
pub struct ToneSession {
    config: GenerationConfig,
    metrics: Arc<StreamMetrics>,
    stop_flag: Arc<AtomicBool>,
}

impl ToneSession {
    /// Создаёт сессию, проверяя конфигурацию.
    pub fn new(config: GenerationConfig) -> ToneResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            metrics: StreamMetrics::new(),
            stop_flag: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Флаг остановки. Устанавливается в `true` для graceful shutdown.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn metrics(&self) -> Arc<StreamMetrics> {
        self.metrics.clone()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Запускает генерацию. Блокирует до stop_flag, лимита блоков или ошибки записи.
    pub fn run<W: Write>(
        self,
        out: &mut W,
    ) -> ToneResult<MetricsSummary> {
        let session_start = Instant::now();
        let mut stream = ToneStream::new(&self.config)?;

        Self::print_config_info(&self.config);

        let result = stream.run(out, &self.stop_flag, &self.metrics);

        let summary = self.metrics.summary(&session_start);

        match result {
            Ok(blocks) => {
                info!(
                    "Stopped after {blocks} blocks (stop requested: {})",
                    self.stop_flag.load(Ordering::Relaxed)
                );
                Ok(summary)
            }
            Err(e) => {
                info!("\n{summary}");
                Err(e)
            }
        }
    }

    fn print_config_info(cfg: &GenerationConfig) {
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!("  Frequency     : {} Hz", cfg.frequency);
        info!("  Sample rate   : {:.3} ksps", cfg.sample_rate / 1e3);
        info!(
            "  Data type     : {} ({} B/sample)",
            cfg.data_type,
            cfg.data_type.frame_size()
        );
        info!("  Block size    : {}", cfg.block_size);
        info!("  Peak-to-peak  : {}", cfg.peak_to_peak);
        match cfg.max_blocks {
            Some(n) => info!("  Blocks        : {n}"),
            None => info!("  Blocks        : unlimited"),
        }
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
}
