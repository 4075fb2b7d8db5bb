use crate::{DataType, ToneError, ToneResult};

/// Размер блока по умолчанию (комплексных выборок за итерацию)
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Размах сигнала по умолчанию
pub const DEFAULT_PEAK_TO_PEAK: f64 = 2.0;

/// Полная конфигурация генерации. Создаётся один раз при старте.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Частота тона (Гц), может быть отрицательной
    pub frequency: f64,
    /// Частота дискретизации (выборок/с)
    pub sample_rate: f64,
    /// Формат выходного потока
    pub data_type: DataType,
    /// Кол-во комплексных выборок в блоке
    pub block_size: usize,
    /// Множитель амплитуды перед кодированием
    pub peak_to_peak: f64,
    /// Ограничение по числу блоков (None = бесконечно)
    pub max_blocks: Option<u64>,
}

impl GenerationConfig {
    /// Проверяет конфигурацию перед запуском генератора.
    pub fn validate(&self) -> ToneResult<()> {
        if !self.frequency.is_finite() {
            return Err(ToneError::invalid_argument(format!(
                "frequency must be finite, got {}",
                self.frequency
            )));
        }

        if !self.sample_rate.is_finite() || self.sample_rate == 0.0 {
            return Err(ToneError::invalid_argument(format!(
                "sample rate must be finite and non-zero, got {}",
                self.sample_rate
            )));
        }

        if self.block_size == 0 {
            return Err(ToneError::invalid_argument("block size must be >= 1"));
        }

        if !self.peak_to_peak.is_finite() {
            return Err(ToneError::invalid_argument(format!(
                "peak-to-peak must be finite, got {}",
                self.peak_to_peak
            )));
        }

        Ok(())
    }

    /// Шаг фазы в циклах на выборку.
    pub fn cycles_per_sample(&self) -> f64 {
        self.frequency / self.sample_rate
    }

    /// Размер одного закодированного блока в байтах.
    pub fn block_bytes(&self) -> usize {
        self.block_size * self.data_type.frame_size()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000.0,
            sample_rate: 48_000.0,
            data_type: DataType::default(),
            block_size: DEFAULT_BLOCK_SIZE,
            peak_to_peak: DEFAULT_PEAK_TO_PEAK,
            max_blocks: None,
        }
    }
}
