use clap::Parser;
use log::LevelFilter;
use tonegen_types::{
    DataType, GenerationConfig, ToneError, ToneResult, DEFAULT_BLOCK_SIZE, DEFAULT_PEAK_TO_PEAK,
};

/// Аргументы командной строки.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tonegen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a tone on stdout as raw binary samples",
    long_about = None,
    allow_negative_numbers = true,
)]
pub struct Cli {
    /// Частота тона, Гц
    pub freq: f64,
    /// Частота дискретизации, выборок/с
    pub rate: f64,
    /// Тип данных: [c]u8, [c]s8, [c]u16, [c]s16, [c]u32, [c]s32, [c]u64, [c]s64, [c]f32, [c]f64
    pub dtype: String,
    /// Размер блока (комплексных выборок за итерацию)
    #[arg(long = "bs", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,
    /// Размах (peak-to-peak) амплитуды
    #[arg(long = "pp", default_value_t = DEFAULT_PEAK_TO_PEAK)]
    pub peak_to_peak: f64,
    /// Остановиться после N блоков. По умолчанию: до Ctrl+C или закрытия pipe
    #[arg(long)]
    pub blocks: Option<u64>,
    /// Тихий режим (только ошибки)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Отладочный вывод
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Уровень логирования по флагам.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Строит и проверяет конфигурацию генерации.
    pub fn to_config(&self) -> ToneResult<GenerationConfig> {
        build_config(
            self.freq,
            self.rate,
            &self.dtype,
            self.block_size,
            self.peak_to_peak,
            self.blocks,
        )
    }
}

/// Собирает [`GenerationConfig`] из сырых значений и проверяет его.
pub fn build_config(
    frequency: f64,
    sample_rate: f64,
    dtype: &str,
    block_size: usize,
    peak_to_peak: f64,
    max_blocks: Option<u64>,
) -> ToneResult<GenerationConfig> {
    let data_type: DataType = dtype.parse()?;

    let config = GenerationConfig {
        frequency,
        sample_rate,
        data_type,
        block_size,
        peak_to_peak,
        max_blocks,
    };

    config.validate()?;

    Ok(config)
}

/// Разбирает аргументы, возвращая ошибку clap как [`ToneError::InvalidArgument`].
pub fn parse_args<I, T>(args: I) -> ToneResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| ToneError::invalid_argument(e.to_string()))
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
