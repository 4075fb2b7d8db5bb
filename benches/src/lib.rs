//! Общие помощники для бенчмарков.

use tonegen_types::GenerationConfig;

/// Конфигурация 1 кГц / 48 кГц без лимита блоков.
pub fn bench_config(
    data_type: &str,
    block_size: usize,
) -> GenerationConfig {
    GenerationConfig {
        frequency: 1_000.0,
        sample_rate: 48_000.0,
        data_type: data_type.parse().expect("valid data type"),
        block_size,
        peak_to_peak: 2.0,
        max_blocks: None,
    }
}
