use std::{
    f64::consts::PI,
    io::Read,
    sync::atomic::AtomicBool,
};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use tempfile::NamedTempFile;
use tonegen_core::{decode, decode_normalized, StreamMetrics, ToneGenerator, ToneStream};
use tonegen_types::{DataType, GenerationConfig, SampleType};

// ===========================================================================
// Helpers
// ===========================================================================

fn config(
    frequency: f64,
    data_type: &str,
    block_size: usize,
    max_blocks: u64,
) -> GenerationConfig {
    GenerationConfig {
        frequency,
        sample_rate: 48_000.0,
        data_type: data_type.parse().unwrap(),
        block_size,
        peak_to_peak: 2.0,
        max_blocks: Some(max_blocks),
    }
}

fn render(config: &GenerationConfig) -> Vec<u8> {
    let mut out = Vec::new();
    ToneStream::new(config)
        .unwrap()
        .run(&mut out, &AtomicBool::new(false), &StreamMetrics::default())
        .unwrap();
    out
}

// ===========================================================================
// Сценарии
// ===========================================================================

#[test]
fn test_complex_f32_roundtrip_matches_formula() {
    let cfg = config(1_000.0, "cf32", 4, 1);
    let bytes = render(&cfg);

    assert_eq!(bytes.len(), 4 * 2 * 4);

    let values = decode(&bytes, cfg.data_type).unwrap();

    for (n, v) in values.iter().enumerate() {
        let t = n as f64 / 48_000.0;
        let theta = 2.0 * PI * 1_000.0 * t;
        // exp(2πj·f·t) / 2 · pp
        let re = (theta.cos() / 2.0 * cfg.peak_to_peak) as f32;
        let im = (theta.sin() / 2.0 * cfg.peak_to_peak) as f32;

        assert!((v.re as f32 - re).abs() <= f32::EPSILON, "re[{n}]");
        assert!((v.im as f32 - im).abs() <= f32::EPSILON, "im[{n}]");
    }
}

#[test]
fn test_dc_tone_real_f32() {
    let cfg = config(0.0, "f32", 4, 3);
    let bytes = render(&cfg);

    // Действительный поток: только real части, pp/2 в каждой выборке
    assert_eq!(bytes.len(), 3 * 4 * 4);
    for v in decode(&bytes, cfg.data_type).unwrap() {
        assert_eq!(v.re, 1.0);
        assert_eq!(v.im, 0.0);
    }
}

#[test]
fn test_dc_tone_complex_f32_imag_zero() {
    let cfg = config(0.0, "cf32", 4, 3);

    for v in decode(&render(&cfg), cfg.data_type).unwrap() {
        assert_eq!(v.re, cfg.peak_to_peak / 2.0);
        assert_eq!(v.im, 0.0);
    }
}

#[test]
fn test_random_block_sizes_produce_identical_stream() {
    let mut rng = SmallRng::seed_from_u64(0x746f_6e65);

    for _ in 0..20 {
        let freq: f64 = rng.gen_range(-24_000.0..24_000.0);
        let bs_a: usize = rng.gen_range(1..64);
        let bs_b: usize = rng.gen_range(1..64);
        let total = bs_a * bs_b;

        let a = render(&config(freq, "cf64", bs_a, bs_b as u64));
        let b = render(&config(freq, "cf64", bs_b, bs_a as u64));

        assert_eq!(a.len(), total * 16);
        assert_eq!(a, b, "freq={freq} bs={bs_a}/{bs_b}");
    }
}

#[test]
fn test_continuity_at_large_index() {
    // Генерация с огромного индекса совпадает с выборками по прямой формуле
    // 1000 Гц при 64 кГц: шаг 1/64 цикла представим в f64 точно
    let cfg = GenerationConfig {
        sample_rate: 64_000.0,
        ..config(1_000.0, "cf64", 16, 1)
    };
    let start = (1u64 << 45) + 3;
    let mut generator = ToneGenerator::starting_at(&cfg, start).unwrap();
    let block = generator.next_block();

    for (i, s) in block.samples.iter().enumerate() {
        // Период тона 64 выборки
        let n = (start + i as u64) % 64;
        let theta = 2.0 * PI * n as f64 / 64.0;

        assert!((s.re - theta.cos() / 2.0).abs() < 1e-12);
        assert!((s.im - theta.sin() / 2.0).abs() < 1e-12);
    }
}

#[test]
fn test_all_types_normalized_tone() {
    for sample in SampleType::ALL {
        let data_type = DataType::new(true, sample);
        let cfg = GenerationConfig {
            data_type,
            ..config(3_000.0, "cf32", 32, 2)
        };

        let bytes = render(&cfg);
        let values = decode_normalized(&bytes, data_type, cfg.peak_to_peak).unwrap();
        let generator = ToneGenerator::new(&cfg).unwrap();

        assert_eq!(values.len(), 64);
        for (n, v) in values.iter().enumerate() {
            let e = generator.sample_at(n as u64);
            // Худший случай — 8 бит: шаг квантования ~1/127
            assert!(
                (v.re - e.re).abs() < 0.01 && (v.im - e.im).abs() < 0.01,
                "{data_type} n={n}: {v} vs {e}"
            );
        }
    }
}

#[test]
fn test_stream_to_file_sink() {
    let mut tmp = NamedTempFile::new().unwrap();
    let cfg = config(440.0, "cs16", 512, 4);

    let metrics = StreamMetrics::default();
    let mut stream = ToneStream::new(&cfg).unwrap();
    let blocks = stream
        .run(tmp.as_file_mut(), &AtomicBool::new(false), &metrics)
        .unwrap();

    assert_eq!(blocks, 4);

    let mut raw = Vec::new();
    std::fs::File::open(tmp.path())
        .unwrap()
        .read_to_end(&mut raw)
        .unwrap();

    assert_eq!(raw.len(), 4 * cfg.block_bytes());
    assert_eq!(raw, render(&cfg));
}
