//! Пример: разбор потока tonegen со стандартного ввода
//!
//! Демонстрирует:
//! - чтение сырых выборок заданного типа
//! - снятие масштабирования через decode_normalized
//! - оценку частоты тона по приращению фазы
//!
//! ```text
//! tonegen 1000 48000 cs16 --blocks 4 -q | cargo run --example inspect_stream -- cs16 48000
//! ```

use std::{f64::consts::TAU, io::Read};

use tonegen_core::decode_normalized;
use tonegen_types::DataType;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let data_type: DataType = args.next().unwrap_or_else(|| "cf32".into()).parse()?;
    let sample_rate: f64 = args.next().unwrap_or_else(|| "48000".into()).parse()?;
    let peak_to_peak: f64 = args.next().unwrap_or_else(|| "2.0".into()).parse()?;

    let mut raw = Vec::new();
    std::io::stdin().lock().read_to_end(&mut raw)?;

    // Хвост неполного кадра отбрасываем
    let whole = raw.len() - raw.len() % data_type.frame_size();
    let values = decode_normalized(&raw[..whole], data_type, peak_to_peak)?;

    println!("✓ Decoded {} samples of {data_type}", values.len());

    println!("\nFirst samples:");
    for (n, v) in values.iter().take(4).enumerate() {
        println!("  [{n}] {:+.6} {:+.6}j  |c|={:.6}", v.re, v.im, v.norm());
    }

    if data_type.complex && values.len() > 1 {
        // Средний сдвиг фазы между соседними выборками
        let mean_step: f64 = values
            .windows(2)
            .map(|w| (w[1] * w[0].conj()).arg())
            .sum::<f64>()
            / (values.len() - 1) as f64;

        println!("\n  Estimated frequency: {:.3} Hz", mean_step / TAU * sample_rate);
    }

    Ok(())
}
