//! Разбор выходного потока обратно в комплексные значения.
//!
//! Используется потребителем (анализатором) и тестами для проверки того,
//! что именно генератор записал в поток.

use std::io;

use byteorder::{NativeEndian, ReadBytesExt};
use num_complex::Complex;
use tonegen_types::{DataType, SampleKind, SampleType, ToneError, ToneResult};

use crate::encoder::full_scale;

type ReadFn = fn(&mut &[u8]) -> io::Result<f64>;

fn reader_for(sample: SampleType) -> ReadFn {
    match sample {
        SampleType::U8 => |r| r.read_u8().map(f64::from),
        SampleType::S8 => |r| r.read_i8().map(f64::from),
        SampleType::U16 => |r| r.read_u16::<NativeEndian>().map(f64::from),
        SampleType::S16 => |r| r.read_i16::<NativeEndian>().map(f64::from),
        SampleType::U32 => |r| r.read_u32::<NativeEndian>().map(f64::from),
        SampleType::S32 => |r| r.read_i32::<NativeEndian>().map(f64::from),
        SampleType::U64 => |r| r.read_u64::<NativeEndian>().map(|v| v as f64),
        SampleType::S64 => |r| r.read_i64::<NativeEndian>().map(|v| v as f64),
        SampleType::F32 => |r| r.read_f32::<NativeEndian>().map(f64::from),
        SampleType::F64 => |r| r.read_f64::<NativeEndian>(),
    }
}

/// Декодирует сырые байты в значения элементов (без обратного масштабирования).
///
/// Для действительного потока мнимая часть равна 0.
pub fn decode(
    bytes: &[u8],
    data_type: DataType,
) -> ToneResult<Vec<Complex<f64>>> {
    let frame = data_type.frame_size();

    if bytes.len() % frame != 0 {
        return Err(ToneError::TruncatedFrame {
            len: bytes.len(),
            frame,
        });
    }

    let read = reader_for(data_type.sample);
    let mut rdr = bytes;
    let mut values = Vec::with_capacity(bytes.len() / frame);

    while !rdr.is_empty() {
        let re = read(&mut rdr)?;
        let im = if data_type.complex {
            read(&mut rdr)?
        } else {
            0.0
        };

        values.push(Complex::new(re, im));
    }

    Ok(values)
}

/// Декодирует и снимает масштабирование, возвращая точки окружности радиуса 0.5.
///
/// Обратная операция к кодированию с тем же `peak_to_peak`; для
/// действительного потока мнимая часть не восстанавливается.
pub fn decode_normalized(
    bytes: &[u8],
    data_type: DataType,
    peak_to_peak: f64,
) -> ToneResult<Vec<Complex<f64>>> {
    let gain = peak_to_peak * full_scale(data_type.sample);
    let kind = data_type.sample.kind();
    let complex = data_type.complex;

    let values = decode(bytes, data_type)?
        .into_iter()
        .map(|v| {
            let c = match kind {
                SampleKind::Signed | SampleKind::Float => v / gain,
                SampleKind::Unsigned => {
                    Complex::new(v.re / gain * 2.0 - 0.5, v.im / gain * 2.0 - 0.5)
                }
            };

            if complex {
                c
            } else {
                Complex::new(c.re, 0.0)
            }
        })
        .collect();

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::SampleEncoder;
    use tonegen_types::SampleBlock;

    fn dt(s: &str) -> DataType {
        s.parse().unwrap()
    }

    #[test]
    fn test_decode_interleaved_s16() {
        let mut bytes = Vec::new();
        for v in [100i16, -200, 300, -400] {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }

        let values = decode(&bytes, dt("cs16")).unwrap();
        assert_eq!(
            values,
            vec![Complex::new(100.0, -200.0), Complex::new(300.0, -400.0)]
        );

        let values = decode(&bytes, dt("s16")).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[1], Complex::new(-200.0, 0.0));
    }

    #[test]
    fn test_decode_truncated_frame() {
        let err = decode(&[0u8; 6], dt("cf32")).unwrap_err();
        assert!(matches!(err, ToneError::TruncatedFrame { len: 6, frame: 8 }));

        assert!(decode(&[], dt("cf32")).unwrap().is_empty());
    }

    #[test]
    fn test_normalized_inverts_encoder() {
        let samples = vec![
            Complex::new(0.5, 0.0),
            Complex::new(0.0, -0.5),
            Complex::new(-0.3, 0.4),
        ];
        let b = SampleBlock::new(0, samples.clone());

        for t in SampleType::ALL {
            let data_type = DataType::new(true, t);
            let bytes = SampleEncoder::new(data_type, 2.0).encode(&b).unwrap();
            let back = decode_normalized(&bytes, data_type, 2.0).unwrap();

            // Шаг квантования (с учётом remap для беззнаковых)
            let tol = match t.kind() {
                SampleKind::Float => 1e-6,
                SampleKind::Signed => 1.0 / full_scale(t) + 1e-12,
                SampleKind::Unsigned => 2.0 / full_scale(t) + 1e-12,
            };

            for (a, e) in back.iter().zip(&samples) {
                assert!(
                    (a.re - e.re).abs() <= tol && (a.im - e.im).abs() <= tol,
                    "{t}: {a} vs {e}"
                );
            }
        }
    }
}
