//! Масштабирование и кодирование выборок в выходной формат.
//!
//! Правило масштабирования зависит от семейства типа:
//! - знаковые целые: `part * pp * T::MAX`;
//! - беззнаковые целые: `(part + 0.5) / 2 * pp * T::MAX` (обе части в [0, 0.5]);
//! - вещественные: `part * pp`.
//!
//! Приведение к целому — стандартное `as` (отсечение к нулю, насыщение вне
//! диапазона, NaN -> 0). Порядок байт — нативный для платформы.

use std::io;

use byteorder::{NativeEndian, WriteBytesExt};
use num_complex::Complex;
use tonegen_types::{DataType, GenerationConfig, SampleBlock, SampleKind, SampleType, ToneResult};

/// Элемент выходного потока.
trait Sample: Copy {
    /// Полная шкала для целых типов (T::MAX), 1.0 для вещественных
    const FULL_SCALE: f64;

    fn from_scaled(v: f64) -> Self;

    fn write_to(
        self,
        out: &mut Vec<u8>,
    ) -> io::Result<()>;
}

impl Sample for u8 {
    const FULL_SCALE: f64 = u8::MAX as f64;

    fn from_scaled(v: f64) -> Self {
        v as u8
    }

    fn write_to(
        self,
        out: &mut Vec<u8>,
    ) -> io::Result<()> {
        out.write_u8(self)
    }
}

impl Sample for i8 {
    const FULL_SCALE: f64 = i8::MAX as f64;

    fn from_scaled(v: f64) -> Self {
        v as i8
    }

    fn write_to(
        self,
        out: &mut Vec<u8>,
    ) -> io::Result<()> {
        out.write_i8(self)
    }
}

macro_rules! impl_sample {
    ($t:ty, $full:expr, $write:ident) => {
        impl Sample for $t {
            const FULL_SCALE: f64 = $full;

            fn from_scaled(v: f64) -> Self {
                v as $t
            }

            fn write_to(
                self,
                out: &mut Vec<u8>,
            ) -> io::Result<()> {
                out.$write::<NativeEndian>(self)
            }
        }
    };
}

impl_sample!(u16, u16::MAX as f64, write_u16);
impl_sample!(i16, i16::MAX as f64, write_i16);
impl_sample!(u32, u32::MAX as f64, write_u32);
impl_sample!(i32, i32::MAX as f64, write_i32);
impl_sample!(u64, u64::MAX as f64, write_u64);
impl_sample!(i64, i64::MAX as f64, write_i64);
impl_sample!(f32, 1.0, write_f32);
impl_sample!(f64, 1.0, write_f64);

type ScaleFn = fn(Complex<f64>, f64) -> Complex<f64>;

type EncodeFn = fn(&[Complex<f64>], ScaleFn, f64, bool, &mut Vec<u8>) -> io::Result<()>;

/// Значения до приведения к целевому типу: `full_scale` — T::MAX для целых.
pub fn scale_sample(
    kind: SampleKind,
    c: Complex<f64>,
    peak_to_peak: f64,
    full_scale: f64,
) -> Complex<f64> {
    match kind {
        SampleKind::Signed => scale_signed(c, peak_to_peak * full_scale),
        SampleKind::Unsigned => scale_unsigned(c, peak_to_peak * full_scale),
        SampleKind::Float => scale_float(c, peak_to_peak),
    }
}

/// Полная шкала типа (T::MAX для целых, 1.0 для вещественных).
pub fn full_scale(sample: SampleType) -> f64 {
    match sample {
        SampleType::U8 => u8::FULL_SCALE,
        SampleType::S8 => i8::FULL_SCALE,
        SampleType::U16 => u16::FULL_SCALE,
        SampleType::S16 => i16::FULL_SCALE,
        SampleType::U32 => u32::FULL_SCALE,
        SampleType::S32 => i32::FULL_SCALE,
        SampleType::U64 => u64::FULL_SCALE,
        SampleType::S64 => i64::FULL_SCALE,
        SampleType::F32 => f32::FULL_SCALE,
        SampleType::F64 => f64::FULL_SCALE,
    }
}

fn scale_signed(
    c: Complex<f64>,
    gain: f64,
) -> Complex<f64> {
    c * gain
}

fn scale_unsigned(
    c: Complex<f64>,
    gain: f64,
) -> Complex<f64> {
    // [-0.5, 0.5] -> [0, 0.5] для обеих частей
    Complex::new((c.re + 0.5) / 2.0, (c.im + 0.5) / 2.0) * gain
}

fn scale_float(
    c: Complex<f64>,
    gain: f64,
) -> Complex<f64> {
    c * gain
}

fn encode_as<T: Sample>(
    samples: &[Complex<f64>],
    scale: ScaleFn,
    gain: f64,
    complex: bool,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    for c in samples {
        let v = scale(*c, gain);

        T::from_scaled(v.re).write_to(out)?;
        if complex {
            T::from_scaled(v.im).write_to(out)?;
        }
    }

    Ok(())
}

/// Кодировщик блоков. Функция кодирования выбирается один раз при создании.
#[derive(Clone, Copy)]
pub struct SampleEncoder {
    data_type: DataType,
    peak_to_peak: f64,
    gain: f64,
    scale: ScaleFn,
    encode: EncodeFn,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SampleEncoder {
    pub fn new(
        data_type: DataType,
        peak_to_peak: f64,
    ) -> Self {
        let scale: ScaleFn = match data_type.sample.kind() {
            SampleKind::Signed => scale_signed,
            SampleKind::Unsigned => scale_unsigned,
            SampleKind::Float => scale_float,
        };

        let encode: EncodeFn = match data_type.sample {
            SampleType::U8 => encode_as::<u8>,
            SampleType::S8 => encode_as::<i8>,
            SampleType::U16 => encode_as::<u16>,
            SampleType::S16 => encode_as::<i16>,
            SampleType::U32 => encode_as::<u32>,
            SampleType::S32 => encode_as::<i32>,
            SampleType::U64 => encode_as::<u64>,
            SampleType::S64 => encode_as::<i64>,
            SampleType::F32 => encode_as::<f32>,
            SampleType::F64 => encode_as::<f64>,
        };

        Self {
            data_type,
            peak_to_peak,
            gain: peak_to_peak * full_scale(data_type.sample),
            scale,
            encode,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.data_type, config.peak_to_peak)
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn peak_to_peak(&self) -> f64 {
        self.peak_to_peak
    }

    /// Размер закодированного блока из `samples` выборок.
    pub fn encoded_len(
        &self,
        samples: usize,
    ) -> usize {
        samples * self.data_type.frame_size()
    }

    /// Кодирует блок в `out` (буфер очищается и переиспользуется).
    pub fn encode_into(
        &self,
        block: &SampleBlock,
        out: &mut Vec<u8>,
    ) -> ToneResult<()> {
        out.clear();
        out.reserve(self.encoded_len(block.len()));

        (self.encode)(
            &block.samples,
            self.scale,
            self.gain,
            self.data_type.complex,
            out,
        )?;

        Ok(())
    }

    /// Кодирует блок в новый буфер.
    pub fn encode(
        &self,
        block: &SampleBlock,
    ) -> ToneResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len(block.len()));
        self.encode_into(block, &mut out)?;

        Ok(out)
    }
}

impl std::fmt::Debug for SampleEncoder {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SampleEncoder")
            .field("data_type", &self.data_type)
            .field("peak_to_peak", &self.peak_to_peak)
            .field("gain", &self.gain)
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
