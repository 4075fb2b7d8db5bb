use crate::{SampleType, ToneError, ToneResult};

/// Формат выходного потока: тип элемента и признак комплексности.
///
/// Строковая форма: необязательный префикс `c` (комплексный поток,
/// чередование I/Q) и суффикс типа элемента, например `cs16` или `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// Комплексный поток (I, Q, I, Q, ...) или только действительная часть
    pub complex: bool,
    /// Тип одного элемента
    pub sample: SampleType,
}

impl DataType {
    pub fn new(
        complex: bool,
        sample: SampleType,
    ) -> Self {
        Self { complex, sample }
    }

    /// Кол-во элементов на одну выборку (2 для комплексного потока)
    pub fn values_per_sample(&self) -> usize {
        if self.complex {
            2
        } else {
            1
        }
    }

    /// Размер одного кадра (выборки) в байтах
    pub fn frame_size(&self) -> usize {
        self.values_per_sample() * self.sample.size()
    }
}

impl Default for DataType {
    fn default() -> Self {
        Self::new(true, SampleType::F32)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        if self.complex {
            write!(f, "c{}", self.sample)
        } else {
            write!(f, "{}", self.sample)
        }
    }
}

impl std::str::FromStr for DataType {
    type Err = ToneError;

    fn from_str(s: &str) -> ToneResult<Self> {
        let (complex, suffix) = match s.strip_prefix('c') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let sample = suffix
            .parse::<SampleType>()
            .map_err(|_| ToneError::invalid_argument(format!("bad datatype '{s}'")))?;

        Ok(Self { complex, sample })
    }
}
