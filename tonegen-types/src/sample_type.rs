use crate::{ToneError, ToneResult};

/// Тип элемента выходного потока
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleType {
    /// Беззнаковое 8-битное
    U8,
    /// Знаковое 8-битное
    S8,
    /// Беззнаковое 16-битное
    U16,
    /// Знаковое 16-битное
    S16,
    /// Беззнаковое 32-битное
    U32,
    /// Знаковое 32-битное
    S32,
    /// Беззнаковое 64-битное
    U64,
    /// Знаковое 64-битное
    S64,
    /// 32-битное с плавающей точкой
    F32,
    /// 64-битное с плавающей точкой
    F64,
}

/// Семейство типа: определяет правило масштабирования.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Signed,
    Unsigned,
    Float,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SampleType {
    /// Все поддерживаемые типы в порядке перечисления.
    pub const ALL: [SampleType; 10] = [
        SampleType::U8,
        SampleType::S8,
        SampleType::U16,
        SampleType::S16,
        SampleType::U32,
        SampleType::S32,
        SampleType::U64,
        SampleType::S64,
        SampleType::F32,
        SampleType::F64,
    ];

    /// Размер одного элемента в байтах
    pub fn size(&self) -> usize {
        match self {
            SampleType::U8 | SampleType::S8 => 1,
            SampleType::U16 | SampleType::S16 => 2,
            SampleType::U32 | SampleType::S32 | SampleType::F32 => 4,
            SampleType::U64 | SampleType::S64 | SampleType::F64 => 8,
        }
    }

    pub fn kind(&self) -> SampleKind {
        match self {
            SampleType::S8 | SampleType::S16 | SampleType::S32 | SampleType::S64 => {
                SampleKind::Signed
            }
            SampleType::U8 | SampleType::U16 | SampleType::U32 | SampleType::U64 => {
                SampleKind::Unsigned
            }
            SampleType::F32 | SampleType::F64 => SampleKind::Float,
        }
    }

    /// Имя суффикса, как оно задаётся в командной строке.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::U8 => "u8",
            SampleType::S8 => "s8",
            SampleType::U16 => "u16",
            SampleType::S16 => "s16",
            SampleType::U32 => "u32",
            SampleType::S32 => "s32",
            SampleType::U64 => "u64",
            SampleType::S64 => "s64",
            SampleType::F32 => "f32",
            SampleType::F64 => "f64",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для SampleType
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for SampleType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SampleType {
    type Err = ToneError;

    fn from_str(s: &str) -> ToneResult<Self> {
        SampleType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ToneError::invalid_argument(format!(
                    "Unknown sample type '{s}'. Use: u8, s8, u16, s16, u32, s32, u64, s64, f32, f64"
                ))
            })
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
