use thiserror::Error;

/// Результат для операций tonegen
pub type ToneResult<T> = std::result::Result<T, ToneError>;

/// Типы ошибок генератора.
#[derive(Debug, Error)]
pub enum ToneError {
    /// Некорректный аргумент (тип данных, частота дискретизации, размер блока)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Длина буфера не кратна размеру кадра (одна выборка или IQ пара)
    #[error("Truncated frame: {len} bytes is not a multiple of {frame}-byte frame")]
    TruncatedFrame { len: usize, frame: usize },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToneError {
    /// Удобный конструктор
    pub fn invalid_argument<S: Into<String>>(s: S) -> Self {
        Self::InvalidArgument(s.into())
    }

    /// `true`, если ошибка вызвана закрытым потребителем (broken pipe).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
