use num_complex::Complex;

/// Блок комплексных выборок, сгенерированный за одну итерацию.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBlock {
    /// Глобальный индекс первой выборки блока
    pub start_index: u64,
    /// Выборки тона (модуль 0.5, действительная и мнимая части в [-0.5, 0.5])
    pub samples: Vec<Complex<f64>>,
}

impl SampleBlock {
    pub fn new(
        start_index: u64,
        samples: Vec<Complex<f64>>,
    ) -> Self {
        Self {
            start_index,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Индекс, с которого начнётся следующий блок.
    pub fn next_index(&self) -> u64 {
        self.start_index.wrapping_add(self.samples.len() as u64)
    }
}
