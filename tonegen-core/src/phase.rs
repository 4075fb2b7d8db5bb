//! Часы фазы.
//!
//! Фаза каждой выборки вычисляется напрямую из её глобального индекса `n`,
//! без накопления: `frac(step * n)`, где `step` — частота в циклах на
//! выборку. Произведение `step * n` раскладывается на старшую и младшую
//! 32-битные половины индекса, а ошибка округления каждого произведения
//! восстанавливается через FMA. Итоговая погрешность — несколько ulp доли
//! цикла для любого `n: u64`, поэтому на границах блоков разрывов фазы нет.
//! Остаётся только неточность самого `step` в f64 (постоянный сдвиг частоты
//! порядка 1e-16 относительных), а не фазовый шум.

use std::f64::consts::TAU;

use num_complex::Complex;
use tonegen_types::GenerationConfig;

/// Амплитуда синтезируемой выборки: exp(jθ) / 2
pub const TONE_AMPLITUDE: f64 = 0.5;

/// 2^32, множитель старшей половины индекса
const HI_SCALE: f64 = 4_294_967_296.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseClock {
    /// Шаг фазы (циклов на выборку), приведённый к [-0.5, 0.5]
    step: f64,
}

impl PhaseClock {
    pub fn new(cycles_per_sample: f64) -> Self {
        // Целая часть шага не влияет на фазу при целых n
        let step = cycles_per_sample - cycles_per_sample.round();

        Self { step }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.cycles_per_sample())
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Доля периода в [0, 1) для выборки с индексом `n`.
    pub fn cycles_at(
        &self,
        n: u64,
    ) -> f64 {
        let hi = (n >> 32) as f64;
        let lo = (n & 0xFFFF_FFFF) as f64;

        let coarse = frac_product(self.step * HI_SCALE, hi);
        let fine = frac_product(self.step, lo);

        wrap_unit(coarse + fine)
    }

    /// Фаза в радианах [0, 2π) для выборки с индексом `n`.
    pub fn phase_at(
        &self,
        n: u64,
    ) -> f64 {
        TAU * self.cycles_at(n)
    }

    /// Выборка тона exp(2πj·f·n/fs) / 2.
    pub fn sample_at(
        &self,
        n: u64,
    ) -> Complex<f64> {
        Complex::from_polar(TONE_AMPLITUDE, self.phase_at(n))
    }
}

/// Дробная часть `a * b` с учётом ошибки округления произведения.
fn frac_product(
    a: f64,
    b: f64,
) -> f64 {
    let p = a * b;
    let err = a.mul_add(b, -p);

    wrap_unit((p - p.floor()) + err)
}

/// Приводит значение к [0, 1).
fn wrap_unit(x: f64) -> f64 {
    let f = x - x.floor();

    // x чуть меньше нуля даёт f == 1.0 после округления
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
