use log::debug;
use num_complex::Complex;
use tonegen_types::{GenerationConfig, SampleBlock, ToneResult};

use crate::phase::PhaseClock;

/// Бесконечный генератор блоков комплексного тона.
///
/// Глобальный курсор `index` растёт на `block_size` каждую итерацию и
/// никогда не сбрасывается; выборка `n` зависит только от `n`.
#[derive(Debug, Clone)]
pub struct ToneGenerator {
    clock: PhaseClock,
    block_size: usize,
    index: u64,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl ToneGenerator {
    /// Создаёт генератор, проверяя конфигурацию.
    pub fn new(config: &GenerationConfig) -> ToneResult<Self> {
        Self::starting_at(config, 0)
    }

    /// Генератор, начинающий с произвольного глобального индекса.
    pub fn starting_at(
        config: &GenerationConfig,
        index: u64,
    ) -> ToneResult<Self> {
        config.validate()?;

        let clock = PhaseClock::from_config(config);

        debug!(
            "Tone generator: {} cycles/sample, block={}, start index={}",
            clock.step(),
            config.block_size,
            index
        );

        Ok(Self {
            clock,
            block_size: config.block_size,
            index,
        })
    }

    /// Текущее значение курсора (индекс первой выборки следующего блока).
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn clock(&self) -> &PhaseClock {
        &self.clock
    }

    /// Заполняет `block` следующей порцией выборок, переиспользуя его буфер.
    pub fn fill_block(
        &mut self,
        block: &mut SampleBlock,
    ) {
        let start = self.index;

        block.start_index = start;
        block.samples.clear();
        block.samples.extend(
            (0..self.block_size as u64).map(|i| self.clock.sample_at(start.wrapping_add(i))),
        );

        self.index = start.wrapping_add(self.block_size as u64);
    }

    /// Генерирует следующий блок.
    pub fn next_block(&mut self) -> SampleBlock {
        let mut block = SampleBlock::new(0, Vec::with_capacity(self.block_size));
        self.fill_block(&mut block);

        block
    }

    /// Выборка с произвольным глобальным индексом (без сдвига курсора).
    pub fn sample_at(
        &self,
        n: u64,
    ) -> Complex<f64> {
        self.clock.sample_at(n)
    }
}

impl Iterator for ToneGenerator {
    type Item = SampleBlock;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_block())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
