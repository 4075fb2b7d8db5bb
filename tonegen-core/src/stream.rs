use std::{
    io::Write,
    sync::atomic::{AtomicBool, Ordering},
};

use log::{debug, trace};
use tonegen_types::{GenerationConfig, SampleBlock, ToneResult};

use crate::{encoder::SampleEncoder, generator::ToneGenerator, metrics::StreamMetrics};

/// Драйвер вывода: тянет блоки из генератора, кодирует и пишет в поток.
///
/// После каждого блока выполняется `flush`. Ошибка записи (в том числе
/// закрытый pipe) фатальна и возвращается вызывающему без повторов.
#[derive(Debug)]
pub struct ToneStream {
    generator: ToneGenerator,
    encoder: SampleEncoder,
    max_blocks: Option<u64>,
    block: SampleBlock,
    buf: Vec<u8>,
}

impl ToneStream {
    pub fn new(config: &GenerationConfig) -> ToneResult<Self> {
        let generator = ToneGenerator::new(config)?;
        let encoder = SampleEncoder::from_config(config);

        Ok(Self {
            block: SampleBlock::new(0, Vec::with_capacity(config.block_size)),
            buf: Vec::with_capacity(config.block_bytes()),
            generator,
            encoder,
            max_blocks: config.max_blocks,
        })
    }

    pub fn generator(&self) -> &ToneGenerator {
        &self.generator
    }

    pub fn encoder(&self) -> &SampleEncoder {
        &self.encoder
    }

    /// Генерирует, кодирует и записывает один блок. Возвращает число байт.
    pub fn write_block<W: Write>(
        &mut self,
        out: &mut W,
    ) -> ToneResult<usize> {
        self.generator.fill_block(&mut self.block);
        self.encoder.encode_into(&self.block, &mut self.buf)?;

        out.write_all(&self.buf)?;
        out.flush()?;

        trace!(
            "Block @{}: {} samples, {} bytes",
            self.block.start_index,
            self.block.len(),
            self.buf.len()
        );

        Ok(self.buf.len())
    }

    /// Основной цикл. Блокируется до `stop_flag`, лимита блоков или ошибки.
    ///
    /// Возвращает число записанных блоков.
    pub fn run<W: Write>(
        &mut self,
        out: &mut W,
        stop_flag: &AtomicBool,
        metrics: &StreamMetrics,
    ) -> ToneResult<u64> {
        let mut written = 0u64;

        loop {
            if stop_flag.load(Ordering::Relaxed) {
                debug!("Stop requested after {written} blocks");
                break;
            }

            if self.max_blocks.is_some_and(|max| written >= max) {
                debug!("Block limit reached: {written}");
                break;
            }

            let bytes = self.write_block(out)?;

            metrics.record_block(self.block.len() as u64, bytes as u64);
            written += 1;
        }

        Ok(written)
    }
}
