//! Ядро генератора тестового тона
//!
//! Синтез комплексного тона блоками, масштабирование под выходной тип и
//! запись сырых выборок в поток.
//!
//! # Быстрый старт
//!
//! ```
//! use std::sync::atomic::AtomicBool;
//!
//! use tonegen_core::{StreamMetrics, ToneStream};
//! use tonegen_types::GenerationConfig;
//!
//! let config = GenerationConfig {
//!     data_type: "cs16".parse()?,
//!     max_blocks: Some(2),
//!     ..Default::default()
//! };
//!
//! let mut out = Vec::new();
//! let mut stream = ToneStream::new(&config)?;
//! stream.run(&mut out, &AtomicBool::new(false), &StreamMetrics::default())?;
//!
//! assert_eq!(out.len(), 2 * 512 * 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod decoder;
pub mod encoder;
pub mod generator;
pub mod metrics;
pub mod phase;
pub mod stream;

pub use decoder::*;
pub use encoder::*;
pub use generator::*;
pub use metrics::*;
pub use phase::*;
pub use stream::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
