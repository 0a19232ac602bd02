//! Photo Grid Common Library
//!
//! 写真グリッドのカラム分割ロジック。CLIとレンダラーで共有する。

pub mod types;
pub mod layout;
pub mod error;
pub mod normalizer;
pub mod breakpoints;
pub mod balancer;
pub mod grid;

pub use types::{AspectClass, Column, ImageSize, Photo};
pub use layout::{padding_bottom_percent, MAX_SIZE};
pub use error::{Error, Result};
pub use normalizer::{classify, normalize, photo_height};
pub use breakpoints::{resolve_column_count, BreakpointTable, LayoutVariant};
pub use balancer::{balance, distribute, rebalance, BalanceOptions, BalanceReport, StopReason};
pub use grid::PhotoGrid;
