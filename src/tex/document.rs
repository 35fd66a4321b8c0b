//! # LaTeX 文档写入器
//!
//! 每次写入都以追加模式打开输出文件（不存在则创建），写完即关闭。
//! 已有内容不会被截断。
//!
//! ## 依赖关系
//! - 被 `commands/render.rs` 调用
//! - 使用 `tex/sections.rs` 生成各节文本

use crate::error::{EinsteinTexError, Result};
use crate::relativity::{
    ChristoffelSymbols, EinsteinTensor, MetricTensor, RicciScalar, RicciTensor,
    RiemannCurvatureTensor,
};
use crate::tex::sections;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 追加写入的 .tex 文档
pub struct TexDocument {
    path: PathBuf,
}

impl TexDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加一段文本
    pub fn append(&self, text: &str) -> Result<()> {
        let write_error = |e: std::io::Error| EinsteinTexError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_error)?;
        file.write_all(text.as_bytes()).map_err(write_error)
    }

    pub fn write_preamble(&self, title: &str) -> Result<()> {
        self.append(&sections::preamble(title))
    }

    pub fn write_end(&self) -> Result<()> {
        self.append(&sections::end())
    }

    pub fn write_metric_tensor(&self, metric: &MetricTensor) -> Result<()> {
        self.append(&sections::metric_tensor(metric))
    }

    pub fn write_christoffel_symbols(&self, christoffel: &ChristoffelSymbols) -> Result<()> {
        self.append(&sections::christoffel_symbols(christoffel))
    }

    pub fn write_riemann_curvature_tensor(&self, riemann: &RiemannCurvatureTensor) -> Result<()> {
        self.append(&sections::riemann_curvature_tensor(riemann))
    }

    pub fn write_ricci_tensor(&self, ricci: &RicciTensor) -> Result<()> {
        self.append(&sections::ricci_tensor(ricci))
    }

    pub fn write_ricci_scalar(&self, scalar: &RicciScalar) -> Result<()> {
        self.append(&sections::ricci_scalar(scalar))
    }

    pub fn write_einstein_tensor(&self, einstein: &EinsteinTensor) -> Result<()> {
        self.append(&sections::einstein_tensor(einstein))
    }
}
