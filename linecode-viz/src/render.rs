// Copyright (c) 2022, The Linecode-Rust Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use anyhow::{ensure, Result};
use bitseq::BitSequence;
use linecode::{Scheme, Waveform};
use rasciigraph as rag;

const AXIS_CHARS: [char; 2] = ['┤', '┼'];

/// Every chart is framed from this level...
const FRAME_MIN: f64 = -1.0;

/// ...up to this one, whatever levels the waveform actually visits.
const FRAME_MAX: f64 = 1.0;

pub const MAX_COLUMNS_PER_BIT: usize = 64;
pub const MAX_ROWS_PER_LEVEL: u32 = 16;

/// Options for drawing waveforms in the terminal.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Horizontal characters per bit interval. Even, so the mid-bit
    /// transition of the biphase codes lands on a column boundary.
    pub columns_per_bit: usize,

    /// Vertical rows per unit of level.
    pub rows_per_level: u32,

    /// Left margin handed to the graph.
    pub offset: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            columns_per_bit: 8,
            rows_per_level: 2,
            offset: 3,
        }
    }
}

impl RenderConfig {
    pub fn with_columns_per_bit(mut self, columns_per_bit: usize) -> Self {
        self.columns_per_bit = columns_per_bit;
        self
    }

    pub fn with_rows_per_level(mut self, rows_per_level: u32) -> Self {
        self.rows_per_level = rows_per_level;
        self
    }

    /// Rejects resolutions that can't be drawn.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.columns_per_bit >= 2
                && self.columns_per_bit <= MAX_COLUMNS_PER_BIT
                && self.columns_per_bit % 2 == 0,
            "--columns-per-bit must be an even number from 2 to {}, got {}",
            MAX_COLUMNS_PER_BIT,
            self.columns_per_bit
        );
        ensure!(
            self.rows_per_level >= 1 && self.rows_per_level <= MAX_ROWS_PER_LEVEL,
            "--rows-per-level must be from 1 to {}, got {}",
            MAX_ROWS_PER_LEVEL,
            self.rows_per_level
        );
        Ok(())
    }
}

/// Samples the waveform at the middle of every column.
pub fn sample_series(waveform: &Waveform, columns_per_bit: usize) -> Vec<f64> {
    let step = 1.0 / columns_per_bit as f64;
    (0..waveform.bit_count() * columns_per_bit)
        .filter_map(|col| waveform.level_at((col as f64 + 0.5) * step))
        .map(|level| level.as_f64())
        .collect()
}

/// A row with each bit centred over its interval, data starting at `data_col`.
pub fn label_row(bits: &BitSequence, data_col: usize, columns_per_bit: usize) -> String {
    let mut row = vec![' '; data_col + bits.len() * columns_per_bit];
    for (i, bit) in bits.iter().enumerate() {
        row[data_col + i * columns_per_bit + columns_per_bit / 2] = bit.to_char();
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Tick label and axis only, with the axis at `axis_col`.
fn reference_row(level: f64, axis_col: usize) -> String {
    format!("{:>width$.2} ┤", level, width = axis_col.saturating_sub(1))
}

/// A waveform that never changes level, drawn with the same tick label
/// width the graph uses for this offset.
fn flat_row(level: f64, columns: usize, offset: u32) -> String {
    format!(
        "{:>width$.2} ┼{}",
        level,
        "─".repeat(columns),
        width = offset as usize + 3
    )
}

/// Adds reference rows above and below `graph` so it spans the full frame.
fn pad_to_frame(graph: &str, min: f64, max: f64, rows_per_level: u32, axis_col: usize) -> Vec<String> {
    let rows = rows_per_level as f64;
    let above = ((FRAME_MAX - max) * rows).round() as u32;
    let below = ((min - FRAME_MIN) * rows).round() as u32;

    let mut lines = (1..=above)
        .rev()
        .map(|k| reference_row(max + k as f64 / rows, axis_col))
        .collect::<Vec<_>>();
    lines.extend(graph.trim_end().lines().map(str::to_string));
    lines.extend((1..=below).map(|k| reference_row(min - k as f64 / rows, axis_col)));
    lines
}

/// Renders one scheme's waveform: title, bit labels, then the step plot.
pub fn render(scheme: Scheme, bits: &BitSequence, waveform: &Waveform, config: &RenderConfig) -> String {
    let mut out = format!("{}\n", scheme);

    if waveform.is_empty() {
        out.push_str("  (no bits)\n");
        return out;
    }

    let series = sample_series(waveform, config.columns_per_bit);
    let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let graph = if max > min {
        let height = config.rows_per_level * (max - min) as u32;
        rag::plot(
            series,
            rag::Config::default()
                .with_offset(config.offset)
                .with_height(height),
        )
    } else {
        flat_row(max, bits.len() * config.columns_per_bit, config.offset)
    };

    let axis_col = graph
        .lines()
        .find_map(|line| line.chars().position(|c| AXIS_CHARS.contains(&c)))
        .unwrap_or(config.offset as usize + 4);

    out.push_str(&label_row(bits, axis_col + 1, config.columns_per_bit));
    out.push('\n');
    for line in pad_to_frame(&graph, min, max, config.rows_per_level, axis_col) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders the raw `(x, y)` pairs on one line.
pub fn render_samples(scheme: Scheme, waveform: &Waveform) -> String {
    let pairs = waveform
        .samples()
        .iter()
        .map(|s| format!("({}, {})", s.time, s.level.as_i8()))
        .collect::<Vec<_>>();
    format!("{}: {}", scheme, pairs.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linecode::InitialLevel;

    #[test]
    fn sample_series_resolution() {
        let bits: BitSequence = "01".parse().unwrap();
        let waveform = Scheme::Manchester.encode(&bits, InitialLevel::High);
        assert_eq!(
            sample_series(&waveform, 4),
            vec![1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn label_row_centres_bits() {
        let bits: BitSequence = "101".parse().unwrap();
        assert_eq!(label_row(&bits, 2, 4), "    1   0   1");
    }

    #[test]
    fn render_config_limits() {
        assert!(RenderConfig::default().validate().is_ok());
        assert!(RenderConfig::default()
            .with_rows_per_level(MAX_ROWS_PER_LEVEL)
            .validate()
            .is_ok());

        assert!(RenderConfig::default()
            .with_rows_per_level(u32::MAX)
            .validate()
            .is_err());
        assert!(RenderConfig::default()
            .with_rows_per_level(0)
            .validate()
            .is_err());
        assert!(RenderConfig::default()
            .with_columns_per_bit(3)
            .validate()
            .is_err());
        assert!(RenderConfig::default()
            .with_columns_per_bit(usize::MAX - 1)
            .validate()
            .is_err());
    }

    #[test]
    fn render_empty() {
        let waveform = Scheme::NrzL.encode(&BitSequence::EMPTY, InitialLevel::High);
        let text = render(
            Scheme::NrzL,
            &BitSequence::EMPTY,
            &waveform,
            &RenderConfig::default(),
        );
        assert_eq!(text, "NRZ-L\n  (no bits)\n");
    }

    #[test]
    fn render_flat() {
        let bits: BitSequence = "111".parse().unwrap();
        let waveform = Scheme::NrzL.encode(&bits, InitialLevel::High);
        let config = RenderConfig::default()
            .with_columns_per_bit(2)
            .with_rows_per_level(1);
        let text = render(Scheme::NrzL, &bits, &waveform, &config);
        assert_eq!(
            text,
            "NRZ-L\n         1 1 1\n  1.00 ┼──────\n  0.00 ┤\n -1.00 ┤\n"
        );
    }

    #[test]
    fn render_plot() {
        let bits: BitSequence = "1011".parse().unwrap();
        let waveform = Scheme::BipolarAmi.encode(&bits, InitialLevel::High);
        let text = render(Scheme::BipolarAmi, &bits, &waveform, &RenderConfig::default());
        println!("{}", text);

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Bipolar AMI"));
        let labels = lines.next().unwrap();
        assert_eq!(labels.trim().split_whitespace().collect::<String>(), "1011");
        assert!(lines.count() >= 4);
    }

    #[test]
    fn render_shares_frame_across_schemes() {
        let bits: BitSequence = "101".parse().unwrap();
        let config = RenderConfig::default();

        let full = render(
            Scheme::NrzL,
            &bits,
            &Scheme::NrzL.encode(&bits, InitialLevel::High),
            &config,
        );
        let partial = render(
            Scheme::Pseudoternary,
            &bits,
            &Scheme::Pseudoternary.encode(&bits, InitialLevel::High),
            &config,
        );
        println!("{}\n{}", full, partial);

        assert_eq!(full.lines().count(), partial.lines().count());

        let axis = |text: &str| {
            text.lines()
                .skip(2)
                .map(|line| line.chars().position(|c| AXIS_CHARS.contains(&c)))
                .collect::<Vec<_>>()
        };
        assert_eq!(axis(&full), axis(&partial));

        let flat: BitSequence = "1000".parse().unwrap();
        let flat_text = render(
            Scheme::NrzI,
            &flat,
            &Scheme::NrzI.encode(&flat, InitialLevel::High),
            &config,
        );
        assert_eq!(flat_text.lines().count(), full.lines().count());
        assert_eq!(axis(&flat_text)[0], axis(&full)[0]);
    }

    #[test]
    fn render_samples_pairs() {
        let bits: BitSequence = "0".parse().unwrap();
        let waveform = Scheme::Manchester.encode(&bits, InitialLevel::High);
        assert_eq!(
            render_samples(Scheme::Manchester, &waveform),
            "Manchester: (0, 1) (0.5, 1) (0.5, -1) (1, -1)"
        );
    }
}
