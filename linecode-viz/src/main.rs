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


mod render;

use anyhow::Context;
use bitseq::{BitSequence, InitialLevel};
use clap::Parser;
use linecode::Scheme;
use log::{debug, info};
use render::*;

const INVALID_INPUT: &str =
    "Invalid input. Please enter a binary sequence up to 16 bits containing only '0' and '1'.";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opt {
    /// Silence all output
    #[clap(short, long)]
    quiet: bool,

    /// Verbose mode (-v, -vv, -vvv, etc)
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Binary sequence to encode, up to 16 bits
    bits: Option<String>,

    /// Initial line level for the stateful codes (high or low)
    #[clap(short, long, default_value = "high")]
    initial: InitialLevel,

    /// Only show this scheme (repeatable). Defaults to all of them.
    #[clap(short, long = "scheme")]
    schemes: Vec<Scheme>,

    /// Print the raw (x, y) samples instead of plotting
    #[clap(long)]
    samples: bool,

    /// Horizontal resolution of the plot
    #[clap(long, default_value = "8")]
    columns_per_bit: usize,

    /// Vertical resolution of the plot
    #[clap(long, default_value = "2")]
    rows_per_level: u32,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    stderrlog::new()
        .quiet(opt.quiet)
        .verbosity(opt.verbose)
        .init()?;

    debug!("opt = {:?}", opt);

    let config = RenderConfig::default()
        .with_columns_per_bit(opt.columns_per_bit)
        .with_rows_per_level(opt.rows_per_level);
    config.validate()?;

    let input = opt.bits.clone().unwrap_or_default();
    let bits: BitSequence = input.parse::<BitSequence>().context(INVALID_INPUT)?;

    let schemes = if opt.schemes.is_empty() {
        Scheme::ALL.to_vec()
    } else {
        opt.schemes.clone()
    };

    info!(
        "Encoding {:?} ({} bits), initial level {}, {} scheme(s)",
        bits,
        bits.len(),
        opt.initial,
        schemes.len()
    );

    let encodings = schemes
        .iter()
        .map(|&scheme| (scheme, scheme.encode(&bits, opt.initial)))
        .collect::<Vec<_>>();

    for (scheme, waveform) in encodings.iter() {
        if opt.samples {
            println!("{}", render_samples(*scheme, waveform));
        } else {
            println!("{}", render(*scheme, &bits, waveform, &config));
        }
    }

    Ok(())
}
