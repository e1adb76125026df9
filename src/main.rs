use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use raster_quant::image_pipeline::{
    PipelineConfig, PlanarRgbReader, PlanarRgbWriter, QuantizationMode, QuantizePipeline,
    StandardTiffWriter, TiffCompression, TiffPredictor,
};
use raster_quant::image_pipeline::raw::DEFAULT_DIMENSION;
use raster_quant::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "raster_quant")]
#[command(about = "Resample and quantize raw planar RGB images")]
struct Cli {
    /// Raw planar RGB file (R plane, then G, then B)
    input: PathBuf,

    /// Scale factor in (0, 1]
    scale: f32,

    /// Total quantization bits across the three channels, in [1, 24]
    bits: u32,

    /// -1 uniform, 0..=255 logarithmic around that pivot, 256 optimal
    #[arg(allow_negative_numbers = true)]
    mode: i32,

    /// 1 allows a bit budget that is not a multiple of 3
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    extra_credit: u8,

    /// Input width in pixels
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    width: usize,

    /// Input height in pixels
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    height: usize,

    /// Where to write the processed image
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tiff)]
    format: OutputFormat,

    /// TIFF compression
    #[arg(long, value_enum, default_value_t = Compression::None)]
    compression: Compression,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Tiff,
    Rgb,
}

#[derive(Clone, Copy, ValueEnum)]
enum Compression {
    None,
    Lzw,
    Deflate,
}

impl From<Compression> for TiffCompression {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => TiffCompression::None,
            Compression::Lzw => TiffCompression::Lzw,
            Compression::Deflate => TiffCompression::Deflate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    let config = PipelineConfig::builder()
        .scale(cli.scale)
        .total_bits(cli.bits)
        .mode(QuantizationMode::from_code(cli.mode)?)
        .extra_credit(cli.extra_credit == 1)
        .build();

    let reader = PlanarRgbReader::new(cli.width, cli.height);

    let Some(output_path) = cli.output else {
        let pipeline = QuantizePipeline::new(config, cli.width, cli.height)?;
        let result = pipeline
            .process_file(&cli.input)
            .with_context(|| format!("processing {}", cli.input.display()))?;
        info!("Processed {}x{} image, no output requested", result.width(), result.height());
        return Ok(());
    };

    let result = match cli.format {
        OutputFormat::Tiff => {
            let predictor = match cli.compression {
                Compression::None => TiffPredictor::None,
                _ => TiffPredictor::Horizontal,
            };
            let writer = StandardTiffWriter::new(cli.compression.into(), predictor);
            QuantizePipeline::with_custom(reader, writer, config)?
                .convert_file(&cli.input, &output_path)
        }
        OutputFormat::Rgb => {
            QuantizePipeline::with_custom(reader, PlanarRgbWriter, config)?
                .convert_file(&cli.input, &output_path)
        }
    }
    .with_context(|| format!("converting {}", cli.input.display()))?;

    info!(
        "Conversion successful: {}x{} -> {}",
        result.width(),
        result.height(),
        output_path.display()
    );

    Ok(())
}
