use rayon::prelude::*;
use tracing::{info, instrument, warn};
use std::io::{BufReader, Write};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{PipelineError, Result},
    conversions::types::{PipelineConfig, PipelineOutput},
    metrics::FidelityMetrics,
    output::{RasterWriter, StandardTiffWriter},
    quantize::{ChannelQuantizer, Quantizer},
    raw::{PlanarRgbReader, Raster, RasterReader, CHANNELS},
    sampling::{output_dimensions, SamplingKernel},
};

/// Decode, resample, quantize and optionally export one image.
pub struct QuantizePipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl QuantizePipeline<PlanarRgbReader, StandardTiffWriter> {
    /// Planar RGB in, uncompressed TIFF out.
    pub fn new(config: PipelineConfig, width: usize, height: usize) -> Result<Self> {
        Self::with_custom(
            PlanarRgbReader::new(width, height),
            StandardTiffWriter::default(),
            config,
        )
    }
}

impl<R: RasterReader, W: RasterWriter> QuantizePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    fn validate_dimensions(&self, raster: &Raster) -> Result<()> {
        if raster.width() == 0 || raster.height() == 0 {
            return Err(PipelineError::InvalidDimensions(raster.width(), raster.height()));
        }
        Ok(())
    }

    #[instrument(skip(self, input))]
    pub fn process(&self, input: &mut dyn std::io::Read) -> Result<PipelineOutput> {
        let raster = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_raster(input)?
        };

        self.process_raster(raster)
    }

    /// Runs the pipeline on an already decoded raster, consuming it.
    #[instrument(skip(self, input), fields(width = input.width(), height = input.height()))]
    pub fn process_raster(&self, input: Raster) -> Result<PipelineOutput> {
        {
            let _span = tracing::info_span!("validate_dimensions").entered();
            self.validate_dimensions(&input)?;
        }

        let config = &self.config;
        let (out_width, out_height) = output_dimensions(input.width(), input.height(), config.scale);
        let bits_per_channel = config.bits_per_channel();

        info!("Input:  {}x{}", input.width(), input.height());
        info!(
            scale = config.scale,
            total_bits = config.total_bits,
            mode = config.mode.code(),
            extra_credit = config.extra_credit,
            "Output: {}x{}",
            out_width,
            out_height
        );
        if config.extra_credit && config.total_bits % CHANNELS as u32 != 0 {
            warn!(
                bits_per_channel,
                "Uneven bit split is not implemented, splitting {} bits equally", config.total_bits
            );
        }

        let quantizer = {
            let _span = tracing::info_span!("build_quantizer", mode = %config.mode).entered();
            Quantizer::build(config.mode, bits_per_channel, &input)
        };

        let raster = {
            let _span = tracing::info_span!("resample_and_quantize",
                width = out_width,
                height = out_height
            ).entered();
            let kernel = SamplingKernel::new(config.scale);
            match &quantizer {
                Quantizer::Uniform(q) => resample_and_quantize(&input, kernel, q, out_width, out_height),
                Quantizer::LogPivot(q) => resample_and_quantize(&input, kernel, q, out_width, out_height),
                Quantizer::Optimal(q) => resample_and_quantize(&input, kernel, q, out_width, out_height),
            }?
        };

        let metrics = {
            let _span = tracing::info_span!("compute_metrics").entered();
            FidelityMetrics::compare(&input, &raster)
        };
        if let Some(m) = &metrics {
            info!("MSE(sum) = {}", m.squared_error_sum);
            info!("MAE(sum) = {}", m.absolute_error_sum);
        }

        Ok(PipelineOutput { raster, metrics })
    }

    #[instrument(skip(self, input_path))]
    pub fn process_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PipelineOutput> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Processing file");

        let file = std::fs::File::open(input_path).map_err(|e| {
            PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        self.process(&mut BufReader::new(file))
    }

    /// Encodes a finished output with this pipeline's writer.
    pub fn export(&self, output: &PipelineOutput, sink: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_output").entered();
        self.writer.write_raster(&output.raster, sink)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineOutput> {
        let output_path = output_path.as_ref();

        let result = self.process_file(input_path)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.export(&result, &mut output_file)?;
        output_file.flush()?;

        info!(output = %output_path.display(), "Output written");
        Ok(result)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

/// Fills every output sample exactly once, one row per rayon task.
fn resample_and_quantize<Q: ChannelQuantizer>(
    input: &Raster,
    kernel: SamplingKernel,
    quantizer: &Q,
    out_width: usize,
    out_height: usize,
) -> Result<Raster> {
    let row_len = out_width * CHANNELS;
    let mut data = vec![0u8; row_len * out_height];

    data.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let (cx, cy) = kernel.map_coordinate(x, y, input.width(), input.height());
                for (channel, slot) in pixel.iter_mut().enumerate() {
                    let filtered = kernel.sample(input, cx, cy, channel);
                    *slot = quantizer.quantize(filtered, channel);
                }
            }
        });

    Raster::new(out_width, out_height, data)
}
