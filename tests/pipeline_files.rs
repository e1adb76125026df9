use std::fs;

use raster_quant::image_pipeline::{
    PipelineConfig, PipelineError, PlanarRgbReader, PlanarRgbWriter, QuantizationMode,
    QuantizePipeline, RasterReader,
};

fn planar_gradient(width: usize, height: usize) -> Vec<u8> {
    let plane = width * height;
    let mut bytes = Vec::with_capacity(plane * 3);
    for channel in 0..3 {
        bytes.extend((0..plane).map(|i| ((i * (channel + 1) * 3) % 256) as u8));
    }
    bytes
}

#[test]
fn test_convert_file_writes_planar_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.rgb");
    let output = dir.path().join("output.rgb");
    fs::write(&input, planar_gradient(16, 12)).unwrap();

    let config = PipelineConfig::builder()
        .scale(0.5)
        .total_bits(12)
        .mode(QuantizationMode::Optimal)
        .build();
    let pipeline =
        QuantizePipeline::with_custom(PlanarRgbReader::new(16, 12), PlanarRgbWriter, config).unwrap();

    let result = pipeline.convert_file(&input, &output).unwrap();

    assert_eq!((result.width(), result.height()), (8, 6));
    assert!(result.metrics().is_none());

    let written = fs::read(&output).unwrap();
    assert_eq!(written.len(), 8 * 6 * 3);

    let decoded = PlanarRgbReader::new(8, 6)
        .read_raster(&mut written.as_slice())
        .unwrap();
    assert_eq!(&decoded, result.raster());
}

#[test]
fn test_convert_file_writes_tiff() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.rgb");
    let output = dir.path().join("output.tiff");
    fs::write(&input, planar_gradient(8, 8)).unwrap();

    let config = PipelineConfig::builder().total_bits(9).build();
    let pipeline = QuantizePipeline::new(config, 8, 8).unwrap();

    let result = pipeline.convert_file(&input, &output).unwrap();

    assert!(result.metrics().is_some());
    let written = fs::read(&output).unwrap();
    assert_eq!(&written[..2], b"II");
}

#[test]
fn test_identity_metrics_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.rgb");
    fs::write(&input, vec![200u8; 4 * 4 * 3]).unwrap();

    let config = PipelineConfig::builder()
        .scale(1.0)
        .total_bits(6)
        .mode(QuantizationMode::Uniform)
        .build();
    let pipeline = QuantizePipeline::new(config, 4, 4).unwrap();

    let result = pipeline.process_file(&input).unwrap();
    let metrics = result.metrics().unwrap();

    assert_eq!(metrics.squared_error_sum, 27648);
    assert!(result.into_raster().into_bytes().iter().all(|&v| v == 224));
}

#[test]
fn test_truncated_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.rgb");
    fs::write(&input, vec![0u8; 4 * 4 * 3 - 1]).unwrap();

    let pipeline = QuantizePipeline::new(PipelineConfig::default(), 4, 4).unwrap();
    let err = pipeline.process_file(&input).unwrap_err();

    assert!(matches!(err, PipelineError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    assert!(!err.is_config_error());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.rgb");

    let pipeline = QuantizePipeline::new(PipelineConfig::default(), 4, 4).unwrap();
    let err = pipeline.process_file(&input).unwrap_err();

    match err {
        PipelineError::InputReadError(msg) => assert!(msg.contains("missing.rgb")),
        other => panic!("expected InputReadError, got {:?}", other),
    }
}

#[test]
fn test_unwritable_output_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.rgb");
    fs::write(&input, planar_gradient(2, 2)).unwrap();
    let output = dir.path().join("no_such_dir").join("out.tiff");

    let pipeline = QuantizePipeline::new(PipelineConfig::default(), 2, 2).unwrap();
    let err = pipeline.convert_file(&input, &output).unwrap_err();

    assert!(matches!(err, PipelineError::OutputWriteError(ref msg) if msg.contains("out.tiff")));
}
