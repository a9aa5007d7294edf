use crate::calibration::common::error::CalibrationError;
use crate::calibration::measurement::reader::MeasurementReader;
use crate::calibration::measurement::ti3_reader::{Ti3Reader, classify_patch};
use crate::calibration::measurement::types::{Channel, PatchSelection};

const BOTH: PatchSelection = PatchSelection { grayscale: true, color: true };
const GRAY_ONLY: PatchSelection = PatchSelection { grayscale: true, color: false };
const COLOR_ONLY: PatchSelection = PatchSelection { grayscale: false, color: true };

const SAMPLE_TI3: &str = "CTI3

DESCRIPTOR \"Argyll Calibration Target chart information 3\"
ORIGINATOR \"Argyll dispread\"
DEVICE_CLASS \"DISPLAY\"
COLOR_REP \"RGB_XYZ\"

NUMBER_OF_FIELDS 7
BEGIN_DATA_FORMAT
SAMPLE_ID RGB_R RGB_G RGB_B
XYZ_X XYZ_Y XYZ_Z
END_DATA_FORMAT

NUMBER_OF_SETS 9
BEGIN_DATA
1 100.00 100.00 100.00 95.05 100.00 108.90
2 0.0000 0.0000 0.0000 0.2000 0.2100 0.2300
3 50.000 50.000 50.000 20.100 21.400 23.300
4 75.000 0.0000 0.0000 21.000 11.200 1.1000
5 0.0000 60.000 0.0000 12.000 24.300 4.0000
6 0.0000 0.0000 40.000 3.1000 1.3000 16.500
7 30.000 40.000 0.0000 10.000 12.000 2.0000
8 12.5
9 100.00 0.0000 0.0000 41.200 21.300 1.9000
END_DATA
";

#[test]
fn test_classify_gray_patch() {
    assert_eq!(classify_patch(50.0, 50.0, 50.0, GRAY_ONLY), Some((Channel::Gray, 0.5)));
    assert_eq!(classify_patch(50.0, 50.0, 50.0, COLOR_ONLY), None);
}

#[test]
fn test_classify_black_patch_is_gray() {
    assert_eq!(classify_patch(0.0, 0.0, 0.0, BOTH), Some((Channel::Gray, 0.0)));
    assert_eq!(classify_patch(0.0, 0.0, 0.0, COLOR_ONLY), None);
}

#[test]
fn test_classify_primary_patches() {
    assert_eq!(classify_patch(75.0, 0.0, 0.0, COLOR_ONLY), Some((Channel::Red, 0.75)));
    assert_eq!(classify_patch(0.0, 20.0, 0.0, BOTH), Some((Channel::Green, 0.2)));
    assert_eq!(classify_patch(0.0, 0.0, 100.0, BOTH), Some((Channel::Blue, 1.0)));
    assert_eq!(classify_patch(75.0, 0.0, 0.0, GRAY_ONLY), None);
}

#[test]
fn test_classify_mixed_patch_discarded() {
    for selection in [BOTH, GRAY_ONLY, COLOR_ONLY, PatchSelection::default()] {
        assert_eq!(classify_patch(30.0, 40.0, 0.0, selection), None);
    }
}

#[test]
fn test_read_sample_file() {
    let measurements = Ti3Reader.read_measurements(SAMPLE_TI3, BOTH).unwrap();

    let gray: Vec<(f64, f64)> = measurements.gray.pairs();
    assert_eq!(gray, vec![(1.0, 100.0), (0.0, 0.21), (0.5, 21.4)]);

    assert_eq!(measurements.red.pairs(), vec![(0.75, 11.2), (1.0, 21.3)]);
    assert_eq!(measurements.green.pairs(), vec![(0.6, 24.3)]);
    assert_eq!(measurements.blue.pairs(), vec![(0.4, 1.3)]);
    assert_eq!(measurements.total_samples(), 7);
    assert!(measurements.red.samples().iter().all(|s| s.channel == Channel::Red));
}

#[test]
fn test_read_respects_selection() {
    let gray_only = Ti3Reader.read_measurements(SAMPLE_TI3, GRAY_ONLY).unwrap();
    assert_eq!(gray_only.gray.len(), 3);
    assert!(gray_only.red.is_empty());
    assert!(gray_only.green.is_empty());
    assert!(gray_only.blue.is_empty());

    let color_only = Ti3Reader.read_measurements(SAMPLE_TI3, COLOR_ONLY).unwrap();
    assert!(color_only.gray.is_empty());
    assert_eq!(color_only.red.len(), 2);
}

#[test]
fn test_missing_format_marker() {
    let contents = SAMPLE_TI3.replace("END_DATA_FORMAT\n", "");
    let result = Ti3Reader.read_measurements(&contents, BOTH);
    assert!(matches!(result, Err(CalibrationError::MissingMarker("END_DATA_FORMAT"))));
}

#[test]
fn test_missing_data_marker() {
    let contents = SAMPLE_TI3.replace("BEGIN_DATA\n", "");
    let result = Ti3Reader.read_measurements(&contents, BOTH);
    assert!(matches!(result, Err(CalibrationError::MissingMarker("BEGIN_DATA"))));
}

#[test]
fn test_missing_luminance_column() {
    let contents = SAMPLE_TI3.replace("XYZ_Y", "XYZ_Q");
    let result = Ti3Reader.read_measurements(&contents, BOTH);
    assert!(matches!(result, Err(CalibrationError::MissingColumn("XYZ_Y"))));
}

#[test]
fn test_invalid_number_is_reported() {
    let contents = SAMPLE_TI3.replace("0.0000 60.000", "0.0000 sixty");
    match Ti3Reader.read_measurements(&contents, BOTH) {
        Err(CalibrationError::InvalidValue { line, value }) => {
            assert_eq!(value, "sixty");
            assert_eq!(line, 20);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_read_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.ti3");
    std::fs::write(&path, SAMPLE_TI3).unwrap();

    let measurements = Ti3Reader.read_file(&path, GRAY_ONLY).unwrap();
    assert_eq!(measurements.gray.len(), 3);

    let missing = Ti3Reader.read_file(dir.path().join("absent.ti3"), GRAY_ONLY);
    assert!(matches!(missing, Err(CalibrationError::InputReadError(_))));
}
