//! End-to-end checks of the measurement and classification pipeline.

#![allow(
    clippy::unwrap_used,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use approx::assert_relative_eq;
use footfit::calibration::{CalibrationProfile, DisplayBands, MeasurementBands};
use footfit::cloud::{DecodedGeometry, ModelTransform, VertexCloud};
use footfit::math::{Axis, Point3};
use footfit::operations::analyze::AnalyzeFoot;
use footfit::operations::classify::{
    ArchType, ClassifyFoot, FootRatios, FootType, Locale, Recommend,
};
use footfit::operations::display::{BuildMeasurementLines, LineKind};
use footfit::operations::extract::{ExtractVertices, PlaceModel};
use footfit::operations::measure::{MeasureFoot, MeasurementState, UnitConfidence};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("footfit=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Deterministic pseudo-random sequence in [0, 1).
fn lcg(seed: &mut u64) -> f64 {
    *seed = seed
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (*seed >> 11) as f64 / (1u64 << 53) as f64
}

/// A rough foot-shaped shell: elliptical cross sections whose height peaks
/// at the instep.
fn synthetic_foot(length: f64, width: f64, height: f64) -> Vec<Point3> {
    let mut points = Vec::new();
    for i in 0..=60 {
        let t = f64::from(i) / 60.0;
        let z = t * length;
        let half_w = width * 0.5 * (0.55 + 0.45 * (std::f64::consts::PI * t * 0.8).sin());
        let top = height * (1.0 - (2.0 * t - 1.0).powi(2)).max(0.15);
        for j in 0..24 {
            let a = f64::from(j) / 24.0 * std::f64::consts::TAU;
            let x = half_w * a.cos();
            let y = (top * 0.5) * (1.0 + a.sin());
            points.push(Point3::new(x, y, z));
        }
    }
    points
}

#[test]
fn slab_matches_reference_values() {
    init_tracing();
    let mut points = Vec::new();
    for i in 0..=50 {
        for j in 0..=18 {
            points.push(Point3::new(f64::from(j) * 5.0, 0.0, f64::from(i) * 5.0));
        }
    }
    let cloud = VertexCloud::new(points).unwrap();
    let m = MeasureFoot::new(&cloud).execute();
    assert_relative_eq!(m.length, 250.0);
    assert_relative_eq!(m.width, 90.0);
    assert_eq!(m.confidence, UnitConfidence::MediumMillimeterAssumed);

    let ratios = FootRatios::from_measurement(&m).unwrap();
    assert_relative_eq!(ratios.length_width, 2.78, epsilon = 0.005);
    assert_eq!(
        FootType::from_length_width_ratio(ratios.length_width),
        FootType::Long
    );
}

#[test]
fn measurements_are_finite_and_non_negative() {
    let mut seed = 7;
    for _ in 0..50 {
        let n = 1 + (lcg(&mut seed) * 200.0) as usize;
        let scale = [0.3, 30.0, 300.0, 3000.0][(lcg(&mut seed) * 4.0) as usize % 4];
        let points: Vec<Point3> = (0..n)
            .map(|_| {
                Point3::new(
                    (lcg(&mut seed) - 0.5) * scale,
                    (lcg(&mut seed) - 0.5) * scale,
                    (lcg(&mut seed) - 0.5) * scale,
                )
            })
            .collect();
        let cloud = VertexCloud::new(points).unwrap();
        let m = MeasureFoot::new(&cloud).execute();
        for v in [m.length, m.width, m.height] {
            assert!(v.is_finite() && v >= 0.0, "{m:?}");
        }
    }
}

#[test]
fn empty_ball_band_falls_back_to_full_width() {
    // Nothing between z = 150 and z = 187.5.
    let mut points = Vec::new();
    for i in 0..=29 {
        points.push(Point3::new(0.0, 0.0, f64::from(i) * 5.0));
        points.push(Point3::new(70.0, 0.0, f64::from(i) * 5.0));
    }
    points.push(Point3::new(-12.0, 0.0, 200.0));
    points.push(Point3::new(30.0, 0.0, 250.0));
    let cloud = VertexCloud::new(points).unwrap();

    let m = MeasureFoot::new(&cloud).execute();
    assert_relative_eq!(m.width, 82.0);
}

#[test]
fn centimeter_scan_through_pipeline() {
    init_tracing();
    let geometry = DecodedGeometry::from_positions(
        synthetic_foot(25.0, 9.5, 6.0)
            .into_iter()
            .map(|p| Point3::new(p.x, -p.z, p.y))
            .collect(),
    );
    // Authored with the long axis on y; placement turns it onto z.
    let transform = PlaceModel::new(&geometry).execute().unwrap();
    let analysis = AnalyzeFoot::new(&geometry, transform).execute().unwrap();
    let r = &analysis.report;

    assert_eq!(r.confidence, UnitConfidence::MediumCentimeterAssumed);
    assert_relative_eq!(r.length, 250.0, epsilon = 1e-6);
    assert!(r.width > 0.0 && r.width <= 95.0 + 1e-6);
    assert!(r.height > 0.0 && r.height <= 60.0 + 1e-6);
    assert_ne!(r.foot_type, FootType::Pending);
    assert_eq!(analysis.lines.len(), 3);
}

#[test]
fn display_lines_follow_display_view() {
    let geometry = DecodedGeometry::from_positions(synthetic_foot(260.0, 100.0, 70.0));
    let transform = PlaceModel::new(&geometry).execute().unwrap();
    let views = ExtractVertices::new(&geometry, transform).execute().unwrap();

    // Display view is 150 units long, measurement view keeps millimeters.
    assert_relative_eq!(views.display.extent(Axis::Z), 150.0, epsilon = 1e-9);
    assert_relative_eq!(views.measurement.extent(Axis::Z), 260.0, epsilon = 1e-9);

    let lines = BuildMeasurementLines::new(&views.display).execute();
    let length = lines.iter().find(|l| l.kind == LineKind::Length).unwrap();
    assert_relative_eq!(
        length.start.y,
        views.display.bounds().min_on(Axis::Y) - 5.0,
        epsilon = 1e-9
    );
    assert!((length.end.z - length.start.z) <= 150.0 + 1e-9);
}

#[test]
fn swapped_profile_changes_only_what_it_names() {
    let geometry = DecodedGeometry::from_positions(synthetic_foot(260.0, 100.0, 70.0));
    let baseline = AnalyzeFoot::new(&geometry, ModelTransform::identity())
        .execute()
        .unwrap();

    let narrow = MeasurementBands::new(0.15, 0.20, (0.10, 0.20), (0.30, 0.70)).unwrap();
    let profile = CalibrationProfile::new(narrow, DisplayBands::default());
    let custom = AnalyzeFoot::new(&geometry, ModelTransform::identity())
        .with_profile(profile)
        .execute()
        .unwrap();

    assert_relative_eq!(custom.report.length, baseline.report.length);
    assert_relative_eq!(custom.report.height, baseline.report.height);
    assert!(custom.report.width < baseline.report.width);
    assert_eq!(custom.lines, baseline.lines);
}

#[test]
fn recommendations_are_deterministic_and_ordered() {
    let ratios = FootRatios {
        length_width: 2.1,
        height_length: 0.3,
    };
    let first = Recommend::new(ratios).execute();
    let second = Recommend::new(ratios).execute();
    assert_eq!(first, second);
    assert_eq!(
        first[..2],
        Locale::English.width_advice(FootType::Wide)[..]
    );
    assert_eq!(first[2..], Locale::English.arch_advice(ArchType::High)[..]);
}

#[test]
fn missing_width_is_pending() {
    let c = ClassifyFoot::new(&MeasurementState::Pending).execute();
    assert_eq!(c.foot_type, FootType::Pending);
    assert_eq!(c.arch_type, ArchType::Pending);
    assert!(c.description.starts_with("Insufficient data"));
}
