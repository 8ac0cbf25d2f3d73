//! End-to-end scenarios for the curve pipeline.

#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;

use linedraw::error::{InputError, LinedrawError};
use linedraw::{ControlPoints, CurvePipeline, CurveRequest, PipelineConfig};

fn init_tracing() {
    // Default: WARN for everything, DEBUG for linedraw. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("linedraw=debug".parse().unwrap_or_default());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn request(lat: &[f64], lon: &[f64], degree: usize, closed: bool, max_distance: f64) -> CurveRequest {
    CurveRequest {
        control: ControlPoints {
            lat: lat.to_vec(),
            lon: lon.to_vec(),
        },
        desired_degree: degree,
        closed,
        max_distance,
    }
}

fn max_gap_m(lat: &[f64], lon: &[f64]) -> f64 {
    let frame = linedraw::geodesy::LocalFrame::new(lat[0], lon[0]).unwrap();
    let points: Vec<_> = lat
        .iter()
        .zip(lon)
        .map(|(&la, &lo)| frame.project(&linedraw::geodesy::GeoPoint::surface(la, lo)))
        .collect();
    points
        .windows(2)
        .map(|w| (w[1] - w[0]).norm())
        .fold(0.0, f64::max)
}

#[test]
fn two_point_line_clamps_degree() {
    init_tracing();
    let req = request(&[0.0, 1.0], &[0.0, 1.0], 3, false, 1000.0);
    let res = CurvePipeline::default().execute(&req).unwrap();

    assert_eq!(res.degree, 1);
    assert!(res.len() > 2);
    assert!(res.distance[0].abs() < f64::EPSILON);
    assert!(max_gap_m(&res.lat, &res.lon) <= 1000.0 + 1e-6);
    assert_abs_diff_eq!(res.lat[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(res.lat[res.len() - 1], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.lon[res.len() - 1], 1.0, epsilon = 1e-9);
}

#[test]
fn straight_path_has_zero_curvature_and_clamped_speed() {
    init_tracing();
    let config = PipelineConfig::default();
    let req = request(&[46.0, 46.001, 46.002], &[7.0, 7.0, 7.0], 2, false, 10.0);
    let res = CurvePipeline::new(config).unwrap().execute(&req).unwrap();

    for (k, v) in res.curvature.iter().zip(&res.speed) {
        assert!(k.abs() < 1e-12, "curvature {k}");
        assert!((v - config.max_speed).abs() < f64::EPSILON, "speed {v}");
    }
}

#[test]
fn near_straight_path_has_small_curvature() {
    init_tracing();
    let req = request(&[46.0, 46.001, 46.002], &[7.0, 7.000_01, 7.0], 2, false, 10.0);
    let res = CurvePipeline::default().execute(&req).unwrap();

    let mid = res.len() / 2;
    assert!(res.curvature[mid].abs() < 1e-3);
    assert!(res.speed.iter().all(|v| v.is_finite() && *v > 0.0));
}

#[test]
fn closed_loop_meets_itself() {
    init_tracing();
    let lat = [0.0, 0.0, 0.01, 0.01, 0.005];
    let lon = [0.0, 0.01, 0.01, 0.0, -0.005];
    let req = request(&lat, &lon, 3, true, 20.0);
    let res = CurvePipeline::default().execute(&req).unwrap();
    let last = res.len() - 1;

    assert_eq!(res.degree, 3);
    assert_abs_diff_eq!(res.lat[0], res.lat[last], epsilon = 1e-9);
    assert_abs_diff_eq!(res.lon[0], res.lon[last], epsilon = 1e-9);
    assert_eq!(res.curvature[last].to_bits(), res.curvature[0].to_bits());
    assert!(max_gap_m(&res.lat, &res.lon) <= 20.0 + 1e-6);
    // Counter-clockwise loop: every turn is to the left.
    assert!(res.curvature.iter().all(|k| *k > 0.0));
}

#[test]
fn open_curve_endpoint_curvature_copies_neighbour() {
    init_tracing();
    let req = request(&[46.0, 46.01, 46.0], &[7.0, 7.01, 7.02], 2, false, 25.0);
    let res = CurvePipeline::default().execute(&req).unwrap();
    let n = res.len();

    assert_eq!(res.curvature[0].to_bits(), res.curvature[1].to_bits());
    assert_eq!(res.curvature[n - 1].to_bits(), res.curvature[n - 2].to_bits());
}

#[test]
fn distance_is_monotonic() {
    init_tracing();
    let req = request(
        &[46.0, 46.01, 46.015, 46.03],
        &[7.0, 7.02, 7.0, 7.01],
        3,
        false,
        15.0,
    );
    let res = CurvePipeline::default().execute(&req).unwrap();
    assert!(res.distance[0].abs() < f64::EPSILON);
    assert!(res.distance.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn requests_decode_and_responses_encode() {
    init_tracing();
    let json = r#"{
        "control": {"lat": [0.0, 1.0], "lon": [0.0, 1.0]},
        "desired_degree": 1,
        "closed": false,
        "max_distance": 1000.0
    }"#;
    let req: CurveRequest = serde_json::from_str(json).unwrap();
    let res = CurvePipeline::default().execute(&req).unwrap();
    let value = serde_json::to_value(&res).unwrap();
    for key in ["degree", "lat", "lon", "distance", "curvature", "speed"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn invalid_inputs_report_input_errors() {
    init_tracing();
    let pipeline = CurvePipeline::default();

    let mismatch = request(&[0.0, 1.0, 2.0], &[0.0, 1.0], 1, false, 10.0);
    assert!(matches!(
        pipeline.execute(&mismatch).unwrap_err(),
        LinedrawError::Input(InputError::LengthMismatch { .. })
    ));

    let zero_distance = request(&[0.0, 1.0], &[0.0, 1.0], 1, false, 0.0);
    assert!(matches!(
        pipeline.execute(&zero_distance).unwrap_err(),
        LinedrawError::Input(InputError::NonPositiveMaxDistance(_))
    ));

    let zero_degree = request(&[0.0, 1.0], &[0.0, 1.0], 0, false, 10.0);
    assert!(matches!(
        pipeline.execute(&zero_degree).unwrap_err(),
        LinedrawError::Input(InputError::InvalidDegree(0))
    ));
}

#[test]
fn concurrent_requests_are_independent() {
    init_tracing();
    let pipeline = std::sync::Arc::new(CurvePipeline::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pipeline = std::sync::Arc::clone(&pipeline);
            std::thread::spawn(move || {
                let offset = f64::from(i) * 0.001;
                let req = request(
                    &[46.0, 46.01 + offset, 46.02],
                    &[7.0, 7.01, 7.0],
                    2,
                    false,
                    20.0,
                );
                pipeline.execute(&req).unwrap()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let sequential = CurvePipeline::default()
        .execute(&request(&[46.0, 46.01, 46.02], &[7.0, 7.01, 7.0], 2, false, 20.0))
        .unwrap();
    assert_eq!(results[0], sequential);
}
