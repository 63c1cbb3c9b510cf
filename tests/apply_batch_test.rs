mod common;

use arkcfg::camera::request_builder::RequestBuilder;
use arkcfg::camera::stream_options::{Codec, RequestProfile};
use arkcfg::core::camera_manager::{resolve_targets, Target};
use arkcfg::core::selections::Selections;
use arkcfg::errors::AppError;
use arkcfg::operations::apply_op::{apply, ApplyOutcome};
use common::{default_pool, ScriptedTransport};
use std::net::Ipv4Addr;

#[tokio::test]
async fn all_cameras_gets_one_request_each() {
    let pool = default_pool();
    let selections = Selections::from_labels("All Cameras", "H264", "800x600", "5 FPS").unwrap();
    let targets = resolve_targets(selections.target, &pool).unwrap();
    let transport = ScriptedTransport::default();
    let builder = RequestBuilder::new(RequestProfile::FixedH264, 80);

    let report = apply(&transport, &builder, &targets, selections).await;

    let sent = transport.sent_urls();
    assert_eq!(sent.len(), 6);
    for (url, ip) in sent.iter().zip(&pool) {
        assert!(url.starts_with(&format!("http://{}/appquery.cgi?", ip)), "{}", url);
        assert!(url.contains("v_v_hr=3&v_v_hf=1"), "{}", url);
    }
    assert!(report.all_applied());
    let order: Vec<_> = report.outcomes.iter().map(ApplyOutcome::address).collect();
    assert_eq!(order, pool);
}

#[tokio::test]
async fn single_camera_gets_a_single_request() {
    let pool = default_pool();
    let selections = Selections::from_labels("192.168.26.72", "H264", "1280x720", "25 FPS").unwrap();
    let targets = resolve_targets(selections.target, &pool).unwrap();
    let transport = ScriptedTransport::default();
    let builder = RequestBuilder::new(RequestProfile::FixedH264, 80);

    let report = apply(&transport, &builder, &targets, selections).await;

    assert_eq!(transport.sent_urls().len(), 1);
    assert_eq!(report.outcomes, vec![ApplyOutcome::Applied(Ipv4Addr::new(192, 168, 26, 72))]);
}

#[tokio::test]
async fn one_bad_camera_does_not_affect_the_others() {
    let rejected = Ipv4Addr::new(192, 168, 26, 70);
    let unreachable = Ipv4Addr::new(192, 168, 26, 71);
    let transport = ScriptedTransport::default()
        .respond(rejected, Ok(500))
        .respond(unreachable, Err(AppError::Http("connection refused".to_string())));
    let builder = RequestBuilder::new(RequestProfile::CodecAware, 80);
    let selections = Selections::from_labels("All Cameras", "MJPEG", "640x480", "1 FPS").unwrap();
    let targets = vec![rejected, unreachable, Ipv4Addr::new(192, 168, 26, 72)];

    let report = apply(&transport, &builder, &targets, selections).await;

    assert_eq!(
        report.outcomes,
        vec![
            ApplyOutcome::Rejected(rejected, 500),
            ApplyOutcome::Failed(unreachable, "HTTP Error: connection refused".to_string()),
            ApplyOutcome::Applied(Ipv4Addr::new(192, 168, 26, 72)),
        ]
    );
    assert_eq!(report.applied_count(), 1);
    assert_eq!(transport.sent_urls().len(), 3);
    assert!(transport.sent_urls().iter().all(|u| u.contains("v_v_jr=7&v_v_jf=2")));
}

#[tokio::test]
async fn mjpeg_on_fixed_profile_is_never_sent() {
    let pool = default_pool();
    let transport = ScriptedTransport::default();
    let builder = RequestBuilder::new(RequestProfile::FixedH264, 80);
    let selections = Selections {
        target: Target::All,
        codec: Codec::Mjpeg,
        ..Selections::from_labels("All Cameras", "H264", "800x480", "25 FPS").unwrap()
    };

    let report = apply(&transport, &builder, &pool, selections).await;

    assert!(transport.sent_urls().is_empty());
    assert_eq!(report.outcomes.len(), pool.len());
    assert!(report
        .outcomes
        .iter()
        .all(|o| matches!(o, ApplyOutcome::NotSent(_, AppError::UnsupportedCodec(_)))));
}

#[test]
fn unsupported_codec_label_stops_before_any_request() {
    let result = Selections::from_labels("All Cameras", "MJPEG'", "800x600", "5 FPS");
    assert!(matches!(result, Err(AppError::UnsupportedCodec(_))));
}
